//! Protected-aware cell shifting, shared by char, line, and scroll-region operations
//! (spec §4.4, §9: "preserve protected cells in place while moving non-protected cells
//! around them... the reference logic picks the nearest non-protected source in the
//! shift direction, filling with blanks when exhausted").
//!
//! Both directions are expressed over `row[at..]` (or, for line/scroll ops, a column
//! slice standing in for a "row"): protected cells never move and are never
//! overwritten; non-protected cells compact toward the unshifted end and the vacated
//! slots nearest the shift origin are blanked.

use crate::cell::Cell;

/// Shifts the non-protected cells of `row[at..]` right by `n`, as if inserting `n`
/// blanks at `at`. Protected cells keep their index; content that would cross the end
/// of the slice is dropped.
pub fn insert(row: &mut [Cell], at: usize, n: usize, blank: Cell) {
    let len = row.len();
    if at >= len || n == 0 {
        return;
    }
    let nonprotected_dest: Vec<usize> = (at..len).filter(|&i| !row[i].protected).collect();
    let src_vals: Vec<Cell> = nonprotected_dest.iter().map(|&i| row[i]).collect();

    let blank_count = n.min(nonprotected_dest.len());
    for &i in &nonprotected_dest[..blank_count] {
        row[i] = blank;
    }
    let remaining_dest = &nonprotected_dest[blank_count..];
    // `src_vals` has exactly `nonprotected_dest.len()` entries, so the leading
    // `blank_count` of them (the ones nearest the end of the row) are dropped.
    for (k, &i) in remaining_dest.iter().enumerate() {
        row[i] = src_vals[k];
    }
}

/// Shifts the non-protected cells of `row[at..]` left by `n`, as if deleting `n`
/// cells at `at`. Protected cells keep their index; vacated slots at the far end are
/// blanked.
pub fn delete(row: &mut [Cell], at: usize, n: usize, blank: Cell) {
    let len = row.len();
    if at >= len || n == 0 {
        return;
    }
    let nonprotected_dest: Vec<usize> = (at..len).filter(|&i| !row[i].protected).collect();
    let src_vals: Vec<Cell> = nonprotected_dest.iter().map(|&i| row[i]).collect();

    let n = n.min(nonprotected_dest.len());
    let remaining_src = &src_vals[n..];
    for (k, &i) in nonprotected_dest.iter().enumerate() {
        row[i] = *remaining_src.get(k).unwrap_or(&blank);
    }
}
