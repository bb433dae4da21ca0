//! ED (`J`) and EL (`K`) — spec §4.3 table, §8 ("Protected cells are invariant under
//! J, K").

use crate::cell::Cell;
use crate::screen::Screen;

/// Erase display. `mode`: 0 = cursor→end, 1 = start→cursor (inclusive), 2 = entire
/// screen. Protected cells are left untouched.
pub fn erase_display(screen: &mut Screen, mode: u32, blank: Cell) {
    let rows = screen.rows();
    let cols = screen.cols();
    let (cur_row, cur_col) = (screen.cursor_row, screen.cursor_col.min(cols.saturating_sub(1)));
    let should_clear = |r: usize, c: usize| -> bool {
        match mode {
            0 => r > cur_row || (r == cur_row && c >= cur_col),
            1 => r < cur_row || (r == cur_row && c <= cur_col),
            _ => true,
        }
    };
    for r in 0..rows {
        for c in 0..cols {
            if should_clear(r, c) && !screen.cell(r, c).protected {
                screen.set_cell(r, c, blank);
            }
        }
    }
}

/// Erase line. `mode`: 0 = cursor→eol, 1 = bol→cursor (inclusive), 2 = entire line.
pub fn erase_line(screen: &mut Screen, mode: u32, blank: Cell) {
    let cols = screen.cols();
    let row = screen.cursor_row;
    let cur_col = screen.cursor_col.min(cols.saturating_sub(1));
    let range: Box<dyn Iterator<Item = usize>> = match mode {
        0 => Box::new(cur_col..cols),
        1 => Box::new(0..=cur_col),
        _ => Box::new(0..cols),
    };
    for c in range {
        if !screen.cell(row, c).protected {
            screen.set_cell(row, c, blank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erase_entire_screen_preserves_protected_cells() {
        let mut s = Screen::new(2, 2);
        s.set_cell(0, 0, Cell::with_color(b'X', Default::default(), Default::default(), true));
        erase_display(&mut s, 2, Cell::blank());
        assert_eq!(s.cell(0, 0).character, b'X');
        assert_eq!(s.cell(0, 1).character, b' ');
        assert_eq!(s.cell(1, 1).character, b' ');
    }

    #[test]
    fn erase_line_mode_zero_clears_cursor_to_eol_only() {
        let mut s = Screen::new(1, 5);
        for c in 0..5 {
            s.set_cell(0, c, Cell::with_color(b'a' + c as u8, Default::default(), Default::default(), false));
        }
        s.cursor_col = 2;
        erase_line(&mut s, 0, Cell::blank());
        assert_eq!(s.row(0).iter().map(|c| c.character).collect::<Vec<_>>(), vec![b'a', b'b', b' ', b' ', b' ']);
    }
}
