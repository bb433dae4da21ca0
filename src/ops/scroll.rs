//! Scroll-region shifts (`S`/`T`, reverse index, and the newline-triggered scroll) and
//! DECSTBM (`r`) region selection (spec §4.3, §4.4, §9 — `ozterm_scroll_up`/
//! `ozterm_scroll_down` are the two entry points the newline path and explicit `S`/`T`
//! both funnel through).

use crate::cell::Cell;
use crate::ops::line;
use crate::screen::Screen;
use crate::scrollback::Scrollback;

/// Scrolls `[top, bottom]` up by `n` lines. If `scrollback` is given, each evicted top
/// row is appended to it before being overwritten — the newline-triggered variant on
/// the main screen uses this; explicit `CSI S` does not (spec §4.3: "no scrollback
/// eviction").
pub fn ozterm_scroll_up(
    screen: &mut Screen,
    top: usize,
    bottom: usize,
    n: usize,
    blank: Cell,
    scrollback: Option<&mut Scrollback>,
) {
    if top > bottom {
        return;
    }
    let n = n.min(bottom - top + 1);
    if let Some(sb) = scrollback {
        for i in 0..n {
            sb.push_line(screen.row(top + i));
        }
    }
    line::delete_lines(screen, top, bottom, n, blank);
}

/// Scrolls `[top, bottom]` down by `n` lines. Never touches scrollback.
pub fn ozterm_scroll_down(screen: &mut Screen, top: usize, bottom: usize, n: usize, blank: Cell) {
    if top > bottom {
        return;
    }
    line::insert_lines(screen, top, bottom, n, blank);
}

/// DECSTBM: resolves `(top_param, bottom_param)` (1-based, 0 meaning "use default
/// bound") against `rows` into a 0-based `(scroll_top, scroll_bottom)`. Falls back to
/// the full screen when the requested range is out of bounds or inverted
/// (spec §4.3, §7).
pub fn resolve_scroll_region(rows: usize, top_param: u32, bottom_param: u32) -> (usize, usize) {
    let full = (0, rows.saturating_sub(1));
    if rows == 0 {
        return full;
    }
    let top = top_param.max(1) as usize - 1;
    let bottom = if bottom_param == 0 { rows - 1 } else { (bottom_param as usize).saturating_sub(1) };
    if top >= rows || bottom >= rows || top > bottom {
        full
    } else {
        (top, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_up_evicts_top_row_into_scrollback() {
        let mut s = Screen::new(3, 2);
        s.set_cell(0, 0, Cell::with_color(b'A', Default::default(), Default::default(), false));
        s.set_cell(1, 0, Cell::with_color(b'B', Default::default(), Default::default(), false));
        let mut sb = Scrollback::new(2, 10);
        ozterm_scroll_up(&mut s, 0, 2, 1, Cell::blank(), Some(&mut sb));
        assert_eq!(sb.count(), 1);
        assert_eq!(sb.entry(0)[0].character, b'A');
        assert_eq!(s.row(0)[0].character, b'B');
    }

    #[test]
    fn scroll_up_without_scrollback_arg_does_not_evict() {
        let mut s = Screen::new(2, 1);
        ozterm_scroll_up(&mut s, 0, 1, 1, Cell::blank(), None);
        // no panic, no scrollback reference needed.
    }

    #[test]
    fn out_of_range_decstbm_resets_to_full_screen() {
        assert_eq!(resolve_scroll_region(24, 1, 24), (0, 23));
        assert_eq!(resolve_scroll_region(24, 20, 5), (0, 23)); // inverted
        assert_eq!(resolve_scroll_region(24, 1, 100), (0, 23)); // bottom out of range
    }

    #[test]
    fn full_range_decstbm_is_equivalent_to_reset() {
        assert_eq!(resolve_scroll_region(24, 1, 24), resolve_scroll_region(24, 0, 0));
    }
}
