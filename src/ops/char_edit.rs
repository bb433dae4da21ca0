//! ICH (`@`) and DCH (`P`) — insert/delete characters at the cursor (spec §4.3, §4.4).

use crate::cell::Cell;
use crate::ops::shift;
use crate::screen::Screen;

pub fn insert_chars(screen: &mut Screen, n: usize, blank: Cell) {
    let row = screen.cursor_row;
    let col = screen.cursor_col.min(screen.cols());
    shift::insert(screen.row_mut(row), col, n, blank);
}

pub fn delete_chars(screen: &mut Screen, n: usize, blank: Cell) {
    let row = screen.cursor_row;
    let col = screen.cursor_col.min(screen.cols());
    shift::delete(screen.row_mut(row), col, n, blank);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_two_blanks_at_cursor() {
        let mut s = Screen::new(1, 5);
        for c in 0..5 {
            s.set_cell(0, c, Cell::with_color(b'a' + c as u8, Default::default(), Default::default(), false));
        }
        s.cursor_col = 1;
        insert_chars(&mut s, 2, Cell::blank());
        assert_eq!(s.row(0).iter().map(|c| c.character).collect::<Vec<_>>(), vec![b'a', b' ', b' ', b'b', b'c']);
    }

    #[test]
    fn delete_two_chars_at_cursor() {
        let mut s = Screen::new(1, 5);
        for c in 0..5 {
            s.set_cell(0, c, Cell::with_color(b'a' + c as u8, Default::default(), Default::default(), false));
        }
        s.cursor_col = 1;
        delete_chars(&mut s, 2, Cell::blank());
        assert_eq!(s.row(0).iter().map(|c| c.character).collect::<Vec<_>>(), vec![b'a', b'd', b'e', b' ', b' ']);
    }
}
