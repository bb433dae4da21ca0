//! Host callback surface (spec §6, §9 — "a capability bundle... not raw function
//! pointers on the instance").

use crate::cell::Cell;

/// Optional host hooks, supplied once at construction. Each fires synchronously,
/// during the call that caused it, before that call returns (spec §5).
#[derive(Default)]
pub struct HostCallbacks {
    /// A reply or key-encoded payload the host must write to the pty master.
    pub write_to_master: Option<Box<dyn FnMut(&[u8])>>,
    /// Hint that a broad redraw is warranted (full reset, screen swap, DECALN, ...).
    pub refresh: Option<Box<dyn FnMut()>>,
    /// A single cell changed.
    pub set_cell: Option<Box<dyn FnMut(usize, usize, Cell)>>,
    /// The cursor moved from `(old_row, old_col)` to `(new_row, new_col)`.
    pub move_cursor: Option<Box<dyn FnMut(usize, usize, usize, usize)>>,
}

impl std::fmt::Debug for HostCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCallbacks")
            .field("write_to_master", &self.write_to_master.is_some())
            .field("refresh", &self.refresh.is_some())
            .field("set_cell", &self.set_cell.is_some())
            .field("move_cursor", &self.move_cursor.is_some())
            .finish()
    }
}

impl HostCallbacks {
    pub(crate) fn write_to_master(&mut self, bytes: &[u8]) {
        if let Some(cb) = &mut self.write_to_master {
            cb(bytes);
        }
    }

    pub(crate) fn refresh(&mut self) {
        if let Some(cb) = &mut self.refresh {
            cb();
        }
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(cb) = &mut self.set_cell {
            cb(row, col, cell);
        }
    }

    pub(crate) fn move_cursor(&mut self, old_row: usize, old_col: usize, new_row: usize, new_col: usize) {
        if let Some(cb) = &mut self.move_cursor {
            cb(old_row, old_col, new_row, new_col);
        }
    }
}
