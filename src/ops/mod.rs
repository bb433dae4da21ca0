//! Grid operations: the semantic handlers CSI/ESC/HASH dispatch invokes to mutate a
//! [`crate::screen::Screen`] (spec §4.3, §4.4).
//!
//! Each submodule covers one family of finals, named after the control function it
//! implements rather than the byte that triggers it.

pub mod char_edit;
pub mod cursor;
pub mod dsr;
pub mod erase;
pub mod line;
pub mod mode;
pub mod scroll;
pub mod sgr;
pub mod shift;
