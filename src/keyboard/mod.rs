//! Keyboard-to-bytes encoder (spec §4.7) — the inverse of the parser.

pub mod encode;
pub mod keycode;
pub mod modifiers;

pub use encode::encode_key;
pub use keycode::{NamedKey, NAMED};
pub use modifiers::Modifiers;
