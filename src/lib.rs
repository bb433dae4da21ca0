//! A headless VT100/ANSI terminal emulator core: feed it pty output bytes, read
//! back a grid of cells, and encode key events into the bytes a host writes to
//! the pty master. No I/O, no threads, no rendering — the host owns all three.
//!
//! The entry point is [`Terminal`]. Everything it touches is exposed as its own
//! module so callers can work with the grid model ([`cell`], [`screen`]) or the
//! keyboard encoder ([`keyboard`]) directly when that's all they need.

pub mod callbacks;
pub mod cell;
pub mod constants;
pub mod error;
pub mod keyboard;
pub mod ops;
pub mod parser;
pub mod screen;
pub mod scrollback;
pub mod terminal;

pub use callbacks::HostCallbacks;
pub use cell::{Cell, Color};
pub use error::OzTermError;
pub use keyboard::{encode_key, Modifiers, NamedKey};
pub use screen::Screen;
pub use scrollback::Scrollback;
pub use terminal::{Terminal, TerminalConfig};
