// Wire-level byte constants and the fixed sizes named in the data model.

/// `ESC` — introduces C1 escape sequences.
pub const ESC: u8 = 0x1B;
/// Bell — terminates an OSC string.
pub const BEL: u8 = 0x07;
pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LF: u8 = 0x0A;
pub const CR: u8 = 0x0D;

pub const CSI_INTRODUCER: u8 = b'[';
pub const OSC_INTRODUCER: u8 = b']';
pub const G0_INTRODUCER: u8 = b'(';
pub const G1_INTRODUCER: u8 = b')';
pub const HASH_INTRODUCER: u8 = b'#';
pub const SS3_INTRODUCER: u8 = b'O';

/// Tab stops are fixed every 8 columns (spec §4.2, §6).
pub const TAB_WIDTH: usize = 8;

/// Default scrollback capacity in rows (spec §6 — "e.g. 1000 rows").
pub const SCROLLBACK_LINES: usize = 1000;

/// CSI parameter accumulation buffer cap in bytes (spec §6).
pub const PARAM_BUF_CAP: usize = 31;

/// OSC payload accumulation buffer cap in bytes (spec §6).
pub const OSC_BUF_CAP: usize = 63;
