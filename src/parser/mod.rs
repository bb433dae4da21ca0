//! The byte-level state machine (spec §4.1): `NORMAL | ESC | CSI | OSC | G0 | G1 |
//! HASH`. This module holds only the machine's *state* — the per-`Terminal` scratch
//! that must survive buffer boundaries (spec §9's "parser state... belongs to the
//! `Terminal` instance"). Dispatch lives on [`crate::Terminal`], which owns the
//! screens the handlers mutate.

pub mod params;

use crate::constants::{OSC_BUF_CAP, PARAM_BUF_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Normal,
    Esc,
    Csi,
    Osc,
    G0,
    G1,
    Hash,
}

/// Per-sequence scratch: accumulated CSI parameter bytes, accumulated OSC payload,
/// and whether a `?`/`>` marker opened the current CSI sequence. Lives on `Terminal`,
/// not in module-local or process-wide storage (spec §9).
#[derive(Debug)]
pub struct ParserState {
    pub state: ParseState,
    param_buf: Vec<u8>,
    osc_buf: Vec<u8>,
    pub is_private: bool,
}

impl ParserState {
    pub fn new() -> Self {
        ParserState {
            state: ParseState::Normal,
            param_buf: Vec::with_capacity(PARAM_BUF_CAP),
            osc_buf: Vec::with_capacity(OSC_BUF_CAP),
            is_private: false,
        }
    }

    pub fn reset_csi_scratch(&mut self) {
        self.param_buf.clear();
        self.is_private = false;
    }

    pub fn reset_osc_scratch(&mut self) {
        self.osc_buf.clear();
    }

    /// Appends to the CSI parameter buffer; overflow beyond [`PARAM_BUF_CAP`] is
    /// silently truncated (spec §6, §7).
    pub fn push_param_byte(&mut self, b: u8) {
        if self.param_buf.len() < PARAM_BUF_CAP {
            self.param_buf.push(b);
        }
    }

    /// Appends to the OSC payload buffer; overflow beyond [`OSC_BUF_CAP`] is silently
    /// truncated.
    pub fn push_osc_byte(&mut self, b: u8) {
        if self.osc_buf.len() < OSC_BUF_CAP {
            self.osc_buf.push(b);
        }
    }

    pub fn param_bytes(&self) -> &[u8] { &self.param_buf }
}

impl Default for ParserState {
    fn default() -> Self { Self::new() }
}
