//! The whole engine: ties the parser state machine, the two screens, the
//! scrollback ring, and the host callback surface together (spec §3, §4, §5).

use crate::callbacks::HostCallbacks;
use crate::cell::{Cell, Color};
use crate::constants::{
    BACKSPACE, BEL, CR, CSI_INTRODUCER, ESC, G0_INTRODUCER, G1_INTRODUCER, HASH_INTRODUCER, LF,
    OSC_INTRODUCER, SCROLLBACK_LINES, TAB, TAB_WIDTH,
};
use crate::error::OzTermError;
use crate::keyboard::{encode_key, Modifiers, NamedKey};
use crate::ops;
use crate::ops::sgr::SgrState;
use crate::parser::{ParseState, ParserState};
use crate::screen::Screen;
use crate::scrollback::Scrollback;

/// Construction parameters (spec §1A). `rows`/`cols` are immutable for the life of
/// the resulting `Terminal` (spec §3 — "no runtime resize").
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfig {
    pub rows: usize,
    pub cols: usize,
    pub scrollback_capacity: usize,
}

impl TerminalConfig {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        TerminalConfig { rows, cols, scrollback_capacity: SCROLLBACK_LINES }
    }

    #[must_use]
    pub fn with_scrollback_capacity(mut self, capacity: usize) -> Self {
        self.scrollback_capacity = capacity;
        self
    }
}

/// The write-time default fg/bg (spec §3's `default_color`); also the color new
/// cells are stamped with at write time (spec §4.2).
#[derive(Debug, Clone, Copy, Default)]
struct DefaultColor {
    fg: Color,
    bg: Color,
}

/// The terminal engine. See the module docs and spec §3 for field-level semantics.
pub struct Terminal {
    rows: usize,
    cols: usize,
    screen_main: Screen,
    screen_alt: Screen,
    alt_active: bool,
    saved_cursor_row: usize,
    saved_cursor_col: usize,
    default_color: DefaultColor,
    scroll_top: usize,
    scroll_bottom: usize,
    scrollback: Scrollback,
    scroll_offset: usize,
    callbacks: HostCallbacks,
    parser: ParserState,
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("alt_active", &self.alt_active)
            .field("scroll_top", &self.scroll_top)
            .field("scroll_bottom", &self.scroll_bottom)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl Terminal {
    /// Allocates both screens and the scrollback ring. Fails only if `rows`/`cols`
    /// are zero (spec §7 — the Rust analogue of "construction failure").
    pub fn new(config: TerminalConfig, callbacks: HostCallbacks) -> Result<Self, OzTermError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(OzTermError::InvalidDimensions { rows: config.rows, cols: config.cols });
        }
        Ok(Terminal {
            rows: config.rows,
            cols: config.cols,
            screen_main: Screen::new(config.rows, config.cols),
            screen_alt: Screen::new(config.rows, config.cols),
            alt_active: false,
            saved_cursor_row: 0,
            saved_cursor_col: 0,
            default_color: DefaultColor::default(),
            scroll_top: 0,
            scroll_bottom: config.rows - 1,
            scrollback: Scrollback::new(config.cols, config.scrollback_capacity),
            scroll_offset: 0,
            callbacks,
            parser: ParserState::new(),
        })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn is_alt_active(&self) -> bool { self.alt_active }
    pub fn cursor_position(&self) -> (usize, usize) {
        let s = self.active();
        (s.cursor_row, s.cursor_col)
    }
    pub fn scroll_offset(&self) -> usize { self.scroll_offset }
    pub fn scrollback_count(&self) -> usize { self.scrollback.count() }

    fn active(&self) -> &Screen { if self.alt_active { &self.screen_alt } else { &self.screen_main } }
    fn active_mut(&mut self) -> &mut Screen { if self.alt_active { &mut self.screen_alt } else { &mut self.screen_main } }

    fn blank_cell(&self) -> Cell { Cell::with_color(b' ', self.default_color.fg, self.default_color.bg, false) }

    /// The single place the active screen's cursor is written. Fires `move_cursor`
    /// whenever the position actually changes, so every cursor-moving dispatch gets
    /// the callback for free instead of touching `cursor_row`/`cursor_col` directly.
    fn set_cursor(&mut self, row: usize, col: usize) {
        let (old_row, old_col) = self.cursor_position();
        let s = self.active_mut();
        s.cursor_row = row;
        s.cursor_col = col;
        if (old_row, old_col) != (row, col) {
            self.callbacks.move_cursor(old_row, old_col, row, col);
        }
    }

    /// If the cursor sits in the pending-wrap column, wraps it to column 0 of the
    /// next line (scrolling if that line is the bottom margin) before the caller
    /// proceeds. Shared by `write_printable` and TAB so both treat the pending-wrap
    /// position identically (spec §4.2).
    fn resolve_pending_wrap(&mut self) {
        if self.active().cursor_col == self.cols {
            let row = self.active().cursor_row;
            self.set_cursor(row, 0);
            self.newline();
        }
    }

    // ---------------------------------------------------------------- feeding bytes

    /// Feeds a chunk of bytes produced by the pty master through the parser. Bytes
    /// are processed strictly in order; effects are visible to host callbacks
    /// synchronously, before this call returns (spec §5).
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.feed_byte(b);
        }
    }

    fn feed_byte(&mut self, b: u8) {
        match self.parser.state {
            ParseState::Normal => self.feed_byte_normal(b),
            ParseState::Esc => self.feed_byte_esc(b),
            ParseState::Csi => self.feed_byte_csi(b),
            ParseState::Osc => self.feed_byte_osc(b),
            ParseState::G0 => {
                self.parser.state = ParseState::Normal;
            }
            ParseState::G1 => {
                self.parser.state = ParseState::Normal;
            }
            ParseState::Hash => self.feed_byte_hash(b),
        }
    }

    fn feed_byte_normal(&mut self, b: u8) {
        match b {
            ESC => {
                self.parser.reset_csi_scratch();
                self.parser.reset_osc_scratch();
                self.parser.state = ParseState::Esc;
            }
            0x20..=0x7E | LF | CR | BACKSPACE | TAB => self.put_char(b),
            _ => {}
        }
    }

    fn feed_byte_esc(&mut self, b: u8) {
        match b {
            CSI_INTRODUCER => {
                self.parser.reset_csi_scratch();
                self.parser.state = ParseState::Csi;
            }
            OSC_INTRODUCER => {
                self.parser.reset_osc_scratch();
                self.parser.state = ParseState::Osc;
            }
            G0_INTRODUCER => self.parser.state = ParseState::G0,
            G1_INTRODUCER => self.parser.state = ParseState::G1,
            HASH_INTRODUCER => self.parser.state = ParseState::Hash,
            b'7' => {
                let (r, c) = self.cursor_position();
                self.saved_cursor_row = r;
                self.saved_cursor_col = c;
                self.parser.state = ParseState::Normal;
            }
            b'8' => {
                self.scroll_offset = 0;
                let rows = self.rows;
                let cols = self.cols;
                let row = self.saved_cursor_row.min(rows.saturating_sub(1));
                let col = self.saved_cursor_col.min(cols);
                self.set_cursor(row, col);
                self.parser.state = ParseState::Normal;
            }
            b'c' => {
                self.scroll_offset = 0;
                let (old_row, old_col) = self.cursor_position();
                let blank = Cell::blank();
                self.default_color = DefaultColor::default();
                let screen = self.active_mut();
                screen.attr_protected = false;
                screen.clear_all(blank);
                if (old_row, old_col) != (0, 0) {
                    self.callbacks.move_cursor(old_row, old_col, 0, 0);
                }
                self.callbacks.refresh();
                self.parser.state = ParseState::Normal;
            }
            b'D' => {
                // Index: cursor down one, no scroll at the bottom margin (spec §9
                // open question — deviation from VT100 preserved deliberately).
                self.scroll_offset = 0;
                let rows = self.rows;
                let (row, col) = self.cursor_position();
                self.set_cursor((row + 1).min(rows.saturating_sub(1)), col);
                self.parser.state = ParseState::Normal;
            }
            b'E' => {
                self.scroll_offset = 0;
                let rows = self.rows;
                let (row, _) = self.cursor_position();
                self.set_cursor((row + 1).min(rows.saturating_sub(1)), 0);
                self.parser.state = ParseState::Normal;
            }
            b'M' => {
                self.scroll_offset = 0;
                let (top, bottom) = (self.scroll_top, self.scroll_bottom);
                let blank = self.blank_cell();
                ops::scroll::ozterm_scroll_down(self.active_mut(), top, bottom, 1, blank);
                self.parser.state = ParseState::Normal;
            }
            b'Z' => {
                self.callbacks.write_to_master(ops::dsr::decid_reply());
                self.parser.state = ParseState::Normal;
            }
            b'\\' => {
                self.parser.state = ParseState::Normal;
            }
            _ => self.parser.state = ParseState::Normal,
        }
    }

    fn feed_byte_csi(&mut self, b: u8) {
        match b {
            b'?' | b'>' if self.parser.param_bytes().is_empty() && !self.parser.is_private => {
                self.parser.is_private = true;
            }
            b'0'..=b'9' | b';' => self.parser.push_param_byte(b),
            0x40..=0x7E => {
                let params_raw: Vec<u8> = self.parser.param_bytes().to_vec();
                let is_private = self.parser.is_private;
                self.parser.state = ParseState::Normal;
                self.dispatch_csi(b, &params_raw, is_private);
            }
            _ => self.parser.state = ParseState::Normal,
        }
    }

    fn feed_byte_osc(&mut self, b: u8) {
        match b {
            BEL => self.parser.state = ParseState::Normal,
            ESC => self.parser.state = ParseState::Esc,
            _ => self.parser.push_osc_byte(b),
        }
    }

    fn feed_byte_hash(&mut self, b: u8) {
        if b == b'8' {
            self.scroll_offset = 0;
            let (old_row, old_col) = self.cursor_position();
            self.active_mut().fill_decaln();
            if (old_row, old_col) != (0, 0) {
                self.callbacks.move_cursor(old_row, old_col, 0, 0);
            }
            self.callbacks.refresh();
        }
        self.parser.state = ParseState::Normal;
    }

    // --------------------------------------------------------------- put character

    fn put_char(&mut self, byte: u8) {
        self.scroll_offset = 0;
        match byte {
            LF => self.newline(),
            CR => {
                let row = self.active().cursor_row;
                self.set_cursor(row, 0);
            }
            BACKSPACE => {
                let (row, col) = self.cursor_position();
                if col > 0 {
                    self.set_cursor(row, col - 1);
                }
            }
            TAB => {
                self.resolve_pending_wrap();
                let cols = self.cols;
                let target = ((self.active().cursor_col / TAB_WIDTH) + 1) * TAB_WIDTH;
                let target = target.min(cols);
                while self.active().cursor_col < target {
                    self.write_printable(b' ');
                }
            }
            _ => self.write_printable(byte),
        }
    }

    fn newline(&mut self) {
        let at_bottom = self.active().cursor_row == self.scroll_bottom;
        if at_bottom {
            if !self.alt_active {
                let top_row = self.active().row(self.scroll_top).to_vec();
                self.scrollback.push_line(&top_row);
            }
            let (top, bottom) = (self.scroll_top, self.scroll_bottom);
            let blank = self.blank_cell();
            ops::line::delete_lines(self.active_mut(), top, bottom, 1, blank);
        } else {
            let rows = self.rows;
            let (row, col) = self.cursor_position();
            self.set_cursor((row + 1).min(rows.saturating_sub(1)), col);
        }
    }

    /// Writes one printable/whitespace byte at the cursor, wrapping first if the
    /// cursor sits in the pending-wrap position (spec §4.2).
    fn write_printable(&mut self, byte: u8) {
        self.resolve_pending_wrap();
        let fg = self.default_color.fg;
        let bg = self.default_color.bg;
        let protected = self.active().attr_protected;
        let (row, col) = self.cursor_position();
        let cell = Cell::with_color(byte, fg, bg, protected);
        self.active_mut().set_cell(row, col, cell);
        self.set_cursor(row, col + 1);
        self.callbacks.set_cell(row, col, cell);
    }

    // --------------------------------------------------------------------- CSI

    fn dispatch_csi(&mut self, final_byte: u8, params_raw: &[u8], is_private: bool) {
        use crate::parser::params::{parse_params, ParamsExt};
        let params = parse_params(params_raw);
        let rows = self.rows;
        let cols = self.cols;
        let blank = self.blank_cell();

        match final_byte {
            b'A' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1);
                let (row, col) = self.cursor_position();
                self.set_cursor(ops::cursor::up(row, n), col);
            }
            b'B' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1);
                let (row, col) = self.cursor_position();
                self.set_cursor(ops::cursor::down(row, n, rows), col);
            }
            b'C' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1);
                let (row, col) = self.cursor_position();
                self.set_cursor(row, ops::cursor::right(col.min(cols.saturating_sub(1)), n, cols));
            }
            b'D' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1);
                let (row, col) = self.cursor_position();
                self.set_cursor(row, ops::cursor::left(col.min(cols.saturating_sub(1)), n));
            }
            b'H' | b'f' => {
                self.scroll_offset = 0;
                let (r, c) = ops::cursor::to_position(params.nth_or(0, 1), params.nth_or(1, 1), rows, cols);
                self.set_cursor(r, c);
            }
            b'd' => {
                self.scroll_offset = 0;
                let (r, _) = ops::cursor::to_position(params.nth_or(0, 1), 1, rows, cols);
                let col = self.cursor_position().1;
                self.set_cursor(r, col);
            }
            b'G' => {
                self.scroll_offset = 0;
                let (_, c) = ops::cursor::to_position(1, params.nth_or(0, 1), rows, cols);
                let row = self.cursor_position().0;
                self.set_cursor(row, c);
            }
            b'J' => {
                self.scroll_offset = 0;
                let mode = params.nth_or(0, 0);
                ops::erase::erase_display(self.active_mut(), mode, blank);
            }
            b'K' => {
                self.scroll_offset = 0;
                let mode = params.nth_or(0, 0);
                ops::erase::erase_line(self.active_mut(), mode, blank);
            }
            b'@' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                ops::char_edit::insert_chars(self.active_mut(), n, blank);
            }
            b'P' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                ops::char_edit::delete_chars(self.active_mut(), n, blank);
            }
            b'L' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                let (top, bottom, row) = (self.scroll_top, self.scroll_bottom, self.active().cursor_row);
                if row >= top && row <= bottom {
                    ops::line::insert_lines(self.active_mut(), row, bottom, n, blank);
                }
            }
            b'M' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                let (top, bottom, row) = (self.scroll_top, self.scroll_bottom, self.active().cursor_row);
                if row >= top && row <= bottom {
                    ops::line::delete_lines(self.active_mut(), row, bottom, n, blank);
                }
            }
            b'S' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                let (top, bottom) = (self.scroll_top, self.scroll_bottom);
                ops::scroll::ozterm_scroll_up(self.active_mut(), top, bottom, n, blank, None);
            }
            b'T' => {
                self.scroll_offset = 0;
                let n = params.nth_or(0, 1) as usize;
                let (top, bottom) = (self.scroll_top, self.scroll_bottom);
                ops::scroll::ozterm_scroll_down(self.active_mut(), top, bottom, n, blank);
            }
            b'r' => {
                self.scroll_offset = 0;
                let top_param = params.first().copied().unwrap_or(0);
                let bottom_param = params.get(1).copied().unwrap_or(0);
                let (top, bottom) = ops::scroll::resolve_scroll_region(rows, top_param, bottom_param);
                self.scroll_top = top;
                self.scroll_bottom = bottom;
            }
            b'm' => {
                self.scroll_offset = 0;
                let sgr_params = if params.is_empty() { vec![0] } else { params };
                let mut state =
                    SgrState { fg: self.default_color.fg, bg: self.default_color.bg, protected: self.active().attr_protected };
                ops::sgr::apply_sgr(&mut state, &sgr_params);
                self.default_color.fg = state.fg;
                self.default_color.bg = state.bg;
                self.active_mut().attr_protected = state.protected;
            }
            b'n' => {
                if params.first() == Some(&6) {
                    let (r, c) = self.cursor_position();
                    let reply = ops::dsr::cursor_position_report(r, c);
                    self.callbacks.write_to_master(&reply);
                }
            }
            b'c' => {
                if is_private {
                    self.callbacks.write_to_master(ops::dsr::secondary_device_attributes());
                } else if params.first().copied().unwrap_or(0) == 0 {
                    self.callbacks.write_to_master(ops::dsr::primary_device_attributes());
                }
            }
            b'h' | b'l' => self.dispatch_mode(final_byte == b'h', is_private, &params),
            b't' => {
                if params.first() == Some(&11) {
                    self.callbacks.write_to_master(ops::dsr::window_visible_reply());
                }
            }
            _ => {
                tracing::warn!(final = %(final_byte as char), ?params, "unrecognized CSI sequence, discarding");
            }
        }
    }

    fn dispatch_mode(&mut self, set: bool, is_private: bool, params: &[u32]) {
        if !is_private {
            tracing::warn!(?params, "unrecognized ANSI mode sequence, discarding");
            return;
        }
        for &p in params {
            match ops::mode::classify(p) {
                ops::mode::PrivateMode::AltScreen => {
                    if set {
                        self.switch_to_alt();
                    } else {
                        self.switch_to_main();
                    }
                }
                ops::mode::PrivateMode::AcceptedSilently => {}
                ops::mode::PrivateMode::Unrecognized => {
                    tracing::warn!(mode = p, "unrecognized DEC private mode, discarding");
                }
            }
        }
    }

    // ----------------------------------------------------------------- screen swap

    /// `ESC [ ? 1049 h` (spec §4.6): no content is preserved beyond what the alt
    /// screen already held.
    pub fn switch_to_alt(&mut self) {
        let (old_row, old_col) = self.cursor_position();
        self.alt_active = true;
        let blank = self.blank_cell();
        self.screen_alt.clear_all(blank);
        self.scroll_offset = 0;
        let (row, col) = self.cursor_position();
        if (old_row, old_col) != (row, col) {
            self.callbacks.move_cursor(old_row, old_col, row, col);
        }
        self.callbacks.refresh();
    }

    /// `ESC [ ? 1049 l`.
    pub fn switch_to_main(&mut self) {
        let (old_row, old_col) = self.cursor_position();
        self.alt_active = false;
        self.scroll_offset = 0;
        let (row, col) = self.cursor_position();
        if (old_row, old_col) != (row, col) {
            self.callbacks.move_cursor(old_row, old_col, row, col);
        }
        self.callbacks.refresh();
    }

    // -------------------------------------------------------------------- keyboard

    /// Encodes `(modifiers, key)` and hands the bytes to `write_to_master` (spec
    /// §4.7).
    pub fn send_key(&mut self, modifiers: Modifiers, key: NamedKey) {
        let bytes = encode_key(modifiers, key);
        self.callbacks.write_to_master(&bytes);
    }

    // ------------------------------------------------------------------ scrollback

    /// Scrolls the view by `delta` rows (positive = further into history). Clamped
    /// to `[0, scrollback_count]`. Unlike bytes that reach Put Character or a
    /// mutating dispatch, this never gets snapped back to zero on its own (spec
    /// §4.8).
    pub fn scroll_view_by(&mut self, delta: i32) {
        let count = self.scrollback.count() as i64;
        let next = self.scroll_offset as i64 + delta as i64;
        self.scroll_offset = next.clamp(0, count) as usize;
    }

    pub fn scroll_view_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.scrollback.count());
    }

    /// Resolves visible row `y` against the current scrollback view (spec §4.5).
    pub fn visible_row(&self, y: usize) -> &[Cell] {
        if self.scroll_offset == 0 {
            return self.active().row(y);
        }
        let count = self.scrollback.count();
        // i may run negative conceptually; clamp at 0 via saturating arithmetic.
        let i = count + y;
        let i = i.saturating_sub(self.scroll_offset);
        if i < count {
            self.scrollback.entry(i)
        } else {
            self.active().row(y.saturating_sub(self.scroll_offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(rows: usize, cols: usize) -> Terminal {
        Terminal::new(TerminalConfig::new(rows, cols), HostCallbacks::default()).unwrap()
    }

    #[test]
    fn construction_rejects_zero_dimensions() {
        assert!(Terminal::new(TerminalConfig::new(0, 80), HostCallbacks::default()).is_err());
    }

    #[test]
    fn feed_hello_world_crlf() {
        let mut t = term(25, 80);
        t.feed_bytes(b"Hello\r\nWorld");
        let row0: Vec<u8> = t.visible_row(0)[..5].iter().map(|c| c.character).collect();
        let row1: Vec<u8> = t.visible_row(1)[..5].iter().map(|c| c.character).collect();
        assert_eq!(row0, b"Hello");
        assert_eq!(row1, b"World");
        assert_eq!(t.cursor_position(), (1, 5));
    }

    #[test]
    fn backspace_moves_cursor_left_without_erasing() {
        let mut t = term(25, 80);
        t.feed_bytes(b"AB\x08C");
        assert_eq!(t.visible_row(0)[0].character, b'A');
        assert_eq!(t.visible_row(0)[1].character, b'C');
        assert_eq!(t.cursor_position(), (0, 2));
    }

    #[test]
    fn clear_screen_then_position_and_write() {
        let mut t = term(25, 80);
        t.feed_bytes(b"\x1b[2J\x1b[5;10HX");
        for r in 0..25 {
            for (c, cell) in t.visible_row(r).iter().enumerate() {
                if r == 4 && c == 9 {
                    assert_eq!(cell.character, b'X');
                } else {
                    assert_eq!(cell.character, b' ');
                }
            }
        }
        assert_eq!(t.cursor_position(), (4, 10));
    }

    #[test]
    fn dsr_reports_cursor_position() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let captured: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        let captured_cb = captured.clone();
        let mut callbacks = HostCallbacks::default();
        callbacks.write_to_master = Some(Box::new(move |bytes| {
            captured_cb.borrow_mut().extend_from_slice(bytes);
        }));
        let mut t = Terminal::new(TerminalConfig::new(25, 80), callbacks).unwrap();
        t.feed_bytes(b"\x1b[3;4H"); // row=2,col=3 zero-based
        t.feed_bytes(b"\x1b[6n");
        assert_eq!(*captured.borrow(), b"\x1b[3;4R".to_vec());
    }

    #[test]
    fn newline_at_bottom_margin_evicts_into_scrollback() {
        let mut t = term(3, 2);
        t.feed_bytes(b"\x1b[1;3r"); // full-screen region (redundant, exercises parse path)
        t.feed_bytes(b"\n\n\n"); // scroll three times
        assert!(t.scrollback_count() >= 1);
    }

    #[test]
    fn alt_screen_swap_leaves_main_untouched() {
        let mut t = term(5, 10);
        t.feed_bytes(b"main content");
        t.feed_bytes(b"\x1b[?1049h");
        assert!(t.is_alt_active());
        t.feed_bytes(b"alt content");
        t.feed_bytes(b"\x1b[?1049l");
        assert!(!t.is_alt_active());
        let row0: Vec<u8> = t.visible_row(0)[..12].iter().map(|c| c.character).collect();
        assert_eq!(row0, b"main content");
    }

    #[test]
    fn save_restore_cursor_round_trips() {
        let mut t = term(25, 80);
        t.feed_bytes(b"\x1b[10;20H");
        t.feed_bytes(b"\x1b7");
        t.feed_bytes(b"\x1b[1;1H");
        t.feed_bytes(b"\x1b8");
        assert_eq!(t.cursor_position(), (9, 19));
    }

    #[test]
    fn decaln_fills_screen_with_e() {
        let mut t = term(2, 2);
        t.feed_bytes(b"\x1b#8");
        for r in 0..2 {
            for cell in t.visible_row(r) {
                assert_eq!(cell.character, b'E');
            }
        }
        assert_eq!(t.cursor_position(), (0, 0));
    }

    #[test]
    fn double_ed_2j_is_idempotent() {
        let mut t = term(5, 5);
        t.feed_bytes(b"hello\x1b[2J\x1b[2J");
        for r in 0..5 {
            for cell in t.visible_row(r) {
                assert_eq!(cell.character, b' ');
            }
        }
    }

    #[test]
    fn full_region_decstbm_matches_reset() {
        let mut a = term(10, 10);
        let mut b = term(10, 10);
        a.feed_bytes(b"\x1b[1;10r");
        b.feed_bytes(b"\x1b[r");
        assert_eq!(a.scroll_top, b.scroll_top);
        assert_eq!(a.scroll_bottom, b.scroll_bottom);
    }
}
