//! SGR (`m`) — attribute/color reset, protect, and palette-index color selection
//! (spec §4.3, §3A, §9).

use crate::cell::Color;

/// The write-time attribute state SGR mutates: sticky fg/bg color and the protect
/// flag. This is `Terminal::default_color` plus `Screen::attr_protected` bundled for
/// dispatch convenience; callers copy the results back into those two places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrState {
    pub fg: Color,
    pub bg: Color,
    pub protected: bool,
}

impl Default for SgrState {
    fn default() -> Self { SgrState { fg: Color::Default, bg: Color::Default, protected: false } }
}

/// Applies one SGR parameter list to `state`, left to right. `38`/`48` consume the
/// following one or three parameters per the `;5;n` / `;2;r;g;b` extended forms
/// (spec §3A; true-color is parsed and discarded, never out of scope per §1).
pub fn apply_sgr(state: &mut SgrState, params: &[u32]) {
    let mut i = 0;
    while i < params.len() {
        match params[i] {
            0 => *state = SgrState::default(),
            8 => state.protected = true,
            30..=37 => state.fg = Color::Indexed((params[i] - 30) as u8),
            40..=47 => state.bg = Color::Indexed((params[i] - 40) as u8),
            90..=97 => state.fg = Color::Indexed((params[i] - 90 + 8) as u8),
            100..=107 => state.bg = Color::Indexed((params[i] - 100 + 8) as u8),
            39 => state.fg = Color::Default,
            49 => state.bg = Color::Default,
            38 | 48 => {
                let is_fg = params[i] == 38;
                match params.get(i + 1) {
                    Some(5) => {
                        if let Some(&n) = params.get(i + 2) {
                            let color = Color::Indexed(n as u8);
                            if is_fg { state.fg = color } else { state.bg = color }
                            i += 2;
                        }
                    }
                    Some(2) => {
                        // r;g;b consumed and discarded — true-color is out of scope.
                        i += 4.min(params.len() - i - 1);
                    }
                    _ => {}
                }
            }
            // Everything else (bold, underline, reverse video, etc.) is accepted
            // silently — spec §4.3: "others accepted silently".
            _ => {}
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_zero_resets_color_and_protection() {
        let mut s = SgrState { fg: Color::Indexed(3), bg: Color::Indexed(4), protected: true };
        apply_sgr(&mut s, &[0]);
        assert_eq!(s, SgrState::default());
    }

    #[test]
    fn sgr_eight_sets_protected_without_touching_color() {
        let mut s = SgrState::default();
        apply_sgr(&mut s, &[31, 8]);
        assert_eq!(s.fg, Color::Indexed(1));
        assert!(s.protected);
    }

    #[test]
    fn bright_colors_map_into_the_upper_half_of_the_palette() {
        let mut s = SgrState::default();
        apply_sgr(&mut s, &[92, 104]);
        assert_eq!(s.fg, Color::Indexed(10));
        assert_eq!(s.bg, Color::Indexed(12));
    }

    #[test]
    fn extended_256_color_sets_indexed_fg() {
        let mut s = SgrState::default();
        apply_sgr(&mut s, &[38, 5, 196]);
        assert_eq!(s.fg, Color::Indexed(196));
    }

    #[test]
    fn extended_truecolor_is_consumed_but_has_no_effect() {
        let mut s = SgrState::default();
        apply_sgr(&mut s, &[38, 2, 10, 20, 30, 8]);
        assert_eq!(s.fg, Color::Default);
        assert!(s.protected);
    }

    #[test]
    fn default_fg_bg_reset_via_39_49() {
        let mut s = SgrState { fg: Color::Indexed(1), bg: Color::Indexed(2), protected: false };
        apply_sgr(&mut s, &[39, 49]);
        assert_eq!(s.fg, Color::Default);
        assert_eq!(s.bg, Color::Default);
    }
}
