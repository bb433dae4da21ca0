//! Keyboard modifier mask (spec §4.7).

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const LSHIFT = 0b0001;
        const RSHIFT = 0b0010;
        const ALT    = 0b0100;
        const CTRL   = 0b1000;
    }
}

impl Modifiers {
    pub fn shift(self) -> bool { self.intersects(Modifiers::LSHIFT | Modifiers::RSHIFT) }
    pub fn alt(self) -> bool { self.contains(Modifiers::ALT) }
    pub fn ctrl(self) -> bool { self.contains(Modifiers::CTRL) }

    /// `1 + (shift?1:0) + (alt?2:0) + (ctrl?4:0)` (spec §4.7).
    pub fn mod_value(self) -> u8 {
        1 + u8::from(self.shift()) + 2 * u8::from(self.alt()) + 4 * u8::from(self.ctrl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_value_with_no_modifiers_is_one() {
        assert_eq!(Modifiers::empty().mod_value(), 1);
    }

    #[test]
    fn mod_value_with_ctrl_and_shift_is_six() {
        assert_eq!((Modifiers::LSHIFT | Modifiers::CTRL).mod_value(), 6);
    }
}
