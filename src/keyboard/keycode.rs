//! The closed enumeration of named keys the encoder accepts (spec §4.7).

/// A key event the host hands to [`crate::Terminal::send_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Return,
    Backspace,
    Escape,
    Tab,
    /// A literal printable/control byte, for keys outside the named set.
    Byte(u8),
}

/// Every named (non-`Byte`) variant, for test matrices that want to sweep the whole
/// named set without a `Byte` payload to invent.
pub const NAMED: &[NamedKey] = &[
    NamedKey::F1,
    NamedKey::F2,
    NamedKey::F3,
    NamedKey::F4,
    NamedKey::F5,
    NamedKey::F6,
    NamedKey::F7,
    NamedKey::F8,
    NamedKey::F9,
    NamedKey::F10,
    NamedKey::F11,
    NamedKey::F12,
    NamedKey::Home,
    NamedKey::End,
    NamedKey::Up,
    NamedKey::Down,
    NamedKey::Left,
    NamedKey::Right,
    NamedKey::PageUp,
    NamedKey::PageDown,
    NamedKey::Insert,
    NamedKey::Delete,
    NamedKey::Return,
    NamedKey::Backspace,
    NamedKey::Escape,
    NamedKey::Tab,
];
