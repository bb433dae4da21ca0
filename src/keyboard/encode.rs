//! Key → outbound bytes (spec §4.7) — the inverse of the parser.

use crate::keyboard::keycode::NamedKey;
use crate::keyboard::modifiers::Modifiers;

fn csi_nav(code: u8, final_byte: u8, mod_value: u8) -> Vec<u8> {
    if mod_value == 1 {
        if code == 1 {
            vec![0x1b, b'[', final_byte]
        } else {
            format!("\x1b[{code}{}", final_byte as char).into_bytes()
        }
    } else {
        format!("\x1b[{code};{mod_value}{}", final_byte as char).into_bytes()
    }
}

fn csi_tilde(code: u8, mod_value: u8) -> Vec<u8> {
    if mod_value == 1 {
        format!("\x1b[{code}~").into_bytes()
    } else {
        format!("\x1b[{code};{mod_value}~").into_bytes()
    }
}

fn function_key(ss3_final: u8, csi_final: u8, mod_value: u8) -> Vec<u8> {
    if mod_value == 1 {
        vec![0x1b, b'O', ss3_final]
    } else {
        format!("\x1b[1;{mod_value}{}", csi_final as char).into_bytes()
    }
}

/// Encodes `(modifiers, key)` into the bytes a VT-compatible terminal would send to
/// the master side of a pty. This is what a host's `write_to_master` callback body
/// delivers after a key event (spec §4.7).
#[must_use]
pub fn encode_key(modifiers: Modifiers, key: NamedKey) -> Vec<u8> {
    let mod_value = modifiers.mod_value();

    match key {
        NamedKey::Byte(b) => {
            if modifiers.ctrl() && modifiers == Modifiers::CTRL && b.is_ascii_graphic() {
                vec![b.to_ascii_uppercase().wrapping_sub(0x40)]
            } else {
                vec![b]
            }
        }
        NamedKey::Return => vec![b'\r'],
        NamedKey::Backspace => vec![0x7f],
        NamedKey::Escape => vec![0x1b],
        NamedKey::Tab => vec![b'\t'],

        NamedKey::Home => csi_nav(1, b'H', mod_value),
        NamedKey::End => csi_nav(1, b'F', mod_value),
        NamedKey::Up => csi_nav(1, b'A', mod_value),
        NamedKey::Down => csi_nav(1, b'B', mod_value),
        NamedKey::Left => csi_nav(1, b'D', mod_value),
        NamedKey::Right => csi_nav(1, b'C', mod_value),

        NamedKey::PageUp => csi_tilde(5, mod_value),
        NamedKey::PageDown => csi_tilde(6, mod_value),
        NamedKey::Insert => csi_tilde(2, mod_value),
        NamedKey::Delete => csi_tilde(3, mod_value),

        NamedKey::F1 => function_key(b'P', b'P', mod_value),
        NamedKey::F2 => function_key(b'Q', b'Q', mod_value),
        NamedKey::F3 => function_key(b'R', b'R', mod_value),
        NamedKey::F4 => function_key(b'S', b'S', mod_value),

        NamedKey::F5 => csi_tilde(15, mod_value),
        NamedKey::F6 => csi_tilde(17, mod_value),
        NamedKey::F7 => csi_tilde(18, mod_value),
        NamedKey::F8 => csi_tilde(19, mod_value),
        NamedKey::F9 => csi_tilde(20, mod_value),
        NamedKey::F10 => csi_tilde(21, mod_value),
        NamedKey::F11 => csi_tilde(23, mod_value),
        NamedKey::F12 => csi_tilde(24, mod_value),
    }
}
