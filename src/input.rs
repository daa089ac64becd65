//! Key input translation
//!
//! Only the small set of keys a host forwards raw; full key-to-escape
//! sequence tables are the engine's business.

use crate::engine::SpecialKey;

/// A key press as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Modifier keys arrive as their own events on some toolkits and must
    /// not reach the child process.
    Modifier,
}

/// What to hand the engine for one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedKey {
    Bytes(Vec<u8>),
    Special(SpecialKey),
    Ignored,
}

/// Translate a key press into engine input.
pub fn encode_key(key: KeyInput) -> EncodedKey {
    match key {
        KeyInput::Char(c) => {
            let mut buf = [0u8; 4];
            EncodedKey::Bytes(c.encode_utf8(&mut buf).as_bytes().to_vec())
        }
        KeyInput::Enter => EncodedKey::Bytes(b"\n".to_vec()),
        KeyInput::Backspace => EncodedKey::Bytes(b"\x08".to_vec()),
        KeyInput::Tab => EncodedKey::Bytes(b"\t".to_vec()),
        KeyInput::Escape => EncodedKey::Bytes(b"\x1b".to_vec()),
        KeyInput::Up => EncodedKey::Special(SpecialKey::Up),
        KeyInput::Down => EncodedKey::Special(SpecialKey::Down),
        KeyInput::Left => EncodedKey::Special(SpecialKey::Left),
        KeyInput::Right => EncodedKey::Special(SpecialKey::Right),
        KeyInput::Modifier => EncodedKey::Ignored,
    }
}
