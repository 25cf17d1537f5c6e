//! Platform-agnostic input event types.
//!
//! The presentation layer maps browser or terminal input to these types. The
//! core never sees raw DOM events.

use serde::{Deserialize, Serialize};

/// A named key or a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Backspace,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Modifier keys held while a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Whether a modifier that suppresses text input is held.
    ///
    /// Shift is not one of them: it only changes which character is typed.
    pub const fn blocks_text(self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

/// A single key press delivered to a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                alt: false,
                ctrl: false,
                meta: false,
                shift: false,
            },
        }
    }

    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// Pointer input on window chrome.
///
/// `time_ms` is a monotonic timestamp supplied by the host so gesture
/// timing stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: i32, y: i32, time_ms: u64 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}
