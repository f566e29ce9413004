#![no_std]

//! # Input Types
//!
//! Key event types delivered by the host page to the terminal.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input is a structured key identifier plus modifiers
//! - **Host-neutral**: Mirrors what a browser `keydown` exposes, nothing more
//! - **Testable**: Events are serializable and can be scripted for tests
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes
//! - Key release/repeat tracking
//! - IME composition

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Keyboard event
///
/// One key press as reported by the host. The interpreter marks the event
/// consumed when it acts on it, so the host can suppress its default behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that was pressed
    pub code: KeyCode,
    /// Modifier keys that were active
    pub modifiers: Modifiers,
    /// Set once a consumer has acted on the event
    #[serde(default, skip_serializing)]
    consumed: bool,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            consumed: false,
        }
    }

    /// Creates an unmodified key event
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::none())
    }

    /// Creates an unmodified printable character event
    pub fn char(ch: char) -> Self {
        Self::plain(KeyCode::Char(ch))
    }

    /// Creates a Ctrl+<ch> event
    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), Modifiers::CTRL)
    }

    /// Returns the printable character, if this key carries one
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }

    /// Returns true for Ctrl+C (either case)
    pub fn is_interrupt(&self) -> bool {
        self.modifiers.is_ctrl() && matches!(self.code, KeyCode::Char('c') | KeyCode::Char('C'))
    }

    /// Marks the event as handled
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// Returns true if a consumer acted on the event
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Key code
///
/// Either a single printable character or one of the named keys the
/// terminal understands. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A single printable character
    Char(char),
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Tab,
    Escape,
    /// Unmapped named key (Home, F1, Shift on its own, ...)
    Other,
}

impl KeyCode {
    /// Parses a browser-style key identifier (`"Enter"`, `"ArrowUp"`, `"a"`)
    pub fn from_key_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::Char(ch);
        }

        match name {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{}", ch),
            Self::Up => write!(f, "ArrowUp"),
            Self::Down => write!(f, "ArrowDown"),
            Self::Left => write!(f, "ArrowLeft"),
            Self::Right => write!(f, "ArrowRight"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Modifier keys
///
/// Bitflags representing modifier key states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super/Windows key
    pub const META: Self = Self { bits: 1 << 3 };

    /// Creates a new modifier set with no modifiers
    pub fn none() -> Self {
        Self::NONE
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifiers are pressed
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}
