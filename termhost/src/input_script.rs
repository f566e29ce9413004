//! # Input Script Parser
//!
//! A line-based key script for deterministic tests and demos.
//!
//! ## Format
//!
//! Each line is one input action:
//! - Key names: `Enter`, `Backspace`, `Delete`, `Tab`, `Escape`, `Space`
//! - Arrow keys: `Up`, `Down`, `Left`, `Right` (or `ArrowUp`, ...)
//! - Single characters: `a`, `-`, `#`... (a lone `#` is a character)
//! - Modifiers: `Ctrl+c`, `Alt+x`
//! - Text strings: `"ls -la"` (expanded to individual key presses)
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # List everything, then abort a half-typed line
//! "ls -la"
//! Enter
//! "rm -rf /"
//! Ctrl+c
//! ```

use std::collections::VecDeque;

use input_types::{KeyCode, KeyEvent, Modifiers};
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Invalid modifier: {0}")]
    InvalidModifier(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// Parsed key script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    events: VecDeque<KeyEvent>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut events = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || (line.starts_with('#') && line.len() > 1) {
                continue;
            }

            let parsed = Self::parse_line(line).map_err(|e| InputScriptError::ParseError {
                line: line_num + 1,
                message: e.to_string(),
            })?;
            events.extend(parsed);
        }

        if events.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { events })
    }

    /// Script that types each line and presses Enter after it
    pub fn from_typed_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut events = VecDeque::new();
        for line in lines {
            events.extend(line.as_ref().chars().map(KeyEvent::char));
            events.push_back(KeyEvent::plain(KeyCode::Enter));
        }
        Self { events }
    }

    /// Parses a single line of script
    fn parse_line(line: &str) -> Result<Vec<KeyEvent>, InputScriptError> {
        if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
            let text = &line[1..line.len() - 1];
            return Ok(text.chars().map(KeyEvent::char).collect());
        }

        let mut chars = line.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(vec![KeyEvent::char(ch)]);
        }

        let (modifiers, key_name) = Self::parse_modifiers(line)?;
        let code = Self::parse_keycode(key_name)?;
        Ok(vec![KeyEvent::new(code, modifiers)])
    }

    /// Parses modifiers from a key string (e.g., "Ctrl+c" → (Modifiers::CTRL, "c"))
    fn parse_modifiers(input: &str) -> Result<(Modifiers, &str), InputScriptError> {
        let mut modifiers = Modifiers::none();
        let parts: Vec<&str> = input.split('+').collect();

        if parts.len() == 1 {
            return Ok((modifiers, input));
        }

        for modifier_str in &parts[..parts.len() - 1] {
            modifiers = match modifier_str.trim().to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.with(Modifiers::CTRL),
                "alt" => modifiers.with(Modifiers::ALT),
                "shift" => modifiers.with(Modifiers::SHIFT),
                "super" | "meta" => modifiers.with(Modifiers::META),
                other => return Err(InputScriptError::InvalidModifier(other.to_string())),
            };
        }

        Ok((modifiers, parts[parts.len() - 1].trim()))
    }

    /// Parses a key name to KeyCode
    fn parse_keycode(name: &str) -> Result<KeyCode, InputScriptError> {
        if name.chars().count() == 1 {
            return Ok(KeyCode::from_key_name(name));
        }

        let key_name = match name.to_lowercase().as_str() {
            "enter" | "return" => "Enter",
            "escape" | "esc" => "Escape",
            "backspace" | "back" => "Backspace",
            "delete" | "del" => "Delete",
            "tab" => "Tab",
            "space" => " ",
            "up" | "arrowup" => "ArrowUp",
            "down" | "arrowdown" => "ArrowDown",
            "left" | "arrowleft" => "ArrowLeft",
            "right" | "arrowright" => "ArrowRight",
            _ => return Err(InputScriptError::InvalidKeyName(name.to_string())),
        };
        Ok(KeyCode::from_key_name(key_name))
    }

    /// Gets the next event
    pub fn next_event(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    /// Returns the number of remaining events
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Iterator for InputScript {
    type Item = KeyEvent;

    fn next(&mut self) -> Option<KeyEvent> {
        self.next_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_text() {
        let mut script = InputScript::from_text("\"ls -l\"").unwrap();
        assert_eq!(script.remaining(), 5);
        assert_eq!(script.next_event(), Some(KeyEvent::char('l')));
        assert_eq!(script.next_event(), Some(KeyEvent::char('s')));
        assert_eq!(script.next_event(), Some(KeyEvent::char(' ')));
    }

    #[test]
    fn test_parse_named_keys() {
        let script =
            InputScript::from_text("Enter\nUp\nArrowDown\nleft\nRight\nBackspace\nDelete\nSpace")
                .unwrap();
        let codes: Vec<KeyCode> = script.map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                KeyCode::Enter,
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Backspace,
                KeyCode::Delete,
                KeyCode::Char(' '),
            ]
        );
    }

    #[test]
    fn test_parse_ctrl_c() {
        let mut script = InputScript::from_text("Ctrl+c").unwrap();
        let event = script.next_event().unwrap();
        assert!(event.is_interrupt());
    }

    #[test]
    fn test_single_characters() {
        let script = InputScript::from_text("-\n#\n+").unwrap();
        let codes: Vec<KeyCode> = script.map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![KeyCode::Char('-'), KeyCode::Char('#'), KeyCode::Char('+')]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let script =
            InputScript::from_text("# typing\n\n\"a\"\n   # indented comment\nEnter").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_empty_quoted_string_is_empty_script() {
        assert_eq!(
            InputScript::from_text("\"\""),
            Err(InputScriptError::EmptyScript)
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(
            InputScript::from_text("# nothing\n"),
            Err(InputScriptError::EmptyScript)
        );
    }

    #[test]
    fn test_invalid_key_reports_line() {
        let err = InputScript::from_text("Enter\nPageDown").unwrap_err();
        assert_eq!(
            err,
            InputScriptError::ParseError {
                line: 2,
                message: "Invalid key name: PageDown".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_modifier() {
        let err = InputScript::from_text("Hyper+x").unwrap_err();
        assert!(matches!(err, InputScriptError::ParseError { line: 1, .. }));
        assert!(err.to_string().contains("Invalid modifier: hyper"));
    }

    #[test]
    fn test_browser_key_names_agree_with_key_codes() {
        let names = [
            "Enter",
            "Backspace",
            "Delete",
            "ArrowUp",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
        ];
        for name in names {
            let mut script = InputScript::from_text(name).unwrap();
            let event = script.next_event().unwrap();
            assert_eq!(event.code, KeyCode::from_key_name(name));
        }
    }

    #[test]
    fn test_from_typed_lines() {
        let script = InputScript::from_typed_lines(["pwd", ""]);
        let events: Vec<KeyEvent> = script.collect();
        assert_eq!(events.len(), 5);
        assert_eq!(events[3].code, KeyCode::Enter);
        assert_eq!(events[4].code, KeyCode::Enter);
    }
}
