//! Logical key tokens shared by the on-screen keyboard and physical keystrokes.

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Uppercase ASCII letter.
    Letter(char),
    Enter,
    Space,
    Backspace,
}

pub const BACKSPACE_GLYPH: &str = "⌫";

/// On-screen keyboard rows as logical tokens.
pub const LAYOUT: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &[
        "ENTER",
        "SPACE",
        "Z",
        "X",
        "C",
        "V",
        "B",
        "N",
        "M",
        BACKSPACE_GLYPH,
    ],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownKey;

impl FromStr for Key {
    type Err = UnknownKey;

    /// Accepts `A`-`Z`, `ENTER`, `SPACE`, `⌫` and `BACKSPACE`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "ENTER" => Ok(Key::Enter),
            "SPACE" => Ok(Key::Space),
            "BACKSPACE" | BACKSPACE_GLYPH => Ok(Key::Backspace),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => Ok(Key::Letter(c)),
                    _ => Err(UnknownKey),
                }
            }
        }
    }
}

impl Key {
    /// Translate `KeyboardEvent.key` into a logical key.
    pub fn from_physical(key: &str) -> Option<Key> {
        match key {
            "Backspace" => Some(Key::Backspace),
            "Enter" => Some(Key::Enter),
            " " => Some(Key::Space),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Key::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Layout keys rendered double width.
    pub fn is_wide(token: &str) -> bool {
        matches!(token, "ENTER" | "SPACE" | BACKSPACE_GLYPH)
    }
}
