//! Keyboard layouts
//!
//! Rows are written as `data-key` strings and resolved into tokens when a
//! layout is built.

use serde::Serialize;

use super::keycode::KeyToken;
use super::state::ModifierState;

/// Alphabet of the letter rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    #[default]
    Latin,
    Cyrillic,
}

impl Alphabet {
    /// Name shown on the language key
    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Latin => "English",
            Alphabet::Cyrillic => "Русский",
        }
    }

    pub fn other(&self) -> Alphabet {
        match self {
            Alphabet::Latin => Alphabet::Cyrillic,
            Alphabet::Cyrillic => Alphabet::Latin,
        }
    }
}

const DIGITS_ROW: &[&str] = &[
    "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "+", "backspace",
];

const LATIN_ROWS: [&[&str]; 3] = [
    &[
        "@", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "enter",
    ],
    &[
        "capslock", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'", "\\", "_",
    ],
    &[
        "shift", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "shift",
    ],
];

const CYRILLIC_ROWS: [&[&str]; 3] = [
    &[
        "@", "й", "ц", "у", "к", "е", "н", "г", "ш", "щ", "з", "х", "ъ", "enter",
    ],
    &[
        "capslock", "ф", "ы", "в", "а", "п", "р", "о", "л", "д", "ж", "э", "ё", "_",
    ],
    &[
        "shift", "я", "ч", "с", "м", "и", "т", "ь", "б", "ю", "/", "shift",
    ],
];

const BOTTOM_ROW: &[&str] = &["switchToSymbols", "space", "changeLanguage", "clear"];

// Symbols replace the letter rows; there is no shift row
const SYMBOL_ROWS: [&[&str]; 3] = [
    &[
        "@", "!", "#", "$", "%", "^", "&", "*", "(", ")", "<", ">", "=", "enter",
    ],
    &[
        "№", "/", "?", "%", ":", ",", ".", ";", "{", "}", "[", "]", "|", "\\", "_",
    ],
    &["switchToSymbols", "space", "'", "\"", "~", "clear"],
];

const NUMBERS_ROW: &[&str] = &[
    "7", "8", "9", "4", "5", "6", "1", "2", "3", "clear", "0", "backspace",
];

fn parse_row(keys: &[&str]) -> Vec<KeyToken> {
    keys.iter()
        .filter_map(|key| KeyToken::from_data_key(key))
        .collect()
}

/// A keyboard layout: rows of keys from top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<KeyToken>>,
}

impl Layout {
    /// The layout shown for the given modifiers
    pub fn for_state(modifiers: &ModifierState, numbers_only: bool) -> Self {
        if numbers_only {
            Self::numbers()
        } else {
            Self::full(modifiers.alphabet(), modifiers.is_symbols_layout)
        }
    }

    /// Full five-row layout (four rows while symbols are shown)
    pub fn full(alphabet: Alphabet, symbols: bool) -> Self {
        let rows: Vec<&[&str]> = if symbols {
            vec![DIGITS_ROW, SYMBOL_ROWS[0], SYMBOL_ROWS[1], SYMBOL_ROWS[2]]
        } else {
            let letters = match alphabet {
                Alphabet::Latin => LATIN_ROWS,
                Alphabet::Cyrillic => CYRILLIC_ROWS,
            };
            vec![DIGITS_ROW, letters[0], letters[1], letters[2], BOTTOM_ROW]
        };
        Self {
            rows: rows.into_iter().map(parse_row).collect(),
        }
    }

    /// Single-row numeric pad
    pub fn numbers() -> Self {
        Self {
            rows: vec![parse_row(NUMBERS_ROW)],
        }
    }

    pub fn rows(&self) -> &[Vec<KeyToken>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[KeyToken]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn key_at(&self, row: usize, column: usize) -> Option<KeyToken> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Whether the key is shown on this layout.
    /// Printable keys also match their lowercase form.
    pub fn contains(&self, token: &KeyToken) -> bool {
        let lower = match token {
            KeyToken::Char(ch) => {
                let mut lower = ch.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => KeyToken::Char(l),
                    _ => *token,
                }
            }
            _ => *token,
        };
        self.rows
            .iter()
            .flatten()
            .any(|key| *key == *token || *key == lower)
    }
}
