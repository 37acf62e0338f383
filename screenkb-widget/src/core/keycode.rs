//! Key tokens and `data-key` resolution

use std::fmt;

/// A key on the on-screen keyboard.
///
/// Printable keys carry their literal value; everything else is a control key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Space,
    Backspace,
    Clear,
    Enter,
    Shift,
    CapsLock,
    ChangeLanguage,
    SwitchToSymbols,
}

impl KeyToken {
    // `data-key` names of the control keys
    pub const BACKSPACE: &'static str = "backspace";
    pub const CLEAR: &'static str = "clear";
    pub const CAPSLOCK: &'static str = "capslock";
    pub const ENTER: &'static str = "enter";
    pub const SHIFT: &'static str = "shift";
    pub const SPACE: &'static str = "space";
    pub const CHANGE_LANGUAGE: &'static str = "changeLanguage";
    pub const SWITCH_TO_SYMBOLS: &'static str = "switchToSymbols";

    /// Resolve a `data-key` string.
    ///
    /// Control keys use their names, printable keys are a single character.
    /// Anything else does not name a key.
    pub fn from_data_key(key: &str) -> Option<Self> {
        let token = match key {
            Self::BACKSPACE => Self::Backspace,
            Self::CLEAR => Self::Clear,
            Self::CAPSLOCK => Self::CapsLock,
            Self::ENTER => Self::Enter,
            Self::SHIFT => Self::Shift,
            Self::SPACE | " " => Self::Space,
            Self::CHANGE_LANGUAGE => Self::ChangeLanguage,
            Self::SWITCH_TO_SYMBOLS => Self::SwitchToSymbols,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Self::Char(ch),
                    _ => return None,
                }
            }
        };
        Some(token)
    }

    /// The `data-key` string for this key
    pub fn data_key(&self) -> String {
        match self {
            Self::Char(ch) => ch.to_string(),
            Self::Space => Self::SPACE.to_string(),
            Self::Backspace => Self::BACKSPACE.to_string(),
            Self::Clear => Self::CLEAR.to_string(),
            Self::Enter => Self::ENTER.to_string(),
            Self::Shift => Self::SHIFT.to_string(),
            Self::CapsLock => Self::CAPSLOCK.to_string(),
            Self::ChangeLanguage => Self::CHANGE_LANGUAGE.to_string(),
            Self::SwitchToSymbols => Self::SWITCH_TO_SYMBOLS.to_string(),
        }
    }

    /// Keys that edit the value (and therefore consume a pending shift)
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Self::Char(_) | Self::Space | Self::Backspace | Self::Clear
        )
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_key())
    }
}
