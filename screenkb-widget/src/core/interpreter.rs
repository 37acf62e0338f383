//! Key interpretation
//!
//! Maps a pressed key plus the current modifiers to an action and the next
//! modifier state. Pure: the keyboard applies the result.

use super::keycode::KeyToken;
use super::state::ModifierState;

/// Which modifier a toggle key flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Shift,
    CapsLock,
    Language,
    Symbols,
}

/// What a key press asks the keyboard to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert the resolved literal at the caret
    Insert(String),
    /// Delete the character before the caret
    DeleteBackward,
    /// Reset the value
    Clear,
    /// Submit the form
    Submit,
    /// Modifier-only press; the value is untouched
    Toggle(Toggle),
}

/// Result of interpreting one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub action: KeyAction,
    pub next: ModifierState,
}

/// Interpret a key press under the given modifiers.
///
/// Letter casing is resolved from the modifiers the key was pressed under.
/// An editing key pressed while shift is active releases shift.
pub fn interpret(token: KeyToken, modifiers: &ModifierState) -> Interpretation {
    let mut next = *modifiers;

    if token.is_editing() && modifiers.is_shift_active {
        next.release_shift();
    }

    let action = match token {
        KeyToken::CapsLock => {
            next.is_caps_lock_active = !modifiers.is_caps_lock_active;
            next.is_uppercase = modifiers.is_shift_active || !modifiers.is_uppercase;
            KeyAction::Toggle(Toggle::CapsLock)
        }
        KeyToken::Shift => {
            next.is_shift_active = !modifiers.is_shift_active;
            next.is_uppercase = modifiers.is_caps_lock_active || !modifiers.is_uppercase;
            KeyAction::Toggle(Toggle::Shift)
        }
        KeyToken::ChangeLanguage => {
            next.is_russian_layout = !modifiers.is_russian_layout;
            KeyAction::Toggle(Toggle::Language)
        }
        KeyToken::SwitchToSymbols => {
            next.is_symbols_layout = !modifiers.is_symbols_layout;
            KeyAction::Toggle(Toggle::Symbols)
        }
        KeyToken::Enter => KeyAction::Submit,
        KeyToken::Backspace => KeyAction::DeleteBackward,
        KeyToken::Clear => KeyAction::Clear,
        KeyToken::Space => KeyAction::Insert(" ".to_string()),
        KeyToken::Char(ch) => {
            let literal = if modifiers.is_uppercase {
                ch.to_uppercase().collect()
            } else {
                ch.to_string()
            };
            KeyAction::Insert(literal)
        }
    };

    Interpretation { action, next }
}
