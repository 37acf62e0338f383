//! Tests for the keyboard widget

use super::*;
use crate::host::FieldSnapshot;

mod plain;

fn key(ch: char) -> KeyToken {
    KeyToken::Char(ch)
}

/// Press a key on a bound field and write the result back into it
fn press(keyboard: &mut ScreenKeyboard, field: &mut FieldSnapshot, token: KeyToken) -> KeyboardResult {
    let result = keyboard.process_key(token, Some(&*field));
    result.dispatch(field);
    result
}

/// Type a string of printable keys into a bound field
fn type_str(keyboard: &mut ScreenKeyboard, field: &mut FieldSnapshot, text: &str) {
    for ch in text.chars() {
        press(keyboard, field, key(ch));
    }
}

fn numbers_keyboard() -> ScreenKeyboard {
    ScreenKeyboard::with_config(KeyboardConfig {
        use_only_numbers: true,
        ..KeyboardConfig::default()
    })
}

fn external_keyboard(initial: &str) -> ScreenKeyboard {
    ScreenKeyboard::with_config(KeyboardConfig {
        initial_value: initial.to_string(),
        treat_as_external_value: true,
        ..KeyboardConfig::default()
    })
}
