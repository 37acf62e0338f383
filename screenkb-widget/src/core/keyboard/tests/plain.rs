use super::*;

// --- Bound field, no mask ---

#[test]
fn test_type_into_empty_field() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::empty();

    let result = press(&mut keyboard, &mut field, key('h'));
    assert!(result.consumed);
    assert_eq!(
        result.actions,
        vec![
            KeyboardAction::Change("h".to_string()),
            KeyboardAction::SetCaret(1)
        ]
    );

    type_str(&mut keyboard, &mut field, "i");
    press(&mut keyboard, &mut field, KeyToken::Space);
    type_str(&mut keyboard, &mut field, "there");
    assert_eq!(field.text, "hi there");
    assert_eq!(field.caret, Some(8));
}

#[test]
fn test_backspace_before_caret() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("ab", Some(1));

    let result = press(&mut keyboard, &mut field, KeyToken::Backspace);
    assert_eq!(result.changed_value(), Some("b"));
    assert_eq!(field.text, "b");
    assert_eq!(field.caret, Some(0));
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("ab", Some(0));

    let result = press(&mut keyboard, &mut field, KeyToken::Backspace);
    assert!(result.consumed);
    assert!(result.actions.is_empty());
    assert_eq!(field.text, "ab");
    assert_eq!(field.caret, Some(0));
}

#[test]
fn test_insert_in_middle() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("ac", Some(1));

    press(&mut keyboard, &mut field, key('b'));
    assert_eq!(field.text, "abc");
    assert_eq!(field.caret, Some(2));
}

#[test]
fn test_field_without_caret_appends() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("ab", None);

    press(&mut keyboard, &mut field, key('c'));
    assert_eq!(field.text, "abc");
    assert_eq!(field.caret, Some(3));
}

#[test]
fn test_clear() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("hello", Some(3));

    let result = press(&mut keyboard, &mut field, KeyToken::Clear);
    assert_eq!(result.changed_value(), Some(""));
    assert_eq!(field.text, "");
    assert_eq!(field.caret, Some(0));
}

#[test]
fn test_max_length_blocks_insert() {
    let mut keyboard = ScreenKeyboard::with_config(KeyboardConfig {
        max_length: Some(3),
        ..KeyboardConfig::default()
    });
    let mut field = FieldSnapshot::new("abc", Some(1));

    let result = press(&mut keyboard, &mut field, key('x'));
    assert!(result.consumed);
    assert!(result.changed_value().is_none());
    assert_eq!(field.text, "abc");
    assert_eq!(field.caret, Some(1));

    // Space is an insertion too
    press(&mut keyboard, &mut field, KeyToken::Space);
    assert_eq!(field.text, "abc");

    // Deleting frees room again
    press(&mut keyboard, &mut field, KeyToken::Backspace);
    press(&mut keyboard, &mut field, key('z'));
    assert_eq!(field.text, "zbc");
    assert_eq!(field.caret, Some(1));
}

#[test]
fn test_numbers_only_clear_then_type() {
    let mut keyboard = numbers_keyboard();
    let mut field = FieldSnapshot::empty();

    press(&mut keyboard, &mut field, key('5'));
    press(&mut keyboard, &mut field, KeyToken::Clear);
    press(&mut keyboard, &mut field, key('0'));
    assert_eq!(field.text, "0");
}

#[test]
fn test_numbers_only_ignores_letters() {
    let mut keyboard = numbers_keyboard();
    let mut field = FieldSnapshot::empty();

    let result = press(&mut keyboard, &mut field, key('a'));
    assert!(!result.consumed);
    let result = press(&mut keyboard, &mut field, KeyToken::Enter);
    assert!(!result.consumed);
    assert_eq!(field.text, "");
}

#[test]
fn test_cyrillic_input() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::empty();

    press(&mut keyboard, &mut field, KeyToken::ChangeLanguage);
    type_str(&mut keyboard, &mut field, "привет");
    assert_eq!(field.text, "привет");
    assert_eq!(field.caret, Some(6));

    press(&mut keyboard, &mut field, KeyToken::Backspace);
    assert_eq!(field.text, "приве");
    assert_eq!(field.caret, Some(5));
}

#[test]
fn test_enter_submits_without_edit() {
    let mut keyboard = ScreenKeyboard::new();
    let mut field = FieldSnapshot::new("done", Some(4));

    let result = press(&mut keyboard, &mut field, KeyToken::Enter);
    assert_eq!(result.actions, vec![KeyboardAction::Submit]);
    assert_eq!(field.submits, 1);
    assert_eq!(field.text, "done");
}

#[test]
fn test_no_field_declines() {
    let mut keyboard = ScreenKeyboard::new();

    let result = keyboard.process_key(key('a'), None);
    assert!(!result.consumed);
    assert!(result.actions.is_empty());

    // Modifiers are untouched too
    let result = keyboard.process_key(KeyToken::CapsLock, None);
    assert!(!result.consumed);
    assert!(!keyboard.modifiers().is_caps_lock_active);
}

#[test]
fn test_unknown_data_key_is_ignored() {
    let mut keyboard = ScreenKeyboard::new();
    let field = FieldSnapshot::empty();

    assert!(!keyboard.process_data_key("", Some(&field)).consumed);
    assert!(!keyboard.process_data_key("tab", Some(&field)).consumed);

    let result = keyboard.process_data_key("q", Some(&field));
    assert_eq!(result.changed_value(), Some("q"));
}
