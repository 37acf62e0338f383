//! Value editing: bound fields (plain or masked) and externally held values

use screenkb_engine::{EditableValue, MaskedValueEditor, append_literal, trim_last};
use tracing::trace;

use super::*;

impl ScreenKeyboard {
    /// Apply an editing action to whatever the keyboard edits.
    pub(super) fn apply_edit(
        &mut self,
        action: &KeyAction,
        field: Option<&dyn TextField>,
    ) -> KeyboardResult {
        if self.config.treat_as_external_value {
            return self.edit_external(action);
        }
        let Some(field) = field else {
            return KeyboardResult::not_consumed();
        };
        match &self.mask {
            Some(editor) => Self::edit_masked(editor, action, field),
            None => self.edit_plain(action, field),
        }
    }

    fn at_max_length(&self, len: usize) -> bool {
        self.config.max_length.is_some_and(|max| len >= max)
    }

    /// Caret-aware editing of a bound field
    fn edit_plain(&self, action: &KeyAction, field: &dyn TextField) -> KeyboardResult {
        let text = field.text();
        let caret = field.caret().unwrap_or_else(|| text.chars().count());
        let mut value = EditableValue::with_caret(text, caret);

        match action {
            KeyAction::Insert(literal) => {
                if self.at_max_length(value.len()) {
                    trace!("Max length reached, ignoring {:?}", literal);
                    return KeyboardResult::consumed();
                }
                value.insert(literal);
            }
            KeyAction::DeleteBackward => {
                if value.remove_char_before_caret().is_none() {
                    return KeyboardResult::consumed();
                }
            }
            KeyAction::Clear => value.clear(),
            _ => return KeyboardResult::consumed(),
        }

        let caret = value.caret();
        KeyboardResult::consumed()
            .with_action(KeyboardAction::Change(value.into_text()))
            .with_action(KeyboardAction::SetCaret(caret))
    }

    /// Slot-aware editing of a masked field
    fn edit_masked(
        editor: &MaskedValueEditor,
        action: &KeyAction,
        field: &dyn TextField,
    ) -> KeyboardResult {
        let text = field.text();
        let caret = field
            .caret()
            .unwrap_or_else(|| editor.template().prefix_length());

        let edit = match action {
            KeyAction::Insert(literal) => {
                let mut chars = literal.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => editor.insert(text, caret, ch),
                    _ => None,
                }
            }
            KeyAction::DeleteBackward => editor.delete_backward(text, caret),
            KeyAction::Clear => Some(editor.clear()),
            _ => None,
        };

        match edit {
            Some(edit) => KeyboardResult::consumed()
                .with_action(KeyboardAction::Change(edit.value))
                .with_action(KeyboardAction::SetCaret(edit.caret)),
            None => KeyboardResult::consumed(),
        }
    }

    /// End-only editing of a value held for the host
    fn edit_external(&mut self, action: &KeyAction) -> KeyboardResult {
        let value = match action {
            KeyAction::Insert(literal) => {
                if self.at_max_length(self.value.chars().count()) {
                    trace!("Max length reached, ignoring {:?}", literal);
                    return KeyboardResult::consumed();
                }
                append_literal(&self.value, literal)
            }
            KeyAction::DeleteBackward => {
                if self.value.is_empty() {
                    return KeyboardResult::consumed();
                }
                trim_last(&self.value)
            }
            KeyAction::Clear => String::new(),
            _ => return KeyboardResult::consumed(),
        };

        self.value = value.clone();
        KeyboardResult::consumed().with_action(KeyboardAction::Change(value))
    }
}
