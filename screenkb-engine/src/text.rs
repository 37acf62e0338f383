//! Plain (unmasked) value editing.
//!
//! `EditableValue` bundles the text and its caret, which are always operated
//! on together. The free functions cover values held outside a text field,
//! which are only ever edited at their end.

/// Text with a caret position (in characters, not bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableValue {
    text: String,
    caret: usize,
}

impl EditableValue {
    /// Create a value with the caret clamped into bounds.
    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        let text = text.into();
        let caret = caret.min(text.chars().count());
        Self { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Clear the text and move the caret home.
    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Insert text at the caret; the caret moves past the inserted text.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let byte_pos = self
            .text
            .char_indices()
            .nth(self.caret)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert_str(byte_pos, text);
        self.caret += text.chars().count();
    }

    /// Remove the character before the caret.
    pub fn remove_char_before_caret(&mut self) -> Option<char> {
        if self.caret == 0 {
            return None;
        }
        let (byte_start, removed) = self.text.char_indices().nth(self.caret - 1)?;
        self.text
            .replace_range(byte_start..byte_start + removed.len_utf8(), "");
        self.caret -= 1;
        Some(removed)
    }
}

/// Append a literal to an externally held value.
pub fn append_literal(value: &str, literal: &str) -> String {
    let mut out = String::with_capacity(value.len() + literal.len());
    out.push_str(value);
    out.push_str(literal);
    out
}

/// Drop the last character of an externally held value.
pub fn trim_last(value: &str) -> String {
    let mut out = value.to_string();
    out.pop();
    out
}
