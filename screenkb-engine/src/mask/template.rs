use super::error::{MaskError, Result};

/// An immutable mask template.
///
/// All offsets are character offsets into the full templated string, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    chars: Vec<char>,
    placeholder: char,
    /// Offsets of the editable slots, ascending. Never empty.
    slots: Vec<usize>,
}

impl MaskTemplate {
    /// Build a template from its literal text and placeholder character.
    pub fn new(template: &str, placeholder: char) -> Result<Self> {
        if template.is_empty() {
            return Err(MaskError::EmptyTemplate);
        }
        if placeholder.is_ascii_digit() {
            return Err(MaskError::DigitPlaceholder(placeholder));
        }

        let chars: Vec<char> = template.chars().collect();
        let slots: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == placeholder)
            .map(|(i, _)| i)
            .collect();
        if slots.is_empty() {
            return Err(MaskError::MissingPlaceholder {
                template: template.to_string(),
                placeholder,
            });
        }

        Ok(Self {
            chars,
            placeholder,
            slots,
        })
    }

    /// The placeholder character
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Template length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Offset of the first editable slot
    pub fn prefix_length(&self) -> usize {
        self.slots.first().copied().unwrap_or_default()
    }

    /// Number of editable slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Offsets of the editable slots
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Whether the given offset is an editable slot
    pub fn is_slot(&self, pos: usize) -> bool {
        self.chars.get(pos) == Some(&self.placeholder)
    }

    /// First editable slot at or after `pos`
    pub fn next_slot_from(&self, pos: usize) -> Option<usize> {
        self.slots.iter().copied().find(|&slot| slot >= pos)
    }

    /// The template with every slot empty
    pub fn skeleton(&self) -> String {
        self.chars.iter().collect()
    }

    /// Digits entered after the prefix ("value without mask").
    pub fn digits(&self, value: &str) -> String {
        value
            .chars()
            .skip(self.prefix_length())
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Bring an arbitrary value into template shape.
    ///
    /// A value of template length is taken positionally. Anything else is
    /// formatted onto the skeleton: the digits after the template prefix (or all
    /// digits, when the value does not start with the prefix) fill the slots in order.
    pub fn conform(&self, value: &str) -> String {
        if value.chars().count() == self.len() {
            return value.to_string();
        }

        let prefix: String = self.chars[..self.prefix_length()].iter().collect();
        let digits: Vec<char> = match value.strip_prefix(prefix.as_str()) {
            Some(rest) if !prefix.is_empty() => rest.chars().filter(char::is_ascii_digit).collect(),
            _ => value.chars().filter(char::is_ascii_digit).collect(),
        };

        let mut out = self.chars.clone();
        for (&slot, digit) in self.slots.iter().zip(digits) {
            out[slot] = digit;
        }
        out.into_iter().collect()
    }
}
