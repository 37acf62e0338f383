use tracing::trace;

use super::template::MaskTemplate;

/// Result of a mask edit: the full templated value and the new caret offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskEdit {
    pub value: String,
    pub caret: usize,
}

/// Insert/delete/clear over a fixed-length mask template.
///
/// Every operation takes the current full value and the raw caret offset and
/// returns `None` when the press is a no-op (value and caret stay as they are).
#[derive(Debug, Clone)]
pub struct MaskedValueEditor {
    template: MaskTemplate,
}

impl MaskedValueEditor {
    pub fn new(template: MaskTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &MaskTemplate {
        &self.template
    }

    /// Reset to the empty skeleton with the caret at the first slot.
    pub fn clear(&self) -> MaskEdit {
        MaskEdit {
            value: self.template.skeleton(),
            caret: self.template.prefix_length(),
        }
    }

    /// Write a digit at the caret.
    ///
    /// The digit overwrites the first slot at or after the caret (a caret inside
    /// the prefix counts as sitting on the first slot). The caret then moves to
    /// the next slot, skipping literals, or to the end of the template.
    pub fn insert(&self, value: &str, caret: usize, ch: char) -> Option<MaskEdit> {
        if !ch.is_ascii_digit() {
            trace!("mask insert: ignoring non-digit {:?}", ch);
            return None;
        }

        let len = self.template.len();
        let pos = caret.max(self.template.prefix_length());
        if pos >= len {
            trace!(
                "mask insert: caret {} at end ({} of {} slots filled)",
                pos,
                self.template.digits(value).len(),
                self.template.capacity()
            );
            return None;
        }
        let slot = self.template.next_slot_from(pos)?;

        let mut chars: Vec<char> = self.template.conform(value).chars().collect();
        chars[slot] = ch;

        let caret = self.template.next_slot_from(slot + 1).unwrap_or(len);
        Some(MaskEdit {
            value: chars.into_iter().collect(),
            caret,
        })
    }

    /// Delete the character before the caret.
    ///
    /// A digit there is removed: later digits move one slot to the left and
    /// the last slot reverts to the placeholder. A literal or an empty slot
    /// there is left alone and only the caret moves back.
    /// The caret lands right after the previous digit, or on the first slot.
    pub fn delete_backward(&self, value: &str, caret: usize) -> Option<MaskEdit> {
        let prefix = self.template.prefix_length();
        if caret <= prefix {
            return None;
        }

        let mut chars: Vec<char> = self.template.conform(value).chars().collect();
        let target = caret.min(chars.len()) - 1;
        let slots = self.template.slots();

        if self.template.is_slot(target) && chars[target].is_ascii_digit() {
            let removed = slots.partition_point(|&slot| slot < target);
            for k in removed..slots.len() - 1 {
                chars[slots[k]] = chars[slots[k + 1]];
            }
            if let Some(&last) = slots.last() {
                chars[last] = self.template.placeholder();
            }
        } else {
            trace!("mask delete: nothing to remove at {}", target);
        }

        let caret = slots
            .iter()
            .rev()
            .find(|&&slot| slot < target && chars[slot].is_ascii_digit())
            .map_or(prefix, |&slot| slot + 1);

        Some(MaskEdit {
            value: chars.into_iter().collect(),
            caret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> MaskedValueEditor {
        MaskedValueEditor::new(MaskTemplate::new("+7 (___) ___-__-__", '_').unwrap())
    }

    #[test]
    fn test_insert_skips_literals() {
        let editor = phone();
        let edit = editor.insert("+7 (99_) ___-__-__", 6, '9').unwrap();
        assert_eq!(edit.value, "+7 (999) ___-__-__");
        // ") " is skipped
        assert_eq!(edit.caret, 9);
    }

    #[test]
    fn test_insert_on_literal_writes_next_slot() {
        let editor = phone();
        let edit = editor.insert("+7 (999) ___-__-__", 7, '1').unwrap();
        assert_eq!(edit.value, "+7 (999) 1__-__-__");
        assert_eq!(edit.caret, 10);
    }

    #[test]
    fn test_insert_inside_prefix() {
        let editor = phone();
        let edit = editor.insert("+7 (___) ___-__-__", 0, '5').unwrap();
        assert_eq!(edit.value, "+7 (5__) ___-__-__");
        assert_eq!(edit.caret, 5);
    }

    #[test]
    fn test_insert_overwrites() {
        let editor = phone();
        let edit = editor.insert("+7 (123) ___-__-__", 4, '9').unwrap();
        assert_eq!(edit.value, "+7 (923) ___-__-__");
        assert_eq!(edit.caret, 5);
    }

    #[test]
    fn test_insert_last_slot_moves_to_end() {
        let editor = phone();
        let edit = editor.insert("+7 (999) 123-45-6_", 17, '7').unwrap();
        assert_eq!(edit.value, "+7 (999) 123-45-67");
        assert_eq!(edit.caret, 18);
    }

    #[test]
    fn test_insert_non_digit_is_noop() {
        let editor = phone();
        assert_eq!(editor.insert("+7 (___) ___-__-__", 4, 'a'), None);
        assert_eq!(editor.insert("+7 (___) ___-__-__", 4, ' '), None);
    }

    #[test]
    fn test_delete_shifts_following_digits() {
        let editor = phone();
        let edit = editor.delete_backward("+7 (999) 123-45-67", 12).unwrap();
        assert_eq!(edit.value, "+7 (999) 124-56-7_");
        assert_eq!(edit.caret, 11);
    }

    #[test]
    fn test_delete_after_literal_moves_caret_only() {
        let editor = phone();
        // Caret right after ") ": the area code stays intact
        let edit = editor.delete_backward("+7 (999) ___-__-__", 9).unwrap();
        assert_eq!(edit.value, "+7 (999) ___-__-__");
        assert_eq!(edit.caret, 7);

        let edit = editor.delete_backward("+7 (999) 1__-__-__", 9).unwrap();
        assert_eq!(edit.value, "+7 (999) 1__-__-__");
        assert_eq!(edit.caret, 7);
    }

    #[test]
    fn test_delete_after_empty_slot_moves_caret_only() {
        let editor = phone();
        let edit = editor.delete_backward("+7 (99_) ___-__-__", 7).unwrap();
        assert_eq!(edit.value, "+7 (99_) ___-__-__");
        assert_eq!(edit.caret, 6);
    }

    #[test]
    fn test_delete_last_digit_returns_to_prefix() {
        let editor = phone();
        let edit = editor.delete_backward("+7 (9__) ___-__-__", 5).unwrap();
        assert_eq!(edit.value, "+7 (___) ___-__-__");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_delete_with_nothing_before_caret() {
        let editor = phone();
        let edit = editor.delete_backward("+7 (___) ___-__-__", 10).unwrap();
        assert_eq!(edit.value, "+7 (___) ___-__-__");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_clear() {
        let editor = phone();
        let edit = editor.clear();
        assert_eq!(edit.value, "+7 (___) ___-__-__");
        assert_eq!(edit.caret, 4);
    }
}
