//! Modifier state
//!
//! Casing, alphabet and symbols toggles of one keyboard instance.

use super::layout::Alphabet;

/// The current modifier state of the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// Whether letter keys currently produce uppercase
    pub is_uppercase: bool,
    /// One-shot shift, released by the next editing key
    pub is_shift_active: bool,
    /// Persistent caps lock
    pub is_caps_lock_active: bool,
    /// Cyrillic letter rows instead of Latin
    pub is_russian_layout: bool,
    /// Symbols rows instead of letter rows
    pub is_symbols_layout: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The alphabet shown on the letter rows
    pub fn alphabet(&self) -> Alphabet {
        if self.is_russian_layout {
            Alphabet::Cyrillic
        } else {
            Alphabet::Latin
        }
    }

    /// Release a pending shift; casing falls back to caps lock.
    pub fn release_shift(&mut self) {
        self.is_shift_active = false;
        self.is_uppercase = self.is_caps_lock_active;
    }
}
