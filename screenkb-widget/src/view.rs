//! Render-ready description of the keyboard
//!
//! The host paints keys from this view model. Everything in it is derived
//! from the current layout and modifiers each time it is built.

use anyhow::Result;
use serde::Serialize;

use crate::core::keycode::KeyToken;
use crate::core::layout::Layout;
use crate::core::state::ModifierState;

/// Id of the container element used when rendering through a portal
pub const PORTAL_CONTAINER_ID: &str = "screen-keyboard-layout";

/// Label of the symbols key while the symbols rows are shown
const LETTERS_LABEL: &str = "ABC";
/// Label of the symbols key while the letter rows are shown
const SYMBOLS_LABEL: &str = "Symbols";

// Top offset geometry
const SMALL_DISPLAY_MARGIN_TOP: u32 = 60;
const LARGE_DISPLAY_MARGIN_TOP: u32 = 220;
const LARGE_DISPLAY_WIDTH: u32 = 1920;
const MARGIN_BOTTOM: u32 = 32;

/// Where the host mounts the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mount {
    /// Next to the bound field
    #[default]
    Inline,
    /// Inside the `PORTAL_CONTAINER_ID` element
    Portal,
}

/// Vertical offset that places the keyboard below the page form.
pub fn computed_top_offset(viewport_width: u32, form_height: u32) -> u32 {
    let margin_top = if viewport_width >= LARGE_DISPLAY_WIDTH {
        LARGE_DISPLAY_MARGIN_TOP
    } else {
        SMALL_DISPLAY_MARGIN_TOP
    };
    form_height + MARGIN_BOTTOM + margin_top
}

/// One key as the host should paint it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCap {
    /// `data-key` of the key
    pub key: String,
    /// Text shown on the key
    pub label: String,
    /// The key has an icon
    pub icon: bool,
    /// Wider than a letter key
    pub wide: bool,
    /// Dark background
    pub dark: bool,
    /// Pressed-in look (active shift or caps lock)
    pub active: bool,
    /// Takes the remaining row width (space bar)
    pub grow: bool,
}

/// The whole keyboard as the host should paint it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardView {
    pub rows: Vec<Vec<KeyCap>>,
    pub numbers_only: bool,
    pub mount: Mount,
    pub top_offset: Option<u32>,
}

impl KeyboardView {
    pub fn build(
        layout: &Layout,
        modifiers: &ModifierState,
        numbers_only: bool,
        mount: Mount,
        top_offset: Option<u32>,
    ) -> Self {
        let rows = layout
            .rows()
            .iter()
            .map(|row| row.iter().map(|key| key_cap(*key, modifiers)).collect())
            .collect();
        Self {
            rows,
            numbers_only,
            mount,
            top_offset,
        }
    }

    /// Find the cap for a key (first occurrence)
    pub fn cap(&self, key: &str) -> Option<&KeyCap> {
        self.rows.iter().flatten().find(|cap| cap.key == key)
    }

    /// JSON snapshot for the host renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn has_icon(key: KeyToken) -> bool {
    !matches!(key, KeyToken::Char(_) | KeyToken::Space)
}

fn is_wide(key: KeyToken) -> bool {
    match key {
        KeyToken::Char(ch) => ch == '@',
        KeyToken::Space => false,
        _ => true,
    }
}

fn is_dark(key: KeyToken, modifiers: &ModifierState) -> bool {
    if modifiers.is_symbols_layout {
        return matches!(
            key,
            KeyToken::SwitchToSymbols | KeyToken::Backspace | KeyToken::Enter | KeyToken::Clear
        );
    }
    match key {
        KeyToken::Char(ch) => "`@+-[];'\\_,./".contains(ch),
        KeyToken::Space => false,
        _ => true,
    }
}

fn label(key: KeyToken, modifiers: &ModifierState) -> String {
    match key {
        KeyToken::Char(ch) if modifiers.is_uppercase => ch.to_uppercase().collect(),
        KeyToken::Char(ch) => ch.to_string(),
        KeyToken::ChangeLanguage => modifiers.alphabet().other().name().to_string(),
        KeyToken::SwitchToSymbols if modifiers.is_symbols_layout => LETTERS_LABEL.to_string(),
        KeyToken::SwitchToSymbols => SYMBOLS_LABEL.to_string(),
        _ => String::new(),
    }
}

fn key_cap(key: KeyToken, modifiers: &ModifierState) -> KeyCap {
    let active = match key {
        KeyToken::CapsLock => modifiers.is_caps_lock_active,
        KeyToken::Shift => modifiers.is_shift_active,
        _ => false,
    };
    KeyCap {
        key: key.data_key(),
        label: label(key, modifiers),
        // The letters key shows text only
        icon: has_icon(key) && !(key == KeyToken::SwitchToSymbols && modifiers.is_symbols_layout),
        wide: is_wide(key),
        dark: is_dark(key, modifiers),
        active,
        grow: key == KeyToken::Space,
    }
}
