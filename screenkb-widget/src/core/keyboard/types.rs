//! Type definitions for the keyboard widget

use anyhow::{Context, Result};
use screenkb_engine::MaskTemplate;

use crate::config::settings::Settings;
use crate::host::KeyboardHost;
use crate::view::Mount;

/// Action to be performed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardAction {
    /// The value changed (fired after every text-mutating press)
    Change(String),
    /// Move the bound field's caret (character offset)
    SetCaret(usize),
    /// Submit the form (enter key)
    Submit,
    /// Modifiers or layout changed; the keyboard needs to be repainted
    UpdateLayout,
}

/// Result of processing a key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardResult {
    /// Whether the press was handled by the keyboard
    pub consumed: bool,
    /// Actions to perform, in order
    pub actions: Vec<KeyboardAction>,
}

impl KeyboardResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: KeyboardAction) -> Self {
        self.actions.push(action);
        self
    }

    /// The new value, if the press changed it
    pub fn changed_value(&self) -> Option<&str> {
        self.actions.iter().rev().find_map(|action| match action {
            KeyboardAction::Change(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// Deliver the actions to the host, in order.
    pub fn dispatch(&self, host: &mut impl KeyboardHost) {
        for action in &self.actions {
            match action {
                KeyboardAction::Change(value) => host.on_change(value),
                KeyboardAction::SetCaret(caret) => host.set_caret(*caret),
                KeyboardAction::Submit => host.on_submit(),
                KeyboardAction::UpdateLayout => host.on_layout_changed(),
            }
        }
    }
}

/// Configuration for the keyboard widget
#[derive(Debug, Clone, Default)]
pub struct KeyboardConfig {
    /// Starting value when editing an externally held value
    pub initial_value: String,
    /// Maximum value length in characters (None = unlimited)
    pub max_length: Option<usize>,
    /// Show the numeric pad only
    pub use_only_numbers: bool,
    /// Mask for the bound field (phone numbers and similar)
    pub mask: Option<MaskTemplate>,
    /// Edit a value held by the host instead of a bound field
    pub treat_as_external_value: bool,
    /// Where the host mounts the keyboard
    pub mount: Mount,
    /// Offset the keyboard below the page form
    pub use_computed_top_offset: bool,
}

impl KeyboardConfig {
    /// Build the configuration from user settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let keyboard = &settings.keyboard;

        let mask = match keyboard.mask.as_deref() {
            Some(template) if !template.is_empty() => {
                let placeholder = single_char(&keyboard.mask_char)
                    .with_context(|| format!("invalid mask_char {:?}", keyboard.mask_char))?;
                Some(MaskTemplate::new(template, placeholder)?)
            }
            _ => None,
        };

        Ok(Self {
            initial_value: keyboard.initial_value.clone(),
            max_length: (keyboard.max_length > 0).then_some(keyboard.max_length),
            use_only_numbers: keyboard.use_only_numbers,
            mask,
            treat_as_external_value: keyboard.treat_as_external_value,
            mount: if settings.display.render_through_portal {
                Mount::Portal
            } else {
                Mount::Inline
            },
            use_computed_top_offset: settings.display.use_computed_top_offset,
        })
    }
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => anyhow::bail!("expected exactly one character"),
    }
}
