//! Keyboard widget - the state machine behind one on-screen keyboard
//!
//! `ScreenKeyboard` owns the modifier state and, for externally held values,
//! the value itself. A bound text field is read on every press and never
//! written directly: the new value and caret go back to the host as actions.

mod edit;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use screenkb_engine::MaskedValueEditor;
use tracing::{debug, trace};

use super::interpreter::{Interpretation, KeyAction, interpret};
use super::keycode::KeyToken;
use super::layout::Layout;
use super::state::ModifierState;
use crate::config::settings::Settings;
use crate::host::{HostDocument, HostEvent, HostSubscription, TextField};
use crate::view::{KeyboardView, computed_top_offset};

/// The keyboard widget
#[derive(Debug)]
pub struct ScreenKeyboard {
    /// Widget configuration
    config: KeyboardConfig,
    /// Casing, alphabet and symbols toggles
    modifiers: ModifierState,
    /// Mask editor, when the bound field is masked
    mask: Option<MaskedValueEditor>,
    /// Value held for the host (external value mode)
    value: String,
    /// Offset below the page form, once the host reported its geometry
    top_offset: Option<u32>,
}

impl ScreenKeyboard {
    /// Create a keyboard with default configuration
    pub fn new() -> Self {
        Self::with_config(KeyboardConfig::default())
    }

    /// Create with configuration
    pub fn with_config(config: KeyboardConfig) -> Self {
        let mask = config.mask.clone().map(MaskedValueEditor::new);
        Self {
            value: config.initial_value.clone(),
            config,
            modifiers: ModifierState::default(),
            mask,
            top_offset: None,
        }
    }

    /// Create from user settings, installing the log subscriber on first use.
    pub fn with_settings(settings: &Settings) -> anyhow::Result<Self> {
        crate::logging::init_logging();
        Ok(Self::with_config(KeyboardConfig::from_settings(settings)?))
    }

    /// Create from the user's config file, or the defaults when there is none
    pub fn from_user_config() -> anyhow::Result<Self> {
        Self::with_settings(&Settings::load()?)
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    /// The externally held value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sync the externally held value after the host changed it.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Restore default modifiers (lowercase, Latin, letters).
    pub fn reset(&mut self) {
        self.modifiers = ModifierState::default();
    }

    /// The layout currently shown
    pub fn layout(&self) -> Layout {
        Layout::for_state(&self.modifiers, self.config.use_only_numbers)
    }

    /// Render-ready description of the keyboard
    pub fn view(&self) -> KeyboardView {
        let top_offset = if self.config.use_computed_top_offset {
            self.top_offset
        } else {
            None
        };
        KeyboardView::build(
            &self.layout(),
            &self.modifiers,
            self.config.use_only_numbers,
            self.config.mount,
            top_offset,
        )
    }

    /// Whether the keyboard has something to edit
    fn has_target(&self, field: Option<&dyn TextField>) -> bool {
        self.config.treat_as_external_value || field.is_some()
    }

    /// Process a click on a key identified by its `data-key` string.
    pub fn process_data_key(&mut self, key: &str, field: Option<&dyn TextField>) -> KeyboardResult {
        match KeyToken::from_data_key(key) {
            Some(token) => self.process_key(token, field),
            None => {
                trace!("Ignoring unknown key {:?}", key);
                KeyboardResult::not_consumed()
            }
        }
    }

    /// Process a key press
    pub fn process_key(&mut self, token: KeyToken, field: Option<&dyn TextField>) -> KeyboardResult {
        if !self.has_target(field) {
            debug!("No bound field, ignoring {}", token);
            return KeyboardResult::not_consumed();
        }

        if !self.layout().contains(&token) {
            trace!("Key {} is not on the current layout", token);
            return KeyboardResult::not_consumed();
        }

        trace!("Processing key: {} with {:?}", token, self.modifiers);

        let Interpretation { action, next } = interpret(token, &self.modifiers);
        let modifiers_changed = next != self.modifiers;
        self.modifiers = next;

        let mut result = match &action {
            KeyAction::Submit => KeyboardResult::consumed().with_action(KeyboardAction::Submit),
            KeyAction::Toggle(toggle) => {
                debug!("{:?} toggled: {:?}", toggle, self.modifiers);
                KeyboardResult::consumed()
            }
            edit => self.apply_edit(edit, field),
        };

        if modifiers_changed {
            result = result.with_action(KeyboardAction::UpdateLayout);
        }
        result
    }

    /// Subscribe to the host document's events for the keyboard's lifetime.
    pub fn attach(&self, host: &mut impl HostDocument) -> HostSubscription {
        debug!("Attaching keyboard listeners");
        HostSubscription::attach(host)
    }

    /// Handle a host document event.
    ///
    /// Returns true when the host should prevent the event's default action.
    pub fn handle_host_event(&mut self, event: &HostEvent) -> bool {
        match *event {
            HostEvent::Load {
                viewport_width,
                form_height,
            } => {
                let offset = computed_top_offset(viewport_width, form_height);
                trace!("Top offset recomputed: {}", offset);
                self.top_offset = Some(offset);
                false
            }
            // Keep focus in the bound field while clicking keys
            HostEvent::MouseDown { inside_keyboard } => inside_keyboard,
        }
    }
}

impl Default for ScreenKeyboard {
    fn default() -> Self {
        Self::new()
    }
}
