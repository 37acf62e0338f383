//! Host collaborators
//!
//! The keyboard never owns the page: it reads a bound text field, reports
//! edits through `KeyboardHost`, and listens to document events through an
//! explicit subscription.

use tracing::debug;

/// A text field the keyboard edits
pub trait TextField {
    /// Current text
    fn text(&self) -> &str;
    /// Caret offset in characters, if the field reports one
    fn caret(&self) -> Option<usize>;
}

/// Receiver of keyboard actions
pub trait KeyboardHost {
    /// Called after every text-mutating press
    fn on_change(&mut self, value: &str);

    /// Called on the enter key
    fn on_submit(&mut self) {}

    /// Move the bound field's caret
    fn set_caret(&mut self, _caret: usize) {}

    /// Repaint the keyboard
    fn on_layout_changed(&mut self) {}
}

/// A plain in-memory field: text, caret and a submit counter.
///
/// Applying a keyboard result to it behaves like a host that writes the
/// reported value back into its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub text: String,
    pub caret: Option<usize>,
    pub submits: usize,
}

impl FieldSnapshot {
    pub fn new(text: impl Into<String>, caret: Option<usize>) -> Self {
        Self {
            text: text.into(),
            caret,
            submits: 0,
        }
    }

    /// Empty field with the caret at the start
    pub fn empty() -> Self {
        Self::new("", Some(0))
    }
}

impl TextField for FieldSnapshot {
    fn text(&self) -> &str {
        &self.text
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }
}

impl KeyboardHost for FieldSnapshot {
    fn on_change(&mut self, value: &str) {
        self.text = value.to_string();
    }

    fn on_submit(&mut self) {
        self.submits += 1;
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = Some(caret);
    }
}

/// Document events the keyboard listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEventKind {
    /// Window finished loading (page geometry is known)
    Load,
    /// Mouse button pressed anywhere in the document
    MouseDown,
}

/// A document event delivered to the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Load { viewport_width: u32, form_height: u32 },
    MouseDown { inside_keyboard: bool },
}

/// Handle of a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The document the keyboard lives in
pub trait HostDocument {
    fn add_listener(&mut self, kind: HostEventKind) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);
}

/// Listeners registered for one keyboard, removed by `detach`.
#[derive(Debug, Default)]
pub struct HostSubscription {
    listeners: Vec<ListenerId>,
}

impl HostSubscription {
    /// Register the load and mousedown listeners.
    pub fn attach(host: &mut impl HostDocument) -> Self {
        let listeners = vec![
            host.add_listener(HostEventKind::MouseDown),
            host.add_listener(HostEventKind::Load),
        ];
        Self { listeners }
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Remove every listener. Detaching twice does nothing.
    pub fn detach(&mut self, host: &mut impl HostDocument) {
        if !self.listeners.is_empty() {
            debug!("Detaching {} keyboard listeners", self.listeners.len());
        }
        for id in self.listeners.drain(..) {
            host.remove_listener(id);
        }
    }
}
