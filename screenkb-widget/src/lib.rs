//! screenkb-widget: the state machine behind an on-screen keyboard
//!
//! This crate interprets clicks on synthetic keys (shift, caps lock, two
//! alphabets, symbols, numeric pad) and edits a bound text field, optionally
//! through an input mask, or a value held by the host.
//! It uses screenkb-engine for the text editing itself.

pub mod config;
pub mod core;
pub mod host;
pub mod logging;
pub mod view;

pub use core::interpreter::{Interpretation, KeyAction, Toggle, interpret};
pub use core::keyboard::{KeyboardAction, KeyboardConfig, KeyboardResult, ScreenKeyboard};
pub use core::keycode::KeyToken;
pub use core::layout::{Alphabet, Layout};
pub use core::state::ModifierState;
pub use host::{FieldSnapshot, HostDocument, HostEvent, HostSubscription, KeyboardHost, TextField};
pub use view::{KeyCap, KeyboardView, Mount};
