//! Core keyboard functionality
//!
//! This module contains the key interpretation state machine, the layouts and
//! the keyboard widget that ties them to the edited value.

pub mod interpreter;
pub mod keyboard;
pub mod keycode;
pub mod layout;
pub mod state;
