//! Masked (template) value editing
//!
//! A mask is a fixed-length literal string such as `+7 (___) ___-__-__` in which
//! the placeholder character marks the editable slots. Editing fills and clears
//! slots; it never changes the length of the templated string.

mod editor;
pub mod error;
mod template;

pub use editor::{MaskEdit, MaskedValueEditor};
pub use error::MaskError;
pub use template::MaskTemplate;
