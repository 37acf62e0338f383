pub mod mask;
pub mod text;

pub use mask::{MaskEdit, MaskError, MaskTemplate, MaskedValueEditor};
pub use text::{EditableValue, append_literal, trim_last};
