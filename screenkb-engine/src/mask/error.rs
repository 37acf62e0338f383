//! Error types for mask templates

/// Errors that can occur when building a mask template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("mask template is empty")]
    EmptyTemplate,

    #[error("mask template '{template}' has no placeholder '{placeholder}'")]
    MissingPlaceholder { template: String, placeholder: char },

    #[error("placeholder '{0}' is a digit and cannot be told apart from input")]
    DigitPlaceholder(char),
}

pub type Result<T> = std::result::Result<T, MaskError>;
