use thiserror::Error;

/// Errors produced by the formatting helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input could not be turned into a valid instant or duration
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Locale code outside the supported set
    #[error("unsupported locale: {0} (expected one of tkm, rus, eng)")]
    UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
