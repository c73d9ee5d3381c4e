//! Error types for the scriptbreak library
//!
//! Only the text-extraction collaborator can make a parse fail. Irregular
//! screenplay structure never becomes an error: unrecognised lines fold into
//! scene descriptions or are skipped.

use thiserror::Error;

/// Failures reported by a [`LineSource`](crate::source::LineSource)
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ExtractionError {
    /// The source document could not be read at all
    #[error("Source document unreadable: {0}")]
    Unreadable(String),

    /// The extracted bytes were not valid UTF-8 text
    #[error("Source document is not valid UTF-8")]
    InvalidEncoding,

    /// Any other extractor failure
    #[error("Text extraction failed: {0}")]
    Other(String),
}

impl ExtractionError {
    /// Create an unreadable-source error
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self::Unreadable(reason.into())
    }

    /// Create a generic extraction error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

// Foreign `LineSource` implementations may throw something we did not declare.
impl From<uniffi::UnexpectedUniFFICallbackError> for ExtractionError {
    fn from(err: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Other(err.reason)
    }
}

/// Result type for line extraction
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum ScreenplayError {
    /// The line source failed; propagated unchanged
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// A recognition rule could not be compiled from the vocabulary
    #[error("Invalid recognition pattern: {0}")]
    InvalidPattern(String),

    /// Parser configuration is unusable
    #[error("Invalid parser configuration: {0}")]
    Config(String),

    /// Encoding or decoding a parsed document failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ScreenplayError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(reason: impl Into<String>) -> Self {
        Self::InvalidPattern(reason.into())
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }
}

impl From<regex::Error> for ScreenplayError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}

/// Result type for library operations
pub type ScreenplayResult<T> = Result<T, ScreenplayError>;
