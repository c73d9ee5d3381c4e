//! `UniFFI` bindings for the screenplay parser
//!
//! Exposes the parser to mobile and scripting hosts. Native Rust callers
//! should use [`ScreenplayParser`] directly.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ParserConfig;
use crate::error::ScreenplayError;
use crate::models::{ParsedDocument, Scene};
use crate::parser::ScreenplayParser;
use crate::source::{LineSource, TextLineSource};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiMetadata {
    pub total_scenes: u32,
    pub unique_characters: Vec<String>,
    pub total_dialogues: u32,
}

/// A parsed document with FFI-friendly scalar types
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiParsedDocument {
    pub title: String,
    pub version: String,
    /// RFC 3339 timestamp
    pub extracted_at: String,
    pub format: String,
    pub scenes: Vec<Scene>,
    pub metadata: FfiMetadata,
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl From<ParsedDocument> for FfiParsedDocument {
    fn from(doc: ParsedDocument) -> Self {
        Self {
            title: doc.title,
            version: doc.version,
            extracted_at: doc.extracted_at.to_rfc3339(),
            format: doc.format.name().to_string(),
            scenes: doc.scenes,
            metadata: FfiMetadata {
                total_scenes: saturating_u32(doc.metadata.total_scenes),
                unique_characters: doc.metadata.unique_characters,
                total_dialogues: saturating_u32(doc.metadata.total_dialogues),
            },
        }
    }
}

/// Error type for `ScreenplayBreakdown` operations
#[derive(Debug, Error, uniffi::Error)]
pub enum FfiError {
    #[error("Failed to read screenplay: {0}")]
    Extraction(String),
    #[error("Parser setup failed: {0}")]
    Setup(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<ScreenplayError> for FfiError {
    fn from(err: ScreenplayError) -> Self {
        match err {
            ScreenplayError::Extraction(e) => Self::Extraction(e.to_string()),
            ScreenplayError::Serialization(reason) => Self::Serialization(reason),
            other @ (ScreenplayError::InvalidPattern(_) | ScreenplayError::Config(_)) => {
                Self::Setup(other.to_string())
            }
        }
    }
}

#[derive(Debug, uniffi::Object)]
pub struct ScreenplayBreakdown {
    parser: ScreenplayParser,
}

#[uniffi::export]
impl ScreenplayBreakdown {
    /// Create a parser with the default vocabulary and windows
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in patterns fail to compile
    #[uniffi::constructor]
    pub fn new() -> Result<Self, FfiError> {
        Ok(Self {
            parser: ScreenplayParser::new()?,
        })
    }

    /// Create a parser from a TOML configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid
    #[uniffi::constructor]
    pub fn with_config_toml(config_toml: &str) -> Result<Self, FfiError> {
        let config = ParserConfig::from_toml_str(config_toml)?;
        Ok(Self {
            parser: ScreenplayParser::with_config(config)?,
        })
    }

    /// Parse already extracted screenplay text
    pub fn parse_text(&self, text: &str) -> FfiParsedDocument {
        self.parser.parse_text(text).into()
    }

    /// Parse UTF-8 encoded screenplay text
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is not valid UTF-8
    pub fn parse_bytes(&self, data: Vec<u8>) -> Result<FfiParsedDocument, FfiError> {
        let source = TextLineSource::from_bytes(data);
        Ok(self.parser.parse_source(&source)?.into())
    }

    /// Parse lines provided by a host-side extractor (e.g. a PDF reader)
    ///
    /// # Errors
    ///
    /// Returns the extractor's failure
    pub fn parse_source(&self, source: Arc<dyn LineSource>) -> Result<FfiParsedDocument, FfiError> {
        Ok(self.parser.parse_source(source.as_ref())?.into())
    }

    /// Parse text and return the document CBOR-encoded
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn parse_to_cbor(&self, text: &str) -> Result<Vec<u8>, FfiError> {
        Ok(self.parser.parse_text(text).to_cbor()?)
    }

    /// Name of the detected header convention
    pub fn detect_format(&self, text: &str) -> String {
        self.parser.detect_format(&[text]).name().to_string()
    }
}
