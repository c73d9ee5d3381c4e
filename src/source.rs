//! Line sources: the seam to whatever extracts text from the screenplay file
//!
//! The parser never touches files or containers itself. A [`LineSource`]
//! hands it the document as ordered text lines, or fails with an
//! [`ExtractionError`] that the parser propagates unchanged.

use std::fmt::Debug;

use crate::error::{ExtractionError, ExtractionResult};
use crate::models::TextLine;

#[uniffi::export(with_foreign)]
pub trait LineSource: Send + Sync + Debug {
    /// Read the document as ordered lines of text
    ///
    /// # Errors
    ///
    /// Returns an error if the source document cannot be read or decoded
    fn read_lines(&self) -> Result<Vec<String>, ExtractionError>;
}

/// Line source over already extracted UTF-8 text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLineSource {
    data: Vec<u8>,
}

impl TextLineSource {
    #[must_use]
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl LineSource for TextLineSource {
    fn read_lines(&self) -> ExtractionResult<Vec<String>> {
        let text =
            core::str::from_utf8(&self.data).map_err(|_| ExtractionError::InvalidEncoding)?;
        Ok(split_text(text))
    }
}

/// Split text into physical lines, accepting `\r\n`, `\r` and `\n`
#[must_use]
pub fn split_text(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Trim every line, drop blank ones and number the survivors
#[must_use]
pub fn normalize_lines<S: AsRef<str>>(raw: &[S]) -> Vec<TextLine> {
    raw.iter()
        .flat_map(|line| split_text(line.as_ref()))
        .filter_map(|line| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .enumerate()
        .map(|(index, text)| TextLine { index, text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BrokenSource;

    impl LineSource for BrokenSource {
        fn read_lines(&self) -> ExtractionResult<Vec<String>> {
            Err(ExtractionError::unreadable("truncated container"))
        }
    }

    #[test]
    fn normalize_trims_and_drops_blank_lines() {
        let lines = normalize_lines(&["  1. INT. KITCHEN - DAY ", "", "   ", "\tJOHN: Hi."]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "1. INT. KITCHEN - DAY");
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].text, "JOHN: Hi.");
    }

    #[test]
    fn normalize_splits_embedded_line_breaks() {
        let lines = normalize_lines(&["KITCHEN - DAY\r\n1\rJOHN"]);
        let texts: Vec<&str> = lines.iter().map(TextLine::as_str).collect();
        assert_eq!(texts, vec!["KITCHEN - DAY", "1", "JOHN"]);
    }

    #[test]
    fn text_source_reads_crlf_text() {
        let source = TextLineSource::from_text("TITLE\r\n\r\nline two\n");
        let lines = source.read_lines().unwrap();
        assert_eq!(lines, vec!["TITLE", "", "line two", ""]);
    }

    #[test]
    fn text_source_rejects_invalid_utf8() {
        let source = TextLineSource::from_bytes(vec![0xff, 0xfe, 0x41]);
        assert_eq!(source.read_lines(), Err(ExtractionError::InvalidEncoding));
    }

    #[test]
    fn failing_source_reports_its_error() {
        let err = BrokenSource.read_lines().unwrap_err();
        assert!(err.to_string().contains("truncated container"));
    }
}
