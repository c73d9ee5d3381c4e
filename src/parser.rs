//! Parser facade: lines in, [`ParsedDocument`] out
//!
//! ```text
//! LineSource → normalize → detect format → segment → summarize → ParsedDocument
//! ```
//!
//! Parsing never fails on document structure. The only error path is a
//! failing [`LineSource`], whose error is returned unchanged.

use chrono::Utc;
use log::{info, warn};

use crate::classifier::LineClassifier;
use crate::config::ParserConfig;
use crate::detector::{FormatDetector, ScriptFormat};
use crate::error::ScreenplayResult;
use crate::models::{ParsedDocument, TextLine};
use crate::patterns::PatternCatalog;
use crate::segmenter::{segment, strategy_for};
use crate::source::{LineSource, normalize_lines};
use crate::summary::{DocumentSummarizer, metadata};

/// Screenplay breakdown parser
///
/// Holds only compiled patterns and configuration, so one instance can be
/// shared between threads and reused for any number of documents.
#[derive(Debug)]
pub struct ScreenplayParser {
    config: ParserConfig,
    patterns: PatternCatalog,
    detector: FormatDetector,
}

impl ScreenplayParser {
    /// Create a parser with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in patterns fail to compile
    pub fn new() -> ScreenplayResult<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or its vocabulary
    /// produces an uncompilable pattern
    pub fn with_config(config: ParserConfig) -> ScreenplayResult<Self> {
        config.validate()?;
        let patterns = PatternCatalog::new(&config.vocabulary)?;
        let detector = FormatDetector::new(config.detection_window);
        Ok(Self {
            config,
            patterns,
            detector,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternCatalog {
        &self.patterns
    }

    /// Detect the header convention without parsing
    #[must_use]
    pub fn detect_format<S: AsRef<str>>(&self, lines: &[S]) -> ScriptFormat {
        self.detector.detect(&self.patterns, &normalize_lines(lines))
    }

    /// Parse raw document lines; blank lines and line endings are normalised here
    #[must_use]
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> ParsedDocument {
        self.parse_normalized(&normalize_lines(lines))
    }

    /// Parse a whole document held in one string
    #[must_use]
    pub fn parse_text(&self, text: &str) -> ParsedDocument {
        self.parse(&[text])
    }

    /// Read lines from `source` and parse them
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::Extraction`](crate::error::ScreenplayError::Extraction)
    /// if the source cannot be read
    pub fn parse_source(&self, source: &dyn LineSource) -> ScreenplayResult<ParsedDocument> {
        let lines = source.read_lines()?;
        Ok(self.parse(lines.as_slice()))
    }

    fn parse_normalized(&self, lines: &[TextLine]) -> ParsedDocument {
        let format = self.detector.detect(&self.patterns, lines);
        let classifier = LineClassifier::new(&self.patterns);
        let mut strategy = strategy_for(format);
        let scenes = segment(strategy.as_mut(), lines, &classifier);

        let summarizer = DocumentSummarizer::new(&self.config, &self.patterns);
        let metadata = metadata(&scenes);

        if scenes.is_empty() {
            warn!("No scenes recognised in {} lines", lines.len());
        }
        info!(
            "Parsed {} scenes, {} characters, {} dialogue lines ({} format)",
            metadata.total_scenes,
            metadata.unique_characters.len(),
            metadata.total_dialogues,
            format.name()
        );

        ParsedDocument {
            title: summarizer.title(lines),
            version: summarizer.version(lines),
            extracted_at: Utc::now(),
            format,
            scenes,
            metadata,
        }
    }
}
