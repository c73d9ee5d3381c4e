//! Document-level metadata: title, version and aggregate counts

use crate::config::ParserConfig;
use crate::models::{DocumentMetadata, Scene, TextLine};
use crate::patterns::PatternCatalog;

#[derive(Debug, Clone, Copy)]
pub struct DocumentSummarizer<'a> {
    config: &'a ParserConfig,
    patterns: &'a PatternCatalog,
}

impl<'a> DocumentSummarizer<'a> {
    #[must_use]
    pub const fn new(config: &'a ParserConfig, patterns: &'a PatternCatalog) -> Self {
        Self { config, patterns }
    }

    /// First already-uppercase line of the title window longer than the minimum
    #[must_use]
    pub fn title(&self, lines: &[TextLine]) -> String {
        lines
            .iter()
            .take(self.config.title_window)
            .map(TextLine::as_str)
            .find(|line| {
                line.to_uppercase() == *line && line.chars().count() > self.config.min_title_len
            })
            .map_or_else(
                || self.config.untitled_placeholder.clone(),
                str::to_string,
            )
    }

    /// First version marker within the version window
    #[must_use]
    pub fn version(&self, lines: &[TextLine]) -> String {
        lines
            .iter()
            .take(self.config.version_window)
            .find_map(|line| self.patterns.version(line.as_str()))
            .map_or_else(|| self.config.default_version.clone(), str::to_string)
    }
}

/// Fold scene counts, cast union and dialogue totals
#[must_use]
pub fn metadata(scenes: &[Scene]) -> DocumentMetadata {
    let mut unique_characters: Vec<String> = Vec::new();
    for name in scenes.iter().flat_map(|scene| &scene.cast) {
        if !unique_characters.contains(name) {
            unique_characters.push(name.clone());
        }
    }

    DocumentMetadata {
        total_scenes: scenes.len(),
        unique_characters,
        total_dialogues: scenes.iter().map(|scene| scene.dialogue.len()).sum(),
    }
}
