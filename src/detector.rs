//! Format detection: decides which scene-header convention a document uses

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::models::TextLine;
use crate::patterns::PatternCatalog;

/// Scene segmentation convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptFormat {
    /// Numbered one-line headers: `12. INT. KITCHEN - DAY`
    Standard,
    /// `KITCHEN - DAY` followed by the scene number on its own line
    LocationTimeNumber,
}

impl ScriptFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LocationTimeNumber => "location-time-number",
        }
    }
}

/// Header counts collected over the detection sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatVotes {
    pub standard: usize,
    pub location_time: usize,
}

impl FormatVotes {
    /// Plurality vote; ties and empty samples fall back to [`ScriptFormat::Standard`]
    #[must_use]
    pub const fn decide(&self) -> ScriptFormat {
        if self.standard > self.location_time {
            ScriptFormat::Standard
        } else if self.location_time > 0 {
            ScriptFormat::LocationTimeNumber
        } else {
            ScriptFormat::Standard
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormatDetector {
    window: usize,
}

impl FormatDetector {
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }

    /// Count header matches of both conventions in the leading sample
    #[must_use]
    pub fn vote(&self, patterns: &PatternCatalog, lines: &[TextLine]) -> FormatVotes {
        let sample = &lines[..lines.len().min(self.window)];
        let mut votes = FormatVotes::default();

        for (i, line) in sample.iter().enumerate() {
            if patterns.is_standard_header(line.as_str()) {
                votes.standard += 1;
            }

            if patterns.is_location_time(line.as_str())
                && sample
                    .get(i + 1)
                    .is_some_and(|next| patterns.scene_number(next.as_str()).is_some())
            {
                votes.location_time += 1;
            }
        }

        votes
    }

    #[must_use]
    pub fn detect(&self, patterns: &PatternCatalog, lines: &[TextLine]) -> ScriptFormat {
        let votes = self.vote(patterns, lines);
        let format = votes.decide();

        if votes.standard == 0 && votes.location_time == 0 {
            warn!(
                "No scene header found in the first {} lines, assuming {} format",
                self.window,
                format.name()
            );
        } else {
            debug!(
                "Detected {} format (standard={}, location-time={})",
                format.name(),
                votes.standard,
                votes.location_time
            );
        }

        format
    }
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::normalize_lines;
    use crate::vocabulary::Vocabulary;

    fn detect(raw: &[&str]) -> (ScriptFormat, FormatVotes) {
        let patterns = PatternCatalog::new(&Vocabulary::default()).unwrap();
        let lines = normalize_lines(raw);
        let detector = FormatDetector::default();
        (
            detector.detect(&patterns, &lines),
            detector.vote(&patterns, &lines),
        )
    }

    #[test]
    fn standard_majority_selects_standard() {
        let (format, votes) = detect(&[
            "1. INT. KITCHEN - DAY",
            "JOHN: Hi.",
            "2. EXT. STREET - NIGHT",
            "GARDEN - DAY",
            "3",
        ]);
        assert_eq!(votes, FormatVotes { standard: 2, location_time: 1 });
        assert_eq!(format, ScriptFormat::Standard);
    }

    #[test]
    fn location_time_pairs_select_location_time_number() {
        let (format, votes) = detect(&["KITCHEN - DAY", "1", "JOHN", "Hello there."]);
        assert_eq!(votes, FormatVotes { standard: 0, location_time: 1 });
        assert_eq!(format, ScriptFormat::LocationTimeNumber);
    }

    #[test]
    fn location_time_without_number_does_not_vote() {
        let (format, votes) = detect(&["KITCHEN - DAY", "JOHN", "1"]);
        assert_eq!(votes.location_time, 0);
        assert_eq!(format, ScriptFormat::Standard);
    }

    #[test]
    fn no_headers_defaults_to_standard() {
        let (format, votes) = detect(&["Just some prose.", "And more prose."]);
        assert_eq!(votes, FormatVotes::default());
        assert_eq!(format, ScriptFormat::Standard);
    }

    #[test]
    fn tie_goes_to_location_time_number() {
        let votes = FormatVotes { standard: 1, location_time: 1 };
        assert_eq!(votes.decide(), ScriptFormat::LocationTimeNumber);
    }

    #[test]
    fn only_the_sample_window_votes() {
        let patterns = PatternCatalog::new(&Vocabulary::default()).unwrap();
        let mut raw = vec!["filler line"; 5];
        raw.extend(["1. INT. KITCHEN - DAY", "2. INT. KITCHEN - NIGHT"]);
        let lines = normalize_lines(&raw);

        let votes = FormatDetector::new(5).vote(&patterns, &lines);
        assert_eq!(votes.standard, 0);
        let votes = FormatDetector::new(6).vote(&patterns, &lines);
        assert_eq!(votes.standard, 1);
    }
}
