//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::error::{ScreenplayError, ScreenplayResult};
use crate::vocabulary::Vocabulary;

/// Sentinel location type for conventions that never state INT/EXT
pub const UNDETERMINED_LOCATION: &str = "undetermined";

/// Tunable windows and fallbacks used while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Number of leading lines the format detector votes over
    pub detection_window: usize,
    /// Number of leading lines searched for an all-caps title
    pub title_window: usize,
    /// A title candidate must be strictly longer than this many characters
    pub min_title_len: usize,
    /// Number of leading lines searched for a version marker
    pub version_window: usize,
    pub untitled_placeholder: String,
    pub default_version: String,
    pub vocabulary: Vocabulary,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detection_window: 100,
            title_window: 10,
            min_title_len: 3,
            version_window: 20,
            untitled_placeholder: "Untitled Script".to_string(),
            default_version: "1.0".to_string(),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl ParserConfig {
    /// Load a configuration from TOML; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the result fails validation
    pub fn from_toml_str(input: &str) -> ScreenplayResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| ScreenplayError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject windows of zero lines and empty vocabulary tables
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::Config`] naming the offending field
    pub fn validate(&self) -> ScreenplayResult<()> {
        for (name, value) in [
            ("detection_window", self.detection_window),
            ("title_window", self.title_window),
            ("version_window", self.version_window),
        ] {
            if value == 0 {
                return Err(ScreenplayError::config(format!("{name} must be positive")));
            }
        }
        self.vocabulary.validate()
    }
}
