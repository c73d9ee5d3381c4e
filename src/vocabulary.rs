//! Surface vocabulary for screenplay markers
//!
//! Every fixed word the recognition rules accept (time-of-day tags, INT/EXT
//! markers, annotation labels) lives in these tables. The pattern catalog is
//! compiled from them, so a new language variant is a table edit.

use serde::{Deserialize, Serialize};

use crate::error::{ScreenplayError, ScreenplayResult};

/// Canonical time-of-day tag of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOfDay {
    Day,
    Night,
    Dawn,
    Dusk,
    Sunrise,
    Sunset,
}

impl TimeOfDay {
    /// Canonical uppercase label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Night => "NIGHT",
            Self::Dawn => "DAWN",
            Self::Dusk => "DUSK",
            Self::Sunrise => "SUNRISE",
            Self::Sunset => "SUNSET",
        }
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Interior/exterior classification of a scene location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Setting {
    Interior,
    Exterior,
    Mixed,
    Undetermined,
}

/// Resource annotation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Props,
    Vehicles,
    Extras,
    Special,
}

impl AnnotationKind {
    pub const ALL: [Self; 4] = [Self::Props, Self::Vehicles, Self::Extras, Self::Special];
}

/// A surface word and the canonical tag it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term<T> {
    pub word: String,
    pub tag: T,
}

impl<T> Term<T> {
    pub fn new(word: impl Into<String>, tag: T) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// Mapping tables from surface tokens to canonical tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Optional words preceding the scene number ("SCENA 12.")
    pub scene_prefixes: Vec<String>,
    /// INT/EXT-style markers used by the dotted-number header convention
    pub abbreviated_settings: Vec<Term<Setting>>,
    /// Spelled-out markers used by the bare-number header convention
    pub spelled_settings: Vec<Term<Setting>>,
    pub times_of_day: Vec<Term<TimeOfDay>>,
    pub annotation_labels: Vec<Term<AnnotationKind>>,
    /// Words introducing a version number on the title page
    pub version_markers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            scene_prefixes: vec!["SCENA".to_string(), "SCENE".to_string()],
            abbreviated_settings: vec![
                Term::new("INT", Setting::Interior),
                Term::new("EXT", Setting::Exterior),
                Term::new("INT/EXT", Setting::Mixed),
                Term::new("EXT/INT", Setting::Mixed),
                Term::new("I/E", Setting::Mixed),
            ],
            spelled_settings: vec![
                Term::new("WNĘTRZE", Setting::Interior),
                Term::new("PLENER", Setting::Exterior),
                Term::new("WNĘTRZE/PLENER", Setting::Mixed),
                Term::new("PLENER/WNĘTRZE", Setting::Mixed),
                Term::new("INTERIOR", Setting::Interior),
                Term::new("EXTERIOR", Setting::Exterior),
            ],
            times_of_day: vec![
                Term::new("DZIEŃ", TimeOfDay::Day),
                Term::new("NOC", TimeOfDay::Night),
                Term::new("ŚWIT", TimeOfDay::Dawn),
                Term::new("ZMIERZCH", TimeOfDay::Dusk),
                Term::new("WSCHÓD", TimeOfDay::Sunrise),
                Term::new("ZACHÓD", TimeOfDay::Sunset),
                Term::new("DAY", TimeOfDay::Day),
                Term::new("NIGHT", TimeOfDay::Night),
                Term::new("DAWN", TimeOfDay::Dawn),
                Term::new("DUSK", TimeOfDay::Dusk),
                Term::new("SUNRISE", TimeOfDay::Sunrise),
                Term::new("SUNSET", TimeOfDay::Sunset),
            ],
            annotation_labels: vec![
                Term::new("REKWIZYT", AnnotationKind::Props),
                Term::new("REKWIZYTY", AnnotationKind::Props),
                Term::new("PROP", AnnotationKind::Props),
                Term::new("PROPS", AnnotationKind::Props),
                Term::new("POJAZD", AnnotationKind::Vehicles),
                Term::new("POJAZDY", AnnotationKind::Vehicles),
                Term::new("VEHICLE", AnnotationKind::Vehicles),
                Term::new("VEHICLES", AnnotationKind::Vehicles),
                Term::new("STATYST", AnnotationKind::Extras),
                Term::new("STATYSTA", AnnotationKind::Extras),
                Term::new("STATYSTCI", AnnotationKind::Extras),
                Term::new("STATYŚCI", AnnotationKind::Extras),
                Term::new("STATYSTÓW", AnnotationKind::Extras),
                Term::new("EXTRA", AnnotationKind::Extras),
                Term::new("EXTRAS", AnnotationKind::Extras),
                Term::new("UWAGA", AnnotationKind::Special),
                Term::new("UWAGI", AnnotationKind::Special),
                Term::new("WYMAGANIA SPECJALNE", AnnotationKind::Special),
                Term::new("NOTE", AnnotationKind::Special),
                Term::new("NOTES", AnnotationKind::Special),
                Term::new("SPECIAL", AnnotationKind::Special),
                Term::new("SPECIAL REQUIREMENT", AnnotationKind::Special),
                Term::new("SPECIAL REQUIREMENTS", AnnotationKind::Special),
            ],
            version_markers: vec![
                "wersja".to_string(),
                "version".to_string(),
                "v".to_string(),
            ],
        }
    }
}

impl Vocabulary {
    /// Check that no table the catalog compiles from is empty
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::Config`] naming the first empty table
    pub fn validate(&self) -> ScreenplayResult<()> {
        let tables = [
            ("abbreviated_settings", self.abbreviated_settings.is_empty()),
            ("spelled_settings", self.spelled_settings.is_empty()),
            ("times_of_day", self.times_of_day.is_empty()),
            ("version_markers", self.version_markers.is_empty()),
        ];
        if let Some((name, _)) = tables.iter().find(|(_, empty)| *empty) {
            return Err(ScreenplayError::config(format!(
                "vocabulary table `{name}` is empty"
            )));
        }
        for kind in AnnotationKind::ALL {
            if !self.annotation_labels.iter().any(|t| t.tag == kind) {
                return Err(ScreenplayError::config(format!(
                    "no annotation label for {kind:?}"
                )));
            }
        }
        Ok(())
    }

    /// Normalize a localized time-of-day word
    #[must_use]
    pub fn time_of_day(&self, word: &str) -> Option<TimeOfDay> {
        lookup(&self.times_of_day, word)
    }

    /// Classify a location marker such as `"INT."` or `"PLENER"`
    #[must_use]
    pub fn setting(&self, marker: &str) -> Setting {
        let bare = marker
            .trim_end_matches(|c: char| matches!(c, '.' | '-' | '|') || c.is_whitespace());
        lookup(&self.abbreviated_settings, bare)
            .or_else(|| lookup(&self.spelled_settings, bare))
            .unwrap_or(Setting::Undetermined)
    }

    /// Annotation category keyed by a label word, if the word is a label
    #[must_use]
    pub fn annotation_kind(&self, label: &str) -> Option<AnnotationKind> {
        lookup(&self.annotation_labels, label)
    }

    /// Words of one annotation category
    pub fn labels_for(&self, kind: AnnotationKind) -> impl Iterator<Item = &str> {
        self.annotation_labels
            .iter()
            .filter(move |t| t.tag == kind)
            .map(|t| t.word.as_str())
    }
}

fn lookup<T: Copy>(table: &[Term<T>], word: &str) -> Option<T> {
    let wanted = word.trim().to_uppercase();
    table
        .iter()
        .find(|t| t.word.to_uppercase() == wanted)
        .map(|t| t.tag)
}

/// Build a non-capturing regex alternation, longest word first so that
/// `INT/EXT` wins over `INT`
#[must_use]
pub fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words.dedup();
    let escaped: Vec<String> = words.into_iter().map(regex::escape).collect();
    format!("(?:{})", escaped.join("|"))
}
