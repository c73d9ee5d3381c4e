//! Pattern catalog: the compiled recognition rules for every line category
//!
//! Header and annotation rules are case-insensitive and built from the
//! [`Vocabulary`] tables. Character cues and dialogue are recognised by their
//! uppercase speaker name, so those two rules are case-sensitive by nature.

use regex::Regex;

use crate::error::ScreenplayResult;
use crate::models::Location;
use crate::vocabulary::{AnnotationKind, TimeOfDay, Vocabulary, alternation};

/// Scene number, location and time captured from a one-line scene header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHeading {
    pub scene_number: String,
    pub location: Location,
    pub time_of_day: TimeOfDay,
}

/// A standalone `LOCATION - TIME` line awaiting its scene number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTime {
    pub name: String,
    pub time_of_day: TimeOfDay,
}

#[derive(Debug)]
pub struct PatternCatalog {
    vocabulary: Vocabulary,
    /// `12. INT. KITCHEN - DAY` and `12 WNĘTRZE. KUCHNIA - DZIEŃ`
    standard_headers: [Regex; 2],
    location_time: Regex,
    scene_number: Regex,
    character: Regex,
    dialogue: Regex,
    annotations: Vec<(AnnotationKind, Regex)>,
    extra_item: Regex,
    version: Regex,
}

impl PatternCatalog {
    /// Compile the catalog from vocabulary tables
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to compile
    pub fn new(vocabulary: &Vocabulary) -> ScreenplayResult<Self> {
        let time = alternation(vocabulary.times_of_day.iter().map(|t| t.word.as_str()));
        let abbreviated =
            alternation(vocabulary.abbreviated_settings.iter().map(|t| t.word.as_str()));
        let spelled = alternation(vocabulary.spelled_settings.iter().map(|t| t.word.as_str()));
        let prefix = if vocabulary.scene_prefixes.is_empty() {
            String::new()
        } else {
            let words = alternation(vocabulary.scene_prefixes.iter().map(String::as_str));
            format!(r"(?:{words}\s+)?")
        };

        let header_dotted = Regex::new(&format!(
            r"(?i)^{prefix}(\d+[A-Z]?)\.\s*({abbreviated}[.|\s-]+)([^-\n]+?)[-|\s]+({time})[.\s]*$"
        ))?;
        let header_spelled = Regex::new(&format!(
            r"(?i)^(\d+[A-Z]?)[.\s]+({spelled}[.|\s-]+)([^-\n]+?)[-|\s]+({time})[.\s]*$"
        ))?;
        let location_time = Regex::new(&format!(r"(?i)^([\p{{L}}.\s]+?)\s*-\s*({time})\.*$"))?;

        let mut annotations = Vec::with_capacity(AnnotationKind::ALL.len());
        for kind in AnnotationKind::ALL {
            let labels = alternation(vocabulary.labels_for(kind));
            annotations.push((kind, Regex::new(&format!(r"(?i)^({labels})\s*:\s*(.+)$"))?));
        }

        let markers = alternation(vocabulary.version_markers.iter().map(String::as_str));

        Ok(Self {
            vocabulary: vocabulary.clone(),
            standard_headers: [header_dotted, header_spelled],
            location_time,
            scene_number: Regex::new(r"(?i)^(\d+[A-Z]?)$")?,
            character: Regex::new(r"^(\p{Lu}[\p{Lu}\s\-]+)(?:\(([^)]+)\))?:?\s*$")?,
            dialogue: Regex::new(r"^(\p{Lu}[\p{Lu}\s\-]+):\s*(.+)$")?,
            annotations,
            extra_item: Regex::new(r"^(\d+)?\s*(.+)$")?,
            version: Regex::new(&format!(r"(?i)\b{markers}\.?\s*[:.]?\s*(\d+(?:\.\d+)*)"))?,
        })
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Match either standard header rule, dotted form first
    #[must_use]
    pub fn standard_header(&self, line: &str) -> Option<SceneHeading> {
        self.standard_headers.iter().find_map(|re| {
            let caps = re.captures(line)?;
            let time_of_day = self.vocabulary.time_of_day(&caps[4])?;
            Some(SceneHeading {
                scene_number: caps[1].to_string(),
                location: Location::new(caps[2].trim(), caps[3].trim()),
                time_of_day,
            })
        })
    }

    #[must_use]
    pub fn is_standard_header(&self, line: &str) -> bool {
        self.standard_headers.iter().any(|re| re.is_match(line))
    }

    #[must_use]
    pub fn location_time(&self, line: &str) -> Option<LocationTime> {
        let caps = self.location_time.captures(line)?;
        Some(LocationTime {
            name: caps[1].trim().to_string(),
            time_of_day: self.vocabulary.time_of_day(&caps[2])?,
        })
    }

    #[must_use]
    pub fn is_location_time(&self, line: &str) -> bool {
        self.location_time.is_match(line)
    }

    /// A bare scene number such as `12` or `12A` alone on its line
    #[must_use]
    pub fn scene_number<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.scene_number
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Speaker name of a character cue (`JOHN`, `JOHN (V.O.)`, `JOHN:`)
    #[must_use]
    pub fn character(&self, line: &str) -> Option<String> {
        self.character
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    }

    #[must_use]
    pub fn is_character(&self, line: &str) -> bool {
        self.character.is_match(line)
    }

    /// Speaker and text of a `NAME: text` line
    #[must_use]
    pub fn dialogue(&self, line: &str) -> Option<(String, String)> {
        let caps = self.dialogue.captures(line)?;
        Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
    }

    /// Category and raw payload of a `LABEL: a, b, c` line
    #[must_use]
    pub fn annotation<'a>(&self, line: &'a str) -> Option<(AnnotationKind, &'a str)> {
        self.annotations.iter().find_map(|(kind, re)| {
            re.captures(line)
                .and_then(|caps| caps.get(2))
                .map(|m| (*kind, m.as_str()))
        })
    }

    /// Leading quantity and remaining text of one extras item
    #[must_use]
    pub fn extra_item<'a>(&self, segment: &'a str) -> Option<(Option<&'a str>, &'a str)> {
        let caps = self.extra_item.captures(segment)?;
        let quantity = caps.get(1).map(|m| m.as_str());
        Some((quantity, caps.get(2)?.as_str()))
    }

    #[must_use]
    pub fn version<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.version
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
