use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::UNDETERMINED_LOCATION;
use crate::detector::ScriptFormat;
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::vocabulary::{Setting, TimeOfDay, Vocabulary};

/// A trimmed, non-empty line of document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// 0-based position among the non-blank lines of the document
    pub index: usize,
    pub text: String,
}

impl TextLine {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Location {
    /// Marker as written in the header (`"INT."`, `"PLENER"`) or `"undetermined"`
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl Location {
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Location whose interior/exterior kind the source never states
    #[must_use]
    pub fn undetermined(name: impl Into<String>) -> Self {
        Self::new(UNDETERMINED_LOCATION, name)
    }

    /// Interpret the marker through the vocabulary
    #[must_use]
    pub fn setting(&self, vocabulary: &Vocabulary) -> Setting {
        vocabulary.setting(&self.kind)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct DialogueLine {
    pub character: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Prop {
    pub name: String,
    pub description: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Vehicle {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Extra {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
    pub description: String,
}

/// One scene of the screenplay with its per-scene resource lists
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_number: String,
    pub location: Location,
    pub time_of_day: TimeOfDay,
    /// Speaking or listed characters, first appearance order, no duplicates
    pub cast: Vec<String>,
    pub dialogue: Vec<DialogueLine>,
    pub props: Vec<Prop>,
    pub vehicles: Vec<Vehicle>,
    pub extras: Vec<Extra>,
    pub special_requirements: Vec<String>,
    /// Unclassified lines of the scene joined by single spaces
    pub description: String,
}

impl Scene {
    #[must_use]
    pub fn new(scene_number: impl Into<String>, location: Location, time_of_day: TimeOfDay) -> Self {
        Self {
            scene_number: scene_number.into(),
            location,
            time_of_day,
            cast: Vec::new(),
            dialogue: Vec::new(),
            props: Vec::new(),
            vehicles: Vec::new(),
            extras: Vec::new(),
            special_requirements: Vec::new(),
            description: String::new(),
        }
    }

    /// Add a character to the cast unless already present (case-sensitive)
    pub fn add_cast(&mut self, character: &str) {
        if !self.cast.iter().any(|c| c == character) {
            self.cast.push(character.to_string());
        }
    }

    /// Record a spoken line; the speaker joins the cast
    pub fn add_dialogue(&mut self, character: &str, text: impl Into<String>) {
        self.add_cast(character);
        self.dialogue.push(DialogueLine {
            character: character.to_string(),
            text: text.into(),
        });
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub total_scenes: usize,
    /// Union of every scene's cast, first appearance order
    pub unique_characters: Vec<String>,
    pub total_dialogues: usize,
}

/// Result of parsing one screenplay
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub title: String,
    pub version: String,
    pub extracted_at: DateTime<Utc>,
    /// Convention the scenes were segmented with
    pub format: ScriptFormat,
    pub scenes: Vec<Scene>,
    pub metadata: DocumentMetadata,
}

impl ParsedDocument {
    /// Compare everything except the extraction timestamp
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.title == other.title
            && self.version == other.version
            && self.format == other.format
            && self.scenes == other.scenes
            && self.metadata == other.metadata
    }

    #[must_use]
    pub fn scene(&self, scene_number: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.scene_number == scene_number)
    }

    /// Encode as CBOR for hand-off to downstream tools
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_cbor(&self) -> ScreenplayResult<Vec<u8>> {
        serde_cbor::to_vec(self).map_err(|e| ScreenplayError::serialization(e.to_string()))
    }

    /// Decode a document previously produced by [`Self::to_cbor`]
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid encoded document
    pub fn from_cbor(data: &[u8]) -> ScreenplayResult<Self> {
        serde_cbor::from_slice(data).map_err(|e| ScreenplayError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen() -> Scene {
        Scene::new("1", Location::new("INT.", "KITCHEN"), TimeOfDay::Day)
    }

    #[test]
    fn cast_is_deduplicated_case_sensitively() {
        let mut scene = kitchen();
        scene.add_cast("JOHN");
        scene.add_cast("JOHN");
        scene.add_cast("John");
        assert_eq!(scene.cast, vec!["JOHN", "John"]);
    }

    #[test]
    fn dialogue_adds_speaker_to_cast_once() {
        let mut scene = kitchen();
        scene.add_dialogue("ANNA", "Cześć.");
        scene.add_dialogue("ANNA", "Jak się masz?");
        assert_eq!(scene.cast, vec!["ANNA"]);
        assert_eq!(scene.dialogue.len(), 2);
        assert_eq!(scene.dialogue[1].text, "Jak się masz?");
    }

    #[test]
    fn location_setting_uses_vocabulary() {
        let vocab = Vocabulary::default();
        assert_eq!(kitchen().location.setting(&vocab), Setting::Interior);
        assert_eq!(
            Location::undetermined("KUCHNIA").setting(&vocab),
            Setting::Undetermined
        );
    }

    #[test]
    fn scene_serializes_with_wire_field_names() {
        let mut scene = kitchen();
        scene.vehicles.push(Vehicle {
            kind: "car".into(),
            description: "red".into(),
            quantity: 1,
        });
        let value = serde_cbor::value::to_value(&scene).unwrap();
        let serde_cbor::Value::Map(map) = value else {
            panic!("scene should serialize as a map");
        };
        let keys: Vec<String> = map
            .keys()
            .filter_map(|k| match k {
                serde_cbor::Value::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        assert!(keys.contains(&"sceneNumber".to_string()));
        assert!(keys.contains(&"timeOfDay".to_string()));
        assert!(keys.contains(&"specialRequirements".to_string()));
    }

    #[test]
    fn cbor_round_trip_preserves_document() {
        let mut scene = kitchen();
        scene.add_dialogue("JOHN", "Hello there.");
        let doc = ParsedDocument {
            title: "FINAL DRAFT".into(),
            version: "2.3".into(),
            extracted_at: Utc::now(),
            format: ScriptFormat::Standard,
            scenes: vec![scene],
            metadata: DocumentMetadata {
                total_scenes: 1,
                unique_characters: vec!["JOHN".into()],
                total_dialogues: 1,
            },
        };

        let bytes = doc.to_cbor().unwrap();
        let decoded = ParsedDocument::from_cbor(&bytes).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn from_cbor_rejects_garbage() {
        let err = ParsedDocument::from_cbor(b"not cbor at all").unwrap_err();
        assert!(matches!(err, ScreenplayError::Serialization(_)));
    }
}
