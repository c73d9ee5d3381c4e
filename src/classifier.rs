//! Line classification shared by both segmentation strategies
//!
//! Header recognition is convention specific and lives in the strategies.
//! Everything after that runs through [`BODY_RULES`] in order; the first rule
//! that matches wins, and a line no rule claims becomes scene description.

use log::trace;

use crate::models::{DialogueLine, Extra, Prop, Vehicle};
use crate::patterns::PatternCatalog;
use crate::vocabulary::AnnotationKind;

/// Category of a line inside an open scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A bare cue naming a character
    Character(String),
    Dialogue(DialogueLine),
    Props(Vec<Prop>),
    Vehicles(Vec<Vehicle>),
    Extras(Vec<Extra>),
    Special(Vec<String>),
    Description,
}

/// One entry of the ordered classification list
pub struct BodyRule {
    pub name: &'static str,
    pub apply: fn(&PatternCatalog, &str) -> Option<LineKind>,
}

/// Priority order matters: a `NAME: text` line whose name is an annotation
/// label is left to the annotation rule.
pub const BODY_RULES: &[BodyRule] = &[
    BodyRule {
        name: "character",
        apply: character_rule,
    },
    BodyRule {
        name: "dialogue",
        apply: dialogue_rule,
    },
    BodyRule {
        name: "annotation",
        apply: annotation_rule,
    },
];

fn character_rule(patterns: &PatternCatalog, line: &str) -> Option<LineKind> {
    if line.contains(':') {
        return None;
    }
    patterns.character(line).map(LineKind::Character)
}

fn dialogue_rule(patterns: &PatternCatalog, line: &str) -> Option<LineKind> {
    let (character, text) = patterns.dialogue(line)?;
    if patterns.vocabulary().annotation_kind(&character).is_some() {
        return None;
    }
    Some(LineKind::Dialogue(DialogueLine { character, text }))
}

fn annotation_rule(patterns: &PatternCatalog, line: &str) -> Option<LineKind> {
    let (kind, payload) = patterns.annotation(line)?;
    Some(match kind {
        AnnotationKind::Props => LineKind::Props(
            split_items(payload)
                .map(|(name, description)| Prop {
                    name,
                    description,
                    quantity: 1,
                })
                .collect(),
        ),
        AnnotationKind::Vehicles => LineKind::Vehicles(
            split_items(payload)
                .map(|(kind, description)| Vehicle {
                    kind,
                    description,
                    quantity: 1,
                })
                .collect(),
        ),
        AnnotationKind::Extras => LineKind::Extras(parse_extras(patterns, payload)),
        AnnotationKind::Special => {
            LineKind::Special(segments(payload).map(str::to_string).collect())
        }
    })
}

/// Comma separated, trimmed, non-empty payload segments
fn segments(payload: &str) -> impl Iterator<Item = &str> {
    payload.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// First word is the item, the remaining words its description
fn split_items(payload: &str) -> impl Iterator<Item = (String, String)> + '_ {
    segments(payload).map(|segment| {
        let mut words = segment.split_whitespace();
        let head = words.next().unwrap_or_default().to_string();
        let rest = words.collect::<Vec<_>>().join(" ");
        (head, rest)
    })
}

fn parse_extras(patterns: &PatternCatalog, payload: &str) -> Vec<Extra> {
    segments(payload)
        .filter_map(|segment| {
            let (quantity, kind) = patterns.extra_item(segment)?;
            Some(Extra {
                kind: kind.to_string(),
                quantity: quantity.and_then(|q| q.parse().ok()).unwrap_or(1),
                description: String::new(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    patterns: &'a PatternCatalog,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(patterns: &'a PatternCatalog) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub const fn patterns(&self) -> &'a PatternCatalog {
        self.patterns
    }

    /// Classify a line inside an open scene
    #[must_use]
    pub fn classify(&self, line: &str) -> LineKind {
        match self.claim(line) {
            Some((rule, kind)) => {
                trace!("line {line:?} claimed by {rule} rule");
                kind
            }
            None => LineKind::Description,
        }
    }

    /// First rule that claims `line`, with the rule name for diagnostics
    fn claim(&self, line: &str) -> Option<(&'static str, LineKind)> {
        BODY_RULES
            .iter()
            .find_map(|rule| (rule.apply)(self.patterns, line).map(|kind| (rule.name, kind)))
    }

    #[must_use]
    pub fn is_character(&self, line: &str) -> bool {
        self.patterns.is_character(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn classify(line: &str) -> LineKind {
        let patterns = PatternCatalog::new(&Vocabulary::default()).unwrap();
        LineClassifier::new(&patterns).classify(line)
    }

    #[test]
    fn bare_cue_is_character() {
        assert_eq!(classify("JOHN (V.O.)"), LineKind::Character("JOHN".into()));
    }

    #[test]
    fn cue_with_colon_is_not_character() {
        assert_eq!(classify("JOHN:"), LineKind::Description);
    }

    #[test]
    fn colon_line_is_dialogue() {
        assert_eq!(
            classify("JOHN: Hello there."),
            LineKind::Dialogue(DialogueLine {
                character: "JOHN".into(),
                text: "Hello there.".into(),
            })
        );
    }

    #[test]
    fn uppercase_label_goes_to_annotation_not_dialogue() {
        assert_eq!(
            classify("PROPS: knife, red phone"),
            LineKind::Props(vec![
                Prop {
                    name: "knife".into(),
                    description: String::new(),
                    quantity: 1,
                },
                Prop {
                    name: "red".into(),
                    description: "phone".into(),
                    quantity: 1,
                },
            ])
        );
    }

    #[test]
    fn vehicles_split_type_and_description() {
        assert_eq!(
            classify("Pojazdy: radiowóz oznakowany, rower"),
            LineKind::Vehicles(vec![
                Vehicle {
                    kind: "radiowóz".into(),
                    description: "oznakowany".into(),
                    quantity: 1,
                },
                Vehicle {
                    kind: "rower".into(),
                    description: String::new(),
                    quantity: 1,
                },
            ])
        );
    }

    #[test]
    fn extras_parse_leading_quantity() {
        assert_eq!(
            classify("STATYŚCI: 20 przechodniów, kelner, kilku gapiów"),
            LineKind::Extras(vec![
                Extra {
                    kind: "przechodniów".into(),
                    quantity: 20,
                    description: String::new(),
                },
                Extra {
                    kind: "kelner".into(),
                    quantity: 1,
                    description: String::new(),
                },
                Extra {
                    kind: "kilku gapiów".into(),
                    quantity: 1,
                    description: String::new(),
                },
            ])
        );
    }

    #[test]
    fn special_requirements_split_on_commas() {
        assert_eq!(
            classify("Uwagi: sztuczny deszcz, dron,"),
            LineKind::Special(vec!["sztuczny deszcz".into(), "dron".into()])
        );
    }

    #[test]
    fn prose_is_description() {
        assert_eq!(classify("John opens the fridge."), LineKind::Description);
        assert_eq!(classify("He says: nothing."), LineKind::Description);
    }

    #[test]
    fn rule_order_is_character_dialogue_annotation() {
        let names: Vec<&str> = BODY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["character", "dialogue", "annotation"]);

        let patterns = PatternCatalog::new(&Vocabulary::default()).unwrap();
        let classifier = LineClassifier::new(&patterns);
        let rule = |line: &str| classifier.claim(line).map(|(name, _)| name);
        assert_eq!(rule("ANNA"), Some("character"));
        assert_eq!(rule("ANNA: Tak."), Some("dialogue"));
        assert_eq!(rule("rekwizyt: nóż"), Some("annotation"));
        assert_eq!(rule("Anna idzie."), None);
    }

    #[test]
    fn special_requirements_label_is_not_a_speaker() {
        assert_eq!(
            classify("SPECIAL REQUIREMENTS: rain machine, smoke"),
            LineKind::Special(vec!["rain machine".into(), "smoke".into()])
        );
        assert_eq!(
            classify("Special requirements: crane"),
            LineKind::Special(vec!["crane".into()])
        );
        assert_eq!(
            classify("Wymagania specjalne: pirotechnik"),
            LineKind::Special(vec!["pirotechnik".into()])
        );
    }
}
