use crate::classifier::LineClassifier;
use crate::models::{Scene, TextLine};

use super::{SceneAssembler, SegmentationStrategy};

/// Numbered one-line headers (`12. INT. KITCHEN - DAY`)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStrategy;

impl SegmentationStrategy for StandardStrategy {
    fn step(
        &mut self,
        lines: &[TextLine],
        pos: usize,
        classifier: &LineClassifier<'_>,
        assembler: &mut SceneAssembler,
    ) -> usize {
        let line = lines[pos].as_str();

        if let Some(heading) = classifier.patterns().standard_header(line) {
            assembler.open(Scene::new(
                heading.scene_number,
                heading.location,
                heading.time_of_day,
            ));
            return 1;
        }

        if assembler.is_open() {
            assembler.absorb(classifier.classify(line), line);
        }
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::patterns::PatternCatalog;
    use crate::segmenter::segment;
    use crate::source::normalize_lines;
    use crate::vocabulary::{TimeOfDay, Vocabulary};

    fn run(raw: &[&str]) -> Vec<Scene> {
        let patterns = PatternCatalog::new(&Vocabulary::default()).unwrap();
        let classifier = LineClassifier::new(&patterns);
        segment(&mut StandardStrategy, &normalize_lines(raw), &classifier)
    }

    #[test]
    fn two_headers_make_two_scenes() {
        let scenes = run(&[
            "1. INT. KITCHEN - DAY",
            "JOHN: Hello there.",
            "2. EXT. STREET - NIGHT",
            "Rain falls.",
        ]);

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].location, Location::new("INT.", "KITCHEN"));
        assert_eq!(scenes[0].time_of_day, TimeOfDay::Day);
        assert_eq!(scenes[0].cast, vec!["JOHN"]);
        assert_eq!(scenes[0].dialogue[0].text, "Hello there.");
        assert_eq!(scenes[1].scene_number, "2");
        assert_eq!(scenes[1].time_of_day, TimeOfDay::Night);
        assert_eq!(scenes[1].description, "Rain falls.");
    }

    #[test]
    fn front_matter_is_discarded() {
        let scenes = run(&["MY FILM", "by Someone", "JOHN: ignored", "1. INT. KITCHEN - DAY"]);
        assert_eq!(scenes.len(), 1);
        assert!(scenes[0].cast.is_empty());
        assert_eq!(scenes[0].description, "");
    }

    #[test]
    fn bare_cue_without_colon_only_joins_cast() {
        let scenes = run(&["1. INT. KITCHEN - DAY", "ANNA", "Hello?"]);
        assert_eq!(scenes[0].cast, vec!["ANNA"]);
        assert!(scenes[0].dialogue.is_empty());
        assert_eq!(scenes[0].description, "Hello?");
    }

    #[test]
    fn duplicate_scene_numbers_are_kept() {
        let scenes = run(&["5. INT. KITCHEN - DAY", "5. INT. KITCHEN - NIGHT"]);
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].scene_number, scenes[1].scene_number);
    }
}
