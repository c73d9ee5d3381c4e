use crate::classifier::{LineClassifier, LineKind};
use crate::models::{Location, Scene, TextLine};
use crate::patterns::LocationTime;

use super::{SceneAssembler, SegmentationStrategy};

/// `KITCHEN - DAY` header line followed by the scene number on its own line
#[derive(Debug, Clone, Default)]
pub struct LocationTimeStrategy {
    /// Location/time line seen, scene number not yet
    awaiting_scene_number: Option<LocationTime>,
}

impl SegmentationStrategy for LocationTimeStrategy {
    fn step(
        &mut self,
        lines: &[TextLine],
        pos: usize,
        classifier: &LineClassifier<'_>,
        assembler: &mut SceneAssembler,
    ) -> usize {
        let patterns = classifier.patterns();
        let line = lines[pos].as_str();

        if let Some(pending) = patterns.location_time(line) {
            self.awaiting_scene_number = Some(pending);
            return 1;
        }

        if let Some(number) = patterns.scene_number(line)
            && let Some(pending) = self.awaiting_scene_number.take()
        {
            assembler.open(Scene::new(
                number,
                Location::undetermined(pending.name),
                pending.time_of_day,
            ));
            return 1;
        }

        if !assembler.is_open() {
            self.awaiting_scene_number = None;
            return 1;
        }

        match classifier.classify(line) {
            // This convention often drops the colon, so the next line is the speech.
            LineKind::Character(name) => {
                if let Some(next) = lines.get(pos + 1)
                    && !classifier.is_character(next.as_str())
                {
                    assembler.add_dialogue(&name, next.as_str());
                    return 2;
                }
                assembler.absorb(LineKind::Character(name), line);
            }
            kind => assembler.absorb(kind, line),
        }
        1
    }
}
