//! Scene segmentation
//!
//! Both header conventions share one [`SceneAssembler`], which owns the open
//! scene and its description buffer. A [`SegmentationStrategy`] only decides
//! what each line means under its convention and how many lines it consumes.
//!
//! ```text
//! lines ──► strategy.step() ──► SceneAssembler ──► Vec<Scene>
//!              │    ▲
//!              ▼    │
//!          LineClassifier
//! ```

mod location_time;
mod standard;

pub use location_time::LocationTimeStrategy;
pub use standard::StandardStrategy;

use log::trace;

use crate::classifier::{LineClassifier, LineKind};
use crate::detector::ScriptFormat;
use crate::models::{Scene, TextLine};

/// Assembly state between two headers
#[derive(Debug, Default)]
enum SegmentState {
    /// Front matter before the first recognised header
    #[default]
    NoOpenScene,
    OpenScene {
        scene: Scene,
        description: Vec<String>,
    },
}

/// Accumulates scenes; a scene is finalised only when the next one opens or
/// the input ends
#[derive(Debug, Default)]
pub struct SceneAssembler {
    state: SegmentState,
    scenes: Vec<Scene>,
}

impl SceneAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SegmentState::OpenScene { .. })
    }

    /// Finalise the open scene, if any, and start `scene`
    pub fn open(&mut self, scene: Scene) {
        self.finalize();
        self.state = SegmentState::OpenScene {
            scene,
            description: Vec::new(),
        };
    }

    /// Fold a classified line into the open scene; ignored when none is open
    pub fn absorb(&mut self, kind: LineKind, line: &str) {
        let SegmentState::OpenScene { scene, description } = &mut self.state else {
            return;
        };

        match kind {
            LineKind::Character(name) => scene.add_cast(&name),
            LineKind::Dialogue(entry) => scene.add_dialogue(&entry.character, entry.text),
            LineKind::Props(items) => scene.props.extend(items),
            LineKind::Vehicles(items) => scene.vehicles.extend(items),
            LineKind::Extras(items) => scene.extras.extend(items),
            LineKind::Special(items) => scene.special_requirements.extend(items),
            LineKind::Description => description.push(line.to_string()),
        }
    }

    /// Attribute `text` to `character` in the open scene
    pub fn add_dialogue(&mut self, character: &str, text: &str) {
        if let SegmentState::OpenScene { scene, .. } = &mut self.state {
            scene.add_dialogue(character, text);
        }
    }

    fn finalize(&mut self) {
        if let SegmentState::OpenScene {
            mut scene,
            description,
        } = core::mem::take(&mut self.state)
        {
            scene.description = description.join(" ");
            trace!(
                "Scene {} closed: {} cast, {} dialogue lines",
                scene.scene_number,
                scene.cast.len(),
                scene.dialogue.len()
            );
            self.scenes.push(scene);
        }
    }

    /// Finalise the last scene and return all scenes in document order
    #[must_use]
    pub fn finish(mut self) -> Vec<Scene> {
        self.finalize();
        self.scenes
    }
}

/// Per-convention interpretation of the line stream
pub trait SegmentationStrategy {
    /// Handle the line at `pos` and return how many lines were consumed
    fn step(
        &mut self,
        lines: &[TextLine],
        pos: usize,
        classifier: &LineClassifier<'_>,
        assembler: &mut SceneAssembler,
    ) -> usize;
}

#[must_use]
pub fn strategy_for(format: ScriptFormat) -> Box<dyn SegmentationStrategy> {
    match format {
        ScriptFormat::Standard => Box::new(StandardStrategy),
        ScriptFormat::LocationTimeNumber => Box::new(LocationTimeStrategy::default()),
    }
}

/// Run `strategy` over the whole document
#[must_use]
pub fn segment(
    strategy: &mut dyn SegmentationStrategy,
    lines: &[TextLine],
    classifier: &LineClassifier<'_>,
) -> Vec<Scene> {
    let mut assembler = SceneAssembler::new();
    let mut pos = 0;
    while pos < lines.len() {
        pos += strategy.step(lines, pos, classifier, &mut assembler).max(1);
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DialogueLine, Location};
    use crate::vocabulary::TimeOfDay;

    fn scene(number: &str) -> Scene {
        Scene::new(number, Location::new("INT.", "KITCHEN"), TimeOfDay::Day)
    }

    #[test]
    fn closed_assembler_ignores_lines() {
        let mut assembler = SceneAssembler::new();
        assembler.absorb(LineKind::Description, "front matter");
        assembler.add_dialogue("JOHN", "Hi.");
        assert!(!assembler.is_open());
        assert!(assembler.finish().is_empty());
    }

    #[test]
    fn description_is_joined_when_next_scene_opens() {
        let mut assembler = SceneAssembler::new();
        assembler.open(scene("1"));
        assembler.absorb(LineKind::Description, "John enters.");
        assembler.absorb(LineKind::Description, "He sits.");
        assembler.open(scene("2"));
        assembler.absorb(LineKind::Description, "Empty room.");

        let scenes = assembler.finish();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].description, "John enters. He sits.");
        assert_eq!(scenes[1].description, "Empty room.");
    }

    #[test]
    fn dialogue_and_cast_accumulate() {
        let mut assembler = SceneAssembler::new();
        assembler.open(scene("1"));
        assembler.absorb(LineKind::Character("ANNA".into()), "ANNA");
        assembler.absorb(
            LineKind::Dialogue(DialogueLine {
                character: "JOHN".into(),
                text: "Hi.".into(),
            }),
            "JOHN: Hi.",
        );
        assembler.add_dialogue("ANNA", "Hello.");

        let scenes = assembler.finish();
        assert_eq!(scenes[0].cast, vec!["ANNA", "JOHN"]);
        assert_eq!(scenes[0].dialogue.len(), 2);
        assert_eq!(scenes[0].description, "");
    }
}
