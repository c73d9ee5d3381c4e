//! Print a production breakdown of a plain-text screenplay
//!
//! ```text
//! RUST_LOG=debug cargo run --example parse_screenplay -- path/to/script.txt
//! ```
//!
//! Without an argument a short built-in script is used.

use std::{
    fs,
    path::{Path, PathBuf},
};

use scriptbreak::{
    ExtractionError, LineSource, ScreenplayParser, TextLineSource, source::split_text,
};

const SAMPLE: &str = "\
OSTATNI POCIĄG
wersja 0.9

KITCHEN - DAY
1
JOHN
Where were you?
ANNA
Out.
PROPS: kettle, two cups
EXTRAS: 3 neighbours

STREET - NIGHT
2
Rain. A car idles by the curb.
VEHICLES: taxi yellow
";

/// Reads an already extracted `.txt` screenplay from disk
#[derive(Debug)]
struct LocalTextFile {
    path: PathBuf,
}

impl LocalTextFile {
    fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for LocalTextFile {
    fn read_lines(&self) -> Result<Vec<String>, ExtractionError> {
        let bytes = fs::read(&self.path).map_err(|e| {
            ExtractionError::unreadable(format!("{}: {e}", self.path.display()))
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ExtractionError::InvalidEncoding)?;
        Ok(split_text(&text))
    }
}

fn main() {
    env_logger::init();

    let parser = match ScreenplayParser::new() {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Failed to build parser: {e}");
            std::process::exit(1);
        }
    };

    let result = match std::env::args().nth(1) {
        Some(path) => parser.parse_source(&LocalTextFile::new(path)),
        None => parser.parse_source(&TextLineSource::from_text(SAMPLE)),
    };

    let doc = match result {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{} (version {}, {} format)", doc.title, doc.version, doc.format.name());
    println!("Extracted at {}\n", doc.extracted_at.to_rfc3339());

    for scene in &doc.scenes {
        println!(
            "Scene {}: {} [{}] - {}",
            scene.scene_number, scene.location.name, scene.location.kind, scene.time_of_day
        );
        if !scene.cast.is_empty() {
            println!("  Cast: {}", scene.cast.join(", "));
        }
        for line in &scene.dialogue {
            println!("  {}: {}", line.character, line.text);
        }
        for prop in &scene.props {
            println!("  Prop: {} {}", prop.name, prop.description);
        }
        for vehicle in &scene.vehicles {
            println!("  Vehicle: {} {}", vehicle.kind, vehicle.description);
        }
        for extra in &scene.extras {
            println!("  Extras: {} x {}", extra.quantity, extra.kind);
        }
        for note in &scene.special_requirements {
            println!("  Special: {note}");
        }
        if !scene.description.is_empty() {
            println!("  Description: {}", scene.description);
        }
    }

    println!(
        "\n{} scenes, {} characters, {} dialogue lines",
        doc.metadata.total_scenes,
        doc.metadata.unique_characters.len(),
        doc.metadata.total_dialogues
    );
}
