#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Screenplay breakdown parser
//!
//! Turns the extracted text of a screenplay into per-scene production data:
//! cast, dialogue, props, vehicles, extras and special requirements.
//!
//! ```ignore
//! use scriptbreak::ScreenplayParser;
//!
//! let parser = ScreenplayParser::new()?;
//! let doc = parser.parse(&["1. INT. KITCHEN - DAY", "JOHN: Hello there."]);
//! assert_eq!(doc.scenes[0].cast, vec!["JOHN"]);
//! ```

uniffi::setup_scaffolding!();

pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod ffi;
pub mod models;
pub mod parser;
pub mod patterns;
pub mod segmenter;
pub mod source;
pub mod summary;
pub mod vocabulary;

pub use config::ParserConfig;
pub use detector::{FormatDetector, FormatVotes, ScriptFormat};
pub use error::{ExtractionError, ExtractionResult, ScreenplayError, ScreenplayResult};
pub use models::{
    DialogueLine, DocumentMetadata, Extra, Location, ParsedDocument, Prop, Scene, TextLine,
    Vehicle,
};
pub use parser::ScreenplayParser;
pub use source::{LineSource, TextLineSource};
pub use vocabulary::{AnnotationKind, Setting, TimeOfDay, Vocabulary};
