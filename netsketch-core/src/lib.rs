//! Turns plain-language network descriptions into topology graphs.
//!
//! ```text
//! prompt -> normalize -> segment on connectors -> resolve keywords -> Graph -> text
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod render;
pub mod segment;
pub mod vocabulary;

pub use assemble::{Diagnostic, Extraction, GraphAssembler, Provenance};
pub use config::TablesConfig;
pub use error::{RenderError, TableError};
pub use extract::Extractor;
pub use matcher::KeywordMatcher;
pub use model::{Direction, Edge, Graph};
pub use normalize::normalize;
pub use render::{DiagramFormat, DiagramRenderer, GraphRenderer, MermaidRenderer, PlantUmlRenderer};
pub use segment::EdgeSegmenter;
pub use vocabulary::{ConnectorSet, Vocabulary, VocabularyEntry};
