use crate::assemble::{Extraction, GraphAssembler};
use crate::config::TablesConfig;
use crate::error::Result;
use crate::matcher::KeywordMatcher;
use crate::normalize::normalize;
use crate::render::GraphRenderer;
use crate::segment::EdgeSegmenter;
use crate::vocabulary::{ConnectorSet, Vocabulary};
use tracing::debug;

/// Prompt-to-graph pipeline over a fixed pair of tables.
///
/// Holds only immutable data, so one instance can be shared across threads
/// and called concurrently.
#[derive(Debug, Clone)]
pub struct Extractor {
    matcher: KeywordMatcher,
    segmenter: EdgeSegmenter,
}

impl Extractor {
    pub fn new(vocabulary: Vocabulary, connectors: ConnectorSet) -> Result<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new(vocabulary)?,
            segmenter: EdgeSegmenter::new(connectors)?,
        })
    }

    /// Extractor over the built-in device and connector tables
    pub fn with_default_tables() -> Result<Self> {
        Self::new(Vocabulary::default(), ConnectorSet::default())
    }

    pub fn from_config(config: TablesConfig) -> Result<Self> {
        let (vocabulary, connectors) = config.into_tables()?;
        Self::new(vocabulary, connectors)
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn segmenter(&self) -> &EdgeSegmenter {
        &self.segmenter
    }

    /// Run the whole pipeline. Never fails; unrecognized input gives an
    /// empty graph.
    pub fn extract(&self, prompt: &str) -> Extraction {
        let normalized = normalize(prompt);
        debug!("Normalized prompt: {:?}", normalized);

        let fragments = self.segmenter.segment(&normalized);
        GraphAssembler::new(&self.matcher).assemble(&normalized, &fragments)
    }

    /// Extract and render in one step
    pub fn render(&self, prompt: &str, renderer: &dyn GraphRenderer) -> String {
        renderer.render(&self.extract(prompt).graph)
    }
}
