//! Connector phrase segmentation
//!
//! Splitting happens in two passes. The marking pass rewrites every connector
//! phrase into a single joined token (spaces replaced by [`JOIN_MARKER`]),
//! taking the longest phrase at each position. The split pass then cuts the
//! marked text on the joined tokens only. Because "and then to" has already
//! become one token, the shorter "then to" can no longer fire inside it.

use crate::error::{Result, TableError};
use crate::vocabulary::ConnectorSet;
use regex::{Captures, Regex};
use tracing::debug;

/// Stands in for spaces inside a marked connector phrase
pub const JOIN_MARKER: char = '\u{1f}';

/// Join a connector phrase into its marked form
pub fn join_phrase(phrase: &str) -> String {
    phrase.replace(' ', &JOIN_MARKER.to_string())
}

fn alternation<'a>(terms: impl Iterator<Item = &'a str>) -> String {
    terms.map(regex::escape).collect::<Vec<_>>().join("|")
}

/// Splits normalized prompts into fragments at connector phrases
#[derive(Debug, Clone)]
pub struct EdgeSegmenter {
    connectors: ConnectorSet,
    patterns: Option<(Regex, Regex)>,
}

impl EdgeSegmenter {
    pub fn new(connectors: ConnectorSet) -> Result<Self> {
        if connectors.is_empty() {
            return Ok(Self {
                connectors,
                patterns: None,
            });
        }

        let ordered = connectors.by_precedence();
        let phrase_source = alternation(ordered.iter().copied());
        let joined: Vec<String> = ordered.iter().map(|p| join_phrase(p)).collect();
        let joined_source = alternation(joined.iter().map(String::as_str));

        let compile = |source: &str| {
            Regex::new(source).map_err(|source_err| TableError::Pattern {
                term: source.to_string(),
                source: source_err,
            })
        };

        let phrases = compile(&phrase_source)?;
        let markers = compile(&joined_source)?;

        Ok(Self {
            connectors,
            patterns: Some((phrases, markers)),
        })
    }

    pub fn connectors(&self) -> &ConnectorSet {
        &self.connectors
    }

    /// Replace each connector phrase with its joined token
    pub fn mark(&self, text: &str) -> String {
        match &self.patterns {
            Some((phrases, _)) => phrases
                .replace_all(text, |caps: &Captures| join_phrase(&caps[0]))
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Split normalized text into trimmed fragments.
    ///
    /// Text without connectors comes back as a single fragment. Adjacent
    /// connectors produce an empty fragment between them.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let fragments: Vec<String> = match &self.patterns {
            Some((_, markers)) => {
                let marked = self.mark(text);
                markers
                    .split(&marked)
                    .map(|fragment| fragment.trim().to_string())
                    .collect()
            }
            None => vec![text.trim().to_string()],
        };

        debug!("Segmented into {} fragments: {:?}", fragments.len(), fragments);
        fragments
    }
}
