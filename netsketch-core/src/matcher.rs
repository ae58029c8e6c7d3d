//! Whole-word device keyword matching

use crate::error::{Result, TableError};
use crate::normalize::normalize;
use crate::vocabulary::Vocabulary;
use regex::Regex;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word pattern for an alias.
///
/// `\b` only works next to a word character, so an alias that starts or ends
/// with a symbol ("c++") is bounded by whitespace or the end of the text on
/// that side instead.
fn alias_pattern(alias: &str) -> String {
    let starts_with_word = alias.chars().next().is_some_and(is_word_char);
    let ends_with_word = alias.chars().last().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if starts_with_word { r"\b" } else { r"(?:^|\s)" },
        regex::escape(alias),
        if ends_with_word { r"\b" } else { r"(?:\s|$)" },
    )
}

/// Finds vocabulary aliases in text.
///
/// Matches are anchored on word boundaries, so "routersmith" never matches
/// "router". Aliases edged by a symbol need whitespace on that side. When a
/// fragment contains several aliases, the one listed first in the vocabulary
/// wins. A fragment naming two devices resolves to only one of them.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    vocabulary: Vocabulary,
    patterns: Vec<Regex>,
}

impl KeywordMatcher {
    /// Compile one boundary-anchored pattern per alias
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let patterns = vocabulary
            .iter()
            .map(|entry| {
                Regex::new(&alias_pattern(&entry.alias)).map_err(|source| {
                    TableError::Pattern {
                        term: entry.alias.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vocabulary,
            patterns,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// First alias (in vocabulary order) found in the fragment
    pub fn find_first_keyword(&self, fragment: &str) -> Option<&str> {
        let clean = normalize(fragment);
        self.vocabulary
            .iter()
            .zip(&self.patterns)
            .find(|(_, pattern)| pattern.is_match(&clean))
            .map(|(entry, _)| entry.alias.as_str())
    }

    /// Canonical label of the first alias found in the fragment
    pub fn resolve(&self, fragment: &str) -> Option<&str> {
        self.find_first_keyword(fragment)
            .and_then(|alias| self.canonical(alias))
    }

    /// Every canonical label mentioned anywhere in the text.
    ///
    /// Labels are deduplicated and returned in vocabulary order, independent
    /// of where they appear in the text.
    pub fn find_all_keywords(&self, text: &str) -> Vec<String> {
        let clean = normalize(text);
        let mut labels: Vec<String> = Vec::new();

        for (entry, pattern) in self.vocabulary.iter().zip(&self.patterns) {
            if pattern.is_match(&clean) && !labels.contains(&entry.label) {
                labels.push(entry.label.clone());
            }
        }

        labels
    }

    pub fn canonical(&self, alias: &str) -> Option<&str> {
        self.vocabulary.label(alias)
    }
}
