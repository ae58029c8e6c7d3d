//! Device vocabulary and connector phrase tables
//!
//! Both tables are ordered. Vocabulary order decides which alias wins when a
//! fragment mentions more than one device; connector order only breaks ties
//! between phrases of the same length.

use crate::error::{Result, TableError};
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Built-in alias table, in match priority order
pub const DEFAULT_VOCABULARY: &[(&str, &str)] = &[
    ("router", "Router"),
    ("firewall", "Firewall"),
    ("vpn", "VPN"),
    ("internet", "Internet"),
    ("cloud", "Internet"),
    ("laptop", "Laptop"),
    ("server", "Server"),
    ("client", "Client"),
    ("mfa", "MFA"),
    ("app gateway", "App Gateway"),
    ("wireless access point", "WAP"),
    ("wap", "WAP"),
];

/// Built-in connector phrases
pub const DEFAULT_CONNECTORS: &[&str] = &[
    "connected to",
    "connects to",
    "linked to",
    "joins",
    "talks to",
    "communicates with",
    "connects with",
    "and then to",
    "then to",
];

/// One alias -> canonical label mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub alias: String,
    pub label: String,
}

impl VocabularyEntry {
    pub fn new(alias: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            label: label.into(),
        }
    }
}

/// Ordered alias -> canonical label table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            entries: DEFAULT_VOCABULARY
                .iter()
                .map(|(alias, label)| VocabularyEntry::new(*alias, *label))
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Build a vocabulary, keeping the given order.
    ///
    /// Aliases go through [`normalize`] so they line up with normalized
    /// prompts ("Node.js" is stored as "nodejs"). Empty aliases, empty labels
    /// and duplicate aliases are rejected.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for entry in entries {
            let alias = normalize(&entry.alias);
            let label = entry.label.trim().to_string();

            if alias.is_empty() {
                return Err(TableError::EmptyAlias(label));
            }
            if label.is_empty() {
                return Err(TableError::EmptyLabel(alias));
            }
            if !seen.insert(alias.clone()) {
                return Err(TableError::DuplicateAlias(alias));
            }

            table.push(VocabularyEntry { alias, label });
        }

        Ok(Self { entries: table })
    }

    /// Convenience constructor from `(alias, label)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(alias, label)| VocabularyEntry::new(*alias, *label)),
        )
    }

    /// Canonical label for an alias
    pub fn label(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered set of connector phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSet {
    phrases: Vec<String>,
}

impl Default for ConnectorSet {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_CONNECTORS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ConnectorSet {
    /// Build a connector set, keeping the given order.
    ///
    /// Phrases go through [`normalize`], like prompts. Empty and duplicate
    /// phrases are rejected.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for phrase in phrases {
            let phrase = normalize(phrase.as_ref());
            if phrase.is_empty() {
                return Err(TableError::EmptyConnector);
            }
            if !seen.insert(phrase.clone()) {
                return Err(TableError::DuplicateConnector(phrase));
            }
            table.push(phrase);
        }

        Ok(Self { phrases: table })
    }

    /// Phrases in table order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Phrases in match precedence order: longest first, table order on ties.
    ///
    /// "and then to" therefore always comes before "then to".
    pub fn by_precedence(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        ordered.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));
        ordered
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
