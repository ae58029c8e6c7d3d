//! Tables file handling
//!
//! The vocabulary and connector tables can be replaced with a JSON file.
//! Both tables are stored as lists so their order survives a round trip:
//!
//! ```json
//! {
//!   "vocabulary": [{ "alias": "router", "label": "Router" }],
//!   "connectors": ["connected to", "then to"]
//! }
//! ```

use crate::error::Result;
use crate::vocabulary::{ConnectorSet, DEFAULT_CONNECTORS, DEFAULT_VOCABULARY, Vocabulary, VocabularyEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name used when the tables live in a config directory
pub const TABLES_FILE_NAME: &str = "tables.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesConfig {
    pub vocabulary: Vec<VocabularyEntry>,
    #[serde(default = "default_connectors")]
    pub connectors: Vec<String>,
}

fn default_connectors() -> Vec<String> {
    DEFAULT_CONNECTORS.iter().map(|p| p.to_string()).collect()
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY
                .iter()
                .map(|(alias, label)| VocabularyEntry::new(*alias, *label))
                .collect(),
            connectors: default_connectors(),
        }
    }
}

impl TablesConfig {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading tables from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the tables as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Validate and convert into the engine's tables
    pub fn into_tables(self) -> Result<(Vocabulary, ConnectorSet)> {
        let vocabulary = Vocabulary::new(self.vocabulary)?;
        let connectors = ConnectorSet::new(self.connectors)?;
        Ok((vocabulary, connectors))
    }
}
