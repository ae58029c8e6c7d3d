use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Empty alias for label '{0}'")]
    EmptyAlias(String),

    #[error("Empty label for alias '{0}'")]
    EmptyLabel(String),

    #[error("Duplicate alias: {0}")]
    DuplicateAlias(String),

    #[error("Empty connector phrase")]
    EmptyConnector,

    #[error("Duplicate connector phrase: {0}")]
    DuplicateConnector(String),

    #[error("Invalid pattern for '{term}': {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;

/// Failure reported by an external diagram renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Renderer unavailable: {0}")]
    Unavailable(String),

    #[error("Renderer rejected diagram: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
