use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Connection index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown direction: {0} (expected left-right, right-left or bidirectional)")]
    UnknownDirection(String),

    #[error("Invalid connection '{0}': expected DEVICE,PROTOCOL,DIRECTION,DEVICE[,PORT]")]
    InvalidConnection(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
