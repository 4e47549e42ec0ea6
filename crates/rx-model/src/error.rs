use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record id must not be empty")]
    EmptyId,
    #[error("record '{0}' has an empty name")]
    EmptyName(String),
}

pub type Result<T> = std::result::Result<T, RecordError>;
