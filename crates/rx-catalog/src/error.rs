//! Error types for catalog access.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read catalog file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("invalid catalog row {row} in {path}")]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        #[source]
        source: rx_model::RecordError,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
