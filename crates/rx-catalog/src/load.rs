//! CSV catalog loading.
//!
//! Expects a header row of `id,name,strength,generic_name`. Empty strength
//! or generic cells become `None`; an empty file is an empty catalog, which
//! is a normal result rather than an error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use rx_model::DrugRecord;

use crate::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    strength: Option<String>,
    generic_name: Option<String>,
}

/// Load every record from a catalog CSV file.
pub fn load_catalog(path: &Path) -> Result<Vec<DrugRecord>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = row.map_err(|e| CatalogError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut record = DrugRecord::new(row.id, row.name).map_err(|e| {
            CatalogError::InvalidRecord {
                path: path.to_path_buf(),
                // +2: one for the header row, one for 1-based numbering
                row: idx + 2,
                source: e,
            }
        })?;
        record.strength = row.strength.filter(|s| !s.is_empty());
        record.generic_name = row.generic_name.filter(|s| !s.is_empty());
        records.push(record);
    }

    tracing::debug!(path = %path.display(), records = records.len(), "catalog loaded");
    Ok(records)
}
