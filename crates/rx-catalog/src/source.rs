//! Catalog read service seam.
//!
//! Callers fetch the full reference table per invocation; the matcher never
//! caches, locks, or mutates it. In production the store behind this trait
//! is a hosted database; here it is a CSV export or an in-memory table.

use std::path::PathBuf;

use rx_model::DrugRecord;

use crate::error::Result;
use crate::load::load_catalog;

/// A source of catalog records.
pub trait CatalogSource {
    /// Return all rows of the drug table (or a reasonably sized superset).
    fn fetch(&self) -> Result<Vec<DrugRecord>>;
}

/// Catalog held directly in memory, used by tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<DrugRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<DrugRecord>> {
        Ok(self.records.clone())
    }
}

/// Catalog backed by a CSV export on disk, re-read per fetch.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvSource {
    fn fetch(&self) -> Result<Vec<DrugRecord>> {
        load_catalog(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_source_round_trips() {
        let records = vec![DrugRecord::new("D1", "Panadol").unwrap()];
        let source = InMemorySource::new(records.clone());
        assert_eq!(source.fetch().unwrap(), records);
    }
}
