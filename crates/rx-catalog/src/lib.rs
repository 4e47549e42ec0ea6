//! Catalog read service: CSV-backed and in-memory sources plus the exact
//! name+strength fast path consulted before fuzzy matching.

pub mod error;
pub mod exact;
pub mod load;
pub mod source;

pub use error::{CatalogError, Result};
pub use exact::find_exact;
pub use load::load_catalog;
pub use source::{CatalogSource, CsvSource, InMemorySource};
