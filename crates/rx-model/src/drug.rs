//! Drug catalog records.
//!
//! Records are owned by the external catalog store; everything in this
//! workspace only reads them.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// A single known drug formulation in the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Unique identifier in the catalog store.
    pub id: String,
    /// Brand or product name. Similarity scoring runs against this field.
    pub name: String,
    /// Dose strength as written in the catalog (e.g., "625mg", "1.5mg/mL").
    pub strength: Option<String>,
    /// Generic (INN) name, if recorded.
    pub generic_name: Option<String>,
}

impl DrugRecord {
    /// Create a record, rejecting empty identifiers or names.
    ///
    /// Catalog rows arrive from an external store and are not trusted to be
    /// well-formed; invalid rows are signaled to the caller, never coerced.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName(id));
        }
        Ok(Self {
            id,
            name,
            strength: None,
            generic_name: None,
        })
    }

    /// Attach a strength to the record.
    #[must_use]
    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = Some(strength.into());
        self
    }

    /// Attach a generic name to the record.
    #[must_use]
    pub fn with_generic(mut self, generic: impl Into<String>) -> Self {
        self.generic_name = Some(generic.into());
        self
    }

    /// Case-insensitive exact comparison against an extracted name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(query.trim())
    }

    /// Case-insensitive strength comparison.
    ///
    /// A record without a recorded strength never matches exactly.
    pub fn strength_matches(&self, strength: &str) -> bool {
        self.strength
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(strength.trim()))
    }
}
