//! Shapes produced by the external OCR/text-extraction service.
//!
//! The extraction pipeline itself lives outside this workspace; these types
//! describe what it hands us. Matching only consumes the `name` field —
//! strength participates solely in the caller-side exact fast path.

use serde::{Deserialize, Serialize};

/// One medication line as extracted from an uploaded prescription image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMedication {
    /// Free-text medication name to reconcile against the catalog.
    pub name: String,
    /// Strength as read, if the extractor found one.
    pub strength: Option<String>,
    /// Dosing directions as read. Never used for matching.
    pub directions: Option<String>,
}

impl ExtractedMedication {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strength: None,
            directions: None,
        }
    }

    #[must_use]
    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = Some(strength.into());
        self
    }
}
