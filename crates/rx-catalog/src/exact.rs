//! Exact name+strength fast path.
//!
//! Kept outside the similarity engine on purpose: callers consult it before
//! any fuzzy scoring, so an exact hit bypasses the weighted metrics
//! entirely.

use rx_model::DrugRecord;

/// Find the first record whose name (and strength, when given) matches the
/// query exactly, ignoring case and surrounding whitespace.
pub fn find_exact<'a>(
    catalog: &'a [DrugRecord],
    name: &str,
    strength: Option<&str>,
) -> Option<&'a DrugRecord> {
    catalog.iter().find(|record| {
        record.name_matches(name) && strength.is_none_or(|s| record.strength_matches(s))
    })
}
