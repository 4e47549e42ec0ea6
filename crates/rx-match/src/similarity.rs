//! Weighted combination of the three string metrics.
//!
//! The weighting favors Jaro-Winkler because it tolerates the typos and
//! transpositions OCR introduces into pharmaceutical names; raw edit
//! distance and bigram overlap are each discounted to a quarter weight.
//! These are fixed design constants, not tunables.

use crate::metrics::{DEFAULT_NGRAM, jaro_winkler, levenshtein, ngram_similarity};

pub const JARO_WINKLER_WEIGHT: f64 = 0.5;
pub const LEVENSHTEIN_WEIGHT: f64 = 0.25;
pub const NGRAM_WEIGHT: f64 = 0.25;

/// Levenshtein distance normalized to a similarity in [0, 1].
///
/// Defined as 1.0 when both strings are empty.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Combined similarity between an extracted medication name and a catalog
/// name.
///
/// `0.5 * jaro_winkler + 0.25 * levenshtein_similarity + 0.25 * bigram
/// Jaccard`, with both inputs lowercased before any sub-metric is applied
/// (each metric normalizes internally).
pub fn similarity(a: &str, b: &str) -> f64 {
    JARO_WINKLER_WEIGHT * jaro_winkler(a, b)
        + LEVENSHTEIN_WEIGHT * levenshtein_similarity(a, b)
        + NGRAM_WEIGHT * ngram_similarity(a, b, DEFAULT_NGRAM)
}
