//! Fuzzy medication-name matching.
//!
//! Reconciles OCR-extracted prescription text against a drug catalog using
//! Levenshtein distance, Jaro-Winkler similarity, and bigram overlap,
//! combined into a weighted score with tiered auto-match / suggest / reject
//! thresholds.

pub mod engine;
pub mod error;
pub mod metrics;
pub mod similarity;
pub mod types;

pub use engine::{
    AUTO_MATCH_CEILING, MAX_CANDIDATES, MatchEngine, MatchThresholds, SUGGESTION_FLOOR,
    match_medication,
};
pub use error::ThresholdError;
pub use similarity::similarity;
pub use types::{MatchDecision, MatchOutcome, ScoredCandidate};
