//! Catalog match engine.
//!
//! Scores every catalog entry against the query (no pre-filtering — the
//! catalog is a bounded reference table, not a hot path), keeps entries at
//! or above the suggestion floor, and decides between auto-match,
//! review-suggestions, and no-match.
//!
//! The engine is purely computational and stateless: it only reads its
//! arguments, so concurrent use needs no coordination.

use std::cmp::Ordering;

use tracing::debug;

use rx_model::DrugRecord;

use crate::error::ThresholdError;
use crate::similarity::similarity;
use crate::types::{MatchOutcome, ScoredCandidate};

/// Scores below this are noise and are discarded entirely.
pub const SUGGESTION_FLOOR: f64 = 0.40;
/// At or above this the best match is treated as authoritative.
pub const AUTO_MATCH_CEILING: f64 = 0.63;
/// Candidates returned for transparency and reviewer suggestions.
pub const MAX_CANDIDATES: usize = 5;

/// Tiered decision thresholds.
///
/// The two cut-offs are empirically chosen constants with no documented
/// derivation; they are deliberately exposed as tunable configuration
/// rather than re-derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// Minimum score for an entry to appear anywhere in the result.
    pub suggestion_floor: f64,
    /// Minimum best score for an autonomous match.
    pub auto_match_ceiling: f64,
    /// Cap on the returned candidate list.
    pub max_candidates: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            suggestion_floor: SUGGESTION_FLOOR,
            auto_match_ceiling: AUTO_MATCH_CEILING,
            max_candidates: MAX_CANDIDATES,
        }
    }
}

impl MatchThresholds {
    /// Validate threshold ordering and ranges.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !(0.0..=1.0).contains(&self.suggestion_floor) {
            return Err(ThresholdError::FloorOutOfRange(self.suggestion_floor));
        }
        if !(0.0..=1.0).contains(&self.auto_match_ceiling) {
            return Err(ThresholdError::CeilingOutOfRange(self.auto_match_ceiling));
        }
        if self.suggestion_floor > self.auto_match_ceiling {
            return Err(ThresholdError::FloorAboveCeiling {
                floor: self.suggestion_floor,
                ceiling: self.auto_match_ceiling,
            });
        }
        if self.max_candidates == 0 {
            return Err(ThresholdError::ZeroCandidateCap);
        }
        Ok(())
    }
}

/// Engine for reconciling extracted medication names against the catalog.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    thresholds: MatchThresholds,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
        }
    }
}

impl MatchEngine {
    /// Create an engine with custom thresholds.
    ///
    /// # Errors
    ///
    /// Rejects thresholds outside [0, 1], a floor above the ceiling, or a
    /// zero candidate cap.
    pub fn new(thresholds: MatchThresholds) -> Result<Self, ThresholdError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds this engine decides with.
    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Match one extracted medication name against the full catalog.
    ///
    /// An empty catalog yields the ordinary no-match outcome. The result is
    /// a pure function of the arguments: identical inputs always produce
    /// identical outcomes.
    pub fn match_medication(&self, query: &str, catalog: &[DrugRecord]) -> MatchOutcome {
        let mut candidates: Vec<ScoredCandidate> = catalog
            .iter()
            .map(|record| ScoredCandidate {
                score: similarity(query, &record.name),
                record: record.clone(),
            })
            .filter(|candidate| candidate.score >= self.thresholds.suggestion_floor)
            .collect();

        // Stable sort: ties keep catalog iteration order.
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if candidates.is_empty() {
            debug!(catalog_size = catalog.len(), "no candidate above suggestion floor");
            return MatchOutcome::no_match();
        }

        let best_score = candidates[0].score;
        let auto_matched = best_score >= self.thresholds.auto_match_ceiling;
        candidates.truncate(self.thresholds.max_candidates);

        let matched = auto_matched.then(|| candidates[0].record.clone());
        debug!(
            catalog_size = catalog.len(),
            best_score,
            auto_matched,
            candidates = candidates.len(),
            "match decision"
        );

        MatchOutcome {
            matched,
            auto_matched,
            candidates,
        }
    }
}

/// Match with the default thresholds.
///
/// Convenience wrapper over [`MatchEngine`] for callers that never tune the
/// cut-offs.
pub fn match_medication(query: &str, catalog: &[DrugRecord]) -> MatchOutcome {
    MatchEngine::default().match_medication(query, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        assert!(MatchThresholds::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let thresholds = MatchThresholds {
            suggestion_floor: 0.8,
            auto_match_ceiling: 0.5,
            ..MatchThresholds::default()
        };
        assert_eq!(
            MatchEngine::new(thresholds).err(),
            Some(ThresholdError::FloorAboveCeiling {
                floor: 0.8,
                ceiling: 0.5
            })
        );
    }

    #[test]
    fn rejects_out_of_range_floor() {
        let thresholds = MatchThresholds {
            suggestion_floor: -0.1,
            ..MatchThresholds::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ThresholdError::FloorOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_zero_candidate_cap() {
        let thresholds = MatchThresholds {
            max_candidates: 0,
            ..MatchThresholds::default()
        };
        assert_eq!(thresholds.validate(), Err(ThresholdError::ZeroCandidateCap));
    }

    #[test]
    fn empty_catalog_is_no_match() {
        let outcome = match_medication("Augmentin", &[]);
        assert_eq!(outcome, MatchOutcome::no_match());
    }
}
