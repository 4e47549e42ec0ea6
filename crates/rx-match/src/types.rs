//! Match result types returned to callers.

use serde::{Deserialize, Serialize};

use rx_model::DrugRecord;

/// One catalog entry together with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The catalog record.
    pub record: DrugRecord,
    /// Combined similarity score for (query, record.name).
    pub score: f64,
}

/// What the caller should do with a match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDecision {
    /// Confident enough to apply without human confirmation; downstream
    /// name/strength fields may be overwritten with catalog values.
    Auto,
    /// Candidates exist but none is authoritative; defer to a reviewer.
    Review,
    /// Nothing scored above the suggestion floor.
    NoMatch,
}

/// Result of matching one extracted medication name against the catalog.
///
/// Created fresh per query; persisting the final choice is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The authoritative match, present only when auto-matched.
    pub matched: Option<DrugRecord>,
    /// True when the best score reached the auto-match ceiling.
    pub auto_matched: bool,
    /// Up to the top 5 candidates at or above the suggestion floor,
    /// descending by score, ties in catalog order.
    pub candidates: Vec<ScoredCandidate>,
}

impl MatchOutcome {
    /// The empty "no match" outcome.
    pub fn no_match() -> Self {
        Self {
            matched: None,
            auto_matched: false,
            candidates: Vec::new(),
        }
    }

    /// Highest-scoring candidate, if any survived the floor.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }

    /// Collapse the outcome into the three-way caller decision.
    pub fn decision(&self) -> MatchDecision {
        if self.auto_matched {
            MatchDecision::Auto
        } else if self.candidates.is_empty() {
            MatchDecision::NoMatch
        } else {
            MatchDecision::Review
        }
    }
}
