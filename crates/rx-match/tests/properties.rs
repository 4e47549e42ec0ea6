use proptest::prelude::*;

use rx_match::metrics::{jaro_winkler, levenshtein, ngram_similarity};
use rx_match::similarity::similarity;
use rx_match::{SUGGESTION_FLOOR, match_medication};
use rx_model::DrugRecord;

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in "[a-zA-Z0-9 -]{0,24}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in "[a-zA-Z ]{0,16}", b in "[a-zA-Z ]{0,16}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_bounded_by_longer_input(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
        let max_len = a.chars().count().max(b.chars().count());
        prop_assert!(levenshtein(&a, &b) <= max_len);
    }

    #[test]
    fn jaro_winkler_bounded(a in "[a-zA-Z]{0,16}", b in "[a-zA-Z]{0,16}") {
        let score = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn ngram_bounded_and_symmetric(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
        let forward = ngram_similarity(&a, &b, 2);
        let backward = ngram_similarity(&b, &a, 2);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, backward);
    }

    // Shorter strings have empty bigram sets (and, at length 1, a negative
    // Jaro window), so the combined score's own maximum sits below 1.0 —
    // full marks are only reachable from two characters up.
    #[test]
    fn identical_names_score_full(a in "[a-zA-Z]{2,16}") {
        let score = similarity(&a, &a);
        prop_assert!((score - 1.0).abs() < 1e-9, "similarity(a, a) = {}", score);
    }

    #[test]
    fn outcome_respects_floor_cap_and_ordering(
        names in prop::collection::vec("[a-z]{3,12}", 0..12),
        query in "[a-z]{3,12}",
    ) {
        let catalog: Vec<DrugRecord> = names
            .iter()
            .enumerate()
            .map(|(i, name)| DrugRecord::new(format!("D{i}"), name.clone()).unwrap())
            .collect();

        let outcome = match_medication(&query, &catalog);

        prop_assert!(outcome.candidates.len() <= 5);
        for candidate in &outcome.candidates {
            prop_assert!(candidate.score >= SUGGESTION_FLOOR);
        }
        for pair in outcome.candidates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        if outcome.auto_matched {
            prop_assert_eq!(
                outcome.matched.as_ref(),
                outcome.candidates.first().map(|c| &c.record)
            );
        } else {
            prop_assert!(outcome.matched.is_none());
        }

        // Pure function: identical arguments, identical outcome.
        let again = match_medication(&query, &catalog);
        prop_assert_eq!(outcome, again);
    }
}
