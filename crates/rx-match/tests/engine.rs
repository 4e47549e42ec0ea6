use rx_match::{MatchDecision, MatchEngine, MatchThresholds, match_medication};
use rx_model::DrugRecord;

fn record(id: &str, name: &str) -> DrugRecord {
    DrugRecord::new(id, name).unwrap()
}

#[test]
fn one_character_omission_auto_matches() {
    let catalog = vec![record("D1", "Augmentin"), record("D2", "Amoxicillin")];
    let outcome = match_medication("Augmentn", &catalog);

    assert!(outcome.auto_matched);
    let matched = outcome.matched.as_ref().expect("auto match present");
    assert_eq!(matched.name, "Augmentin");
    assert_eq!(outcome.decision(), MatchDecision::Auto);
    // Amoxicillin scores below the suggestion floor and must not appear.
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].record.id, "D1");
}

#[test]
fn auto_match_equals_top_candidate() {
    let catalog = vec![record("D1", "Ferrotron"), record("D2", "Feroglobin")];
    let outcome = match_medication("Ferro", &catalog);

    assert!(outcome.auto_matched);
    assert_eq!(
        outcome.matched.as_ref().map(|r| r.id.as_str()),
        outcome.best().map(|c| c.record.id.as_str())
    );
    // Both entries survive the floor, ordered by descending score.
    assert_eq!(outcome.candidates.len(), 2);
    assert_eq!(outcome.candidates[0].record.name, "Ferrotron");
    assert_eq!(outcome.candidates[1].record.name, "Feroglobin");
    assert!(outcome.candidates[0].score > outcome.candidates[1].score);
}

#[test]
fn mid_range_score_defers_to_reviewer() {
    // "Ferro" vs "Feroglobin" lands between the floor and the ceiling.
    let catalog = vec![record("D1", "Feroglobin")];
    let outcome = match_medication("Ferro", &catalog);

    assert!(!outcome.auto_matched);
    assert!(outcome.matched.is_none());
    assert_eq!(outcome.decision(), MatchDecision::Review);
    assert_eq!(outcome.candidates.len(), 1);
    let score = outcome.candidates[0].score;
    assert!((0.40..0.63).contains(&score), "score {score} out of band");
}

#[test]
fn gibberish_yields_empty_result() {
    let catalog = vec![record("D1", "Panadol")];
    let outcome = match_medication("Xyzzyx", &catalog);

    assert!(outcome.matched.is_none());
    assert!(!outcome.auto_matched);
    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.decision(), MatchDecision::NoMatch);
}

#[test]
fn candidates_capped_at_five() {
    let catalog: Vec<DrugRecord> = (0..8)
        .map(|i| record(&format!("D{i}"), "Panadol"))
        .collect();
    let outcome = match_medication("Panadol", &catalog);

    assert_eq!(outcome.candidates.len(), 5);
    assert!(outcome.auto_matched);
}

#[test]
fn ties_keep_catalog_order() {
    // Identical names score identically; the stable sort must preserve
    // catalog iteration order.
    let catalog = vec![
        record("first", "Panadol"),
        record("second", "Panadol"),
        record("third", "Panadol"),
    ];
    let outcome = match_medication("Panadol", &catalog);

    let ids: Vec<&str> = outcome
        .candidates
        .iter()
        .map(|c| c.record.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert_eq!(outcome.matched.as_ref().map(|r| r.id.as_str()), Some("first"));
}

#[test]
fn matching_is_idempotent() {
    let catalog = vec![record("D1", "Augmentin"), record("D2", "Feroglobin")];
    let first = match_medication("Augmetin", &catalog);
    let second = match_medication("Augmetin", &catalog);
    assert_eq!(first, second);
}

#[test]
fn custom_thresholds_change_the_decision() {
    let catalog = vec![record("D1", "Feroglobin")];
    // "Ferro" scores ~0.58: below the default ceiling, above a relaxed one.
    let relaxed = MatchEngine::new(MatchThresholds {
        auto_match_ceiling: 0.50,
        ..MatchThresholds::default()
    })
    .unwrap();
    let outcome = relaxed.match_medication("Ferro", &catalog);
    assert!(outcome.auto_matched);
    assert_eq!(outcome.matched.as_ref().map(|r| r.id.as_str()), Some("D1"));
}

#[test]
fn outcome_serializes_for_audit() {
    let catalog = vec![record("D1", "Augmentin")];
    let outcome = match_medication("Augmentn", &catalog);
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let round: rx_match::MatchOutcome = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, outcome);
}
