//! Report types emitted by the CLI commands.

use serde::Serialize;

use rx_match::{MatchDecision, MatchOutcome};
use rx_model::ExtractedMedication;

/// Result of resolving a single extracted name.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    /// The query as parsed from the command line or batch file.
    pub query: ExtractedMedication,
    /// True when the exact name+strength fast path hit, bypassing scoring.
    pub exact: bool,
    /// The engine outcome (or the synthesized exact outcome).
    pub outcome: MatchOutcome,
}

/// Results for a whole batch file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub entries: Vec<ResolveReport>,
}

impl BatchReport {
    /// Count of entries per decision.
    pub fn counts(&self) -> (usize, usize, usize) {
        let mut auto = 0;
        let mut review = 0;
        let mut unmatched = 0;
        for entry in &self.entries {
            match entry.outcome.decision() {
                MatchDecision::Auto => auto += 1,
                MatchDecision::Review => review += 1,
                MatchDecision::NoMatch => unmatched += 1,
            }
        }
        (auto, review, unmatched)
    }
}

/// Parse one batch-file line into an extracted medication.
///
/// Accepts `name` or `name,strength`; blank lines and `#` comments are
/// skipped.
pub fn parse_batch_line(line: &str) -> Option<ExtractedMedication> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.split_once(',') {
        Some((name, strength)) => {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let mut med = ExtractedMedication::new(name);
            let strength = strength.trim();
            if !strength.is_empty() {
                med.strength = Some(strength.to_string());
            }
            Some(med)
        }
        None => Some(ExtractedMedication::new(line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_strength() {
        let med = parse_batch_line("Augmentin, 625mg").unwrap();
        assert_eq!(med.name, "Augmentin");
        assert_eq!(med.strength.as_deref(), Some("625mg"));
    }

    #[test]
    fn parses_bare_name() {
        let med = parse_batch_line("  Panadol ").unwrap();
        assert_eq!(med.name, "Panadol");
        assert_eq!(med.strength, None);
    }

    #[test]
    fn skips_blanks_and_comments() {
        assert!(parse_batch_line("").is_none());
        assert!(parse_batch_line("   ").is_none());
        assert!(parse_batch_line("# header").is_none());
        assert!(parse_batch_line(",500mg").is_none());
    }

    #[test]
    fn trailing_comma_means_no_strength() {
        let med = parse_batch_line("Panadol,").unwrap();
        assert_eq!(med.strength, None);
    }
}
