//! String-distance primitives used by the combined similarity score.
//!
//! All three metrics are case-insensitive: inputs are lowercased internally
//! so callers never have to pre-normalize. Lengths are counted in Unicode
//! scalar values, matching the per-character edit operations.

use std::collections::BTreeSet;

/// N-gram width used by the combined similarity score.
pub const DEFAULT_NGRAM: usize = 2;

/// Minimum number of single-character insertions, deletions, or
/// substitutions needed to turn `a` into `b`.
///
/// Classic dynamic programming over the two most recent rows, so memory is
/// `O(min)` while the contract stays the full-table one:
/// `levenshtein(x, "") == |x|` and `levenshtein("", "") == 0`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ch_a) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ch_b) in b.iter().enumerate() {
            let cost = usize::from(ch_a != ch_b);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Jaro-Winkler similarity in [0, 1].
///
/// Tuned for short strings with common prefixes, which is exactly the shape
/// of pharmaceutical brand names; robust to transpositions.
///
/// The match window is `floor(max_len / 2) - 1`. For a max length of 1 that
/// quantity is negative, so no window scan is possible and the result is 0
/// even for identical single characters.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.len().max(b.len());
    let Some(window) = (max_len / 2).checked_sub(1) else {
        return 0.0;
    };

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for i in 0..a.len() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && a[i] == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk matched characters of both strings in order; every aligned pair
    // that disagrees counts as half a transposition.
    let mut misaligned = 0usize;
    let mut k = 0usize;
    for i in 0..a.len() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if a[i] != b[k] {
            misaligned += 1;
        }
        k += 1;
    }
    let transpositions = misaligned as f64 / 2.0;

    let m = matches as f64;
    let jaro =
        (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions) / m) / 3.0;

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(4)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + prefix as f64 * 0.1 * (1.0 - jaro)
}

/// Jaccard index of the sets of contiguous `n`-character substrings.
///
/// Strings shorter than `n` contribute an empty set. An empty union yields
/// 0 rather than dividing by zero; `n == 0` is degenerate and also yields 0.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let grams_a = ngrams(&a.to_lowercase(), n);
    let grams_b = ngrams(&b.to_lowercase(), n);

    let union = grams_a.union(&grams_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = grams_a.intersection(&grams_b).count();
    intersection as f64 / union as f64
}

fn ngrams(s: &str, n: usize) -> BTreeSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < n {
        return BTreeSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn levenshtein_classic_cases() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("augmentn", "augmentin"), 1);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn levenshtein_ignores_case() {
        assert_eq!(levenshtein("Panadol", "panadol"), 0);
        assert_eq!(levenshtein("AUGMENTIN", "augmentin"), 0);
    }

    #[test]
    fn jaro_winkler_empty_rules() {
        approx(jaro_winkler("", ""), 1.0);
        approx(jaro_winkler("abc", ""), 0.0);
        approx(jaro_winkler("", "abc"), 0.0);
    }

    #[test]
    fn jaro_winkler_reference_values() {
        // martha/marhta: jaro 0.944..., 3-char prefix bonus
        approx(jaro_winkler("MARTHA", "MARHTA"), 0.9611111111111111);
        // dwayne/duane: 4 matches, no transpositions, 1-char prefix
        approx(jaro_winkler("DWAYNE", "DUANE"), 0.84);
    }

    #[test]
    fn jaro_winkler_negative_window_yields_zero() {
        // max length 1 makes the match window negative, so even identical
        // single characters cannot match inside the window scan.
        approx(jaro_winkler("a", "a"), 0.0);
        approx(jaro_winkler("a", "b"), 0.0);
    }

    #[test]
    fn jaro_winkler_disjoint_is_zero() {
        approx(jaro_winkler("xyzzyx", "panadol"), 0.0);
    }

    #[test]
    fn bigram_similarity_jaccard() {
        // night {ni,ig,gh,ht} vs nacht {na,ac,ch,ht}: 1 shared of 7 total
        approx(ngram_similarity("night", "nacht", 2), 1.0 / 7.0);
        approx(ngram_similarity("ab", "ab", 2), 1.0);
    }

    #[test]
    fn ngram_empty_union_is_zero() {
        approx(ngram_similarity("a", "a", 2), 0.0);
        approx(ngram_similarity("", "", 2), 0.0);
        approx(ngram_similarity("abc", "abd", 0), 0.0);
    }
}
