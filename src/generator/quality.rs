//! Puzzle quality scoring
//!
//! Combines five sub-scores, each roughly in [0, 1], into a weighted quality
//! estimate used only to rank candidates during the search.

use super::validator::letter_occurrences;
use rustc_hash::FxHashSet;

/// Word counts inside this band score a full 1.0
pub const COMFORT_WORD_COUNT: (usize, usize) = (15, 80);

/// Word-count band whose midpoint anchors the decay outside the comfort band
pub const IDEAL_WORD_COUNT: (usize, usize) = (30, 80);

/// Distinct word lengths that count as full variety
pub const EXPECTED_LENGTH_VARIETY: f64 = 8.0;

/// Multiplier applied to the four-letter-word ratio
pub const FOUR_LETTER_SCALE: f64 = 4.0;

const WORD_COUNT_FLOOR: f64 = 0.4;
const WORD_COUNT_DECAY: f64 = 100.0;

const WORD_COUNT_WEIGHT: f64 = 0.30;
const LENGTH_VARIETY_WEIGHT: f64 = 0.20;
const FOUR_LETTER_WEIGHT: f64 = 0.20;
const PANGRAM_WEIGHT: f64 = 0.20;
const DISTRIBUTION_WEIGHT: f64 = 0.10;

/// The individual sub-scores behind a quality estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityBreakdown {
    pub word_count: f64,
    pub length_variety: f64,
    pub four_letter: f64,
    pub pangram: f64,
    pub distribution: f64,
}

impl QualityBreakdown {
    /// Weighted sum of the sub-scores
    #[must_use]
    pub fn total(&self) -> f64 {
        self.word_count * WORD_COUNT_WEIGHT
            + self.length_variety * LENGTH_VARIETY_WEIGHT
            + self.four_letter * FOUR_LETTER_WEIGHT
            + self.pangram * PANGRAM_WEIGHT
            + self.distribution * DISTRIBUTION_WEIGHT
    }
}

/// 1.0 inside the comfort band, else linear decay from the ideal midpoint
fn word_count_score(count: usize) -> f64 {
    let (low, high) = COMFORT_WORD_COUNT;
    if (low..=high).contains(&count) {
        return 1.0;
    }
    let midpoint = (IDEAL_WORD_COUNT.0 + IDEAL_WORD_COUNT.1) as f64 / 2.0;
    let distance = (count as f64 - midpoint).abs();
    (1.0 - distance / WORD_COUNT_DECAY).max(WORD_COUNT_FLOOR)
}

/// Inverse coefficient of variation of per-letter usage: 1.0 when every used
/// letter appears equally often
fn distribution_score<S: AsRef<str>>(valid_words: &[S]) -> f64 {
    let usage: Vec<f64> = letter_occurrences(valid_words)
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| count as f64)
        .collect();

    if usage.len() < 2 {
        return 1.0;
    }

    let n = usage.len() as f64;
    let mean = usage.iter().sum::<f64>() / n;
    let variance = usage.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let coefficient_of_variation = variance.sqrt() / mean;

    1.0 / (1.0 + coefficient_of_variation)
}

/// Compute the sub-scores for a candidate
///
/// Returns `None` when there are no valid words.
#[must_use]
pub fn breakdown<S: AsRef<str>>(valid_words: &[S], pangrams: &[S]) -> Option<QualityBreakdown> {
    if valid_words.is_empty() {
        return None;
    }

    let count = valid_words.len();
    let lengths: Vec<usize> = valid_words.iter().map(|w| w.as_ref().len()).collect();
    let distinct_lengths = lengths.iter().copied().collect::<FxHashSet<_>>().len();
    let four_letter = lengths.iter().filter(|&&len| len == 4).count();

    Some(QualityBreakdown {
        word_count: word_count_score(count),
        length_variety: (distinct_lengths as f64 / EXPECTED_LENGTH_VARIETY).min(1.0),
        four_letter: (four_letter as f64 / count as f64 * FOUR_LETTER_SCALE).min(1.0),
        pangram: if pangrams.is_empty() { 0.0 } else { 1.0 },
        distribution: distribution_score(valid_words),
    })
}

/// Quality of a candidate puzzle, 0.0 when there are no valid words
///
/// # Examples
/// ```
/// use spelling_bee::generator::evaluate;
///
/// let empty: Vec<String> = Vec::new();
/// assert_eq!(evaluate(&empty, &empty), 0.0);
/// ```
#[must_use]
pub fn evaluate<S: AsRef<str>>(valid_words: &[S], pangrams: &[S]) -> f64 {
    breakdown(valid_words, pangrams).map_or(0.0, |b| b.total())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_list_scores_zero() {
        let empty: Vec<&str> = Vec::new();
        assert!(evaluate(&empty, &empty).abs() < f64::EPSILON);
        assert!(breakdown(&empty, &empty).is_none());
    }

    #[test]
    fn word_count_band() {
        assert!((word_count_score(15) - 1.0).abs() < f64::EPSILON);
        assert!((word_count_score(80) - 1.0).abs() < f64::EPSILON);
        // 100 words: 1 - |100 - 55| / 100
        assert!((word_count_score(100) - 0.55).abs() < 1e-12);
        // 10 words: 1 - 45 / 100
        assert!((word_count_score(10) - 0.55).abs() < 1e-12);
        assert!((word_count_score(400) - WORD_COUNT_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn balanced_usage_scores_full_distribution() {
        let words = ["abcd", "abcd"];
        assert!((distribution_score(&words) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn skewed_usage_lowers_distribution() {
        let balanced = ["abcd", "dcba"];
        let skewed = ["aaab", "aaac"];
        assert!(distribution_score(&skewed) < distribution_score(&balanced));
    }

    #[test]
    fn pangram_presence_is_binary() {
        let words = ["gate", "gateleg"];
        let none: [&str; 0] = [];
        let with = breakdown(&words, &["gateleg"]).unwrap();
        let without = breakdown(&words, &none).unwrap();

        assert!((with.pangram - 1.0).abs() < f64::EPSILON);
        assert!(without.pangram.abs() < f64::EPSILON);
        assert!((with.total() - without.total() - PANGRAM_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn four_letter_ratio_is_capped() {
        let words = ["date", "fate", "gate", "late"];
        let none: [&str; 0] = [];
        let b = breakdown(&words, &none).unwrap();
        assert!((b.four_letter - 1.0).abs() < f64::EPSILON);
        assert!((b.length_variety - 1.0 / EXPECTED_LENGTH_VARIETY).abs() < 1e-12);
    }

    #[test]
    fn weights_sum_to_one() {
        let perfect = QualityBreakdown {
            word_count: 1.0,
            length_variety: 1.0,
            four_letter: 1.0,
            pangram: 1.0,
            distribution: 1.0,
        };
        assert!((perfect.total() - 1.0).abs() < 1e-12);
    }
}
