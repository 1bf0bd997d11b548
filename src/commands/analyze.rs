//! Puzzle set analysis command
//!
//! Summarizes a generated set and checks that puzzle size does not trend
//! with the calendar.

use crate::core::Puzzle;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Summary statistics for a puzzle set
pub struct PuzzleSetStatistics {
    pub total_puzzles: usize,
    /// Number of puzzles per pangram count
    pub pangram_histogram: BTreeMap<usize, usize>,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub average_score: f64,
    pub bingo_count: usize,
    /// Most common center letters, most frequent first
    pub top_center_letters: Vec<(char, usize)>,
    /// Most common letters across all boards, most frequent first
    pub top_letters: Vec<(char, usize)>,
}

/// Correlation of puzzle properties with calendar position
///
/// Values near zero mean the property does not trend over time.
pub struct RandomizationCheck {
    pub word_correlation: f64,
    pub score_correlation: f64,
    pub pangram_correlation: f64,
}

/// Count occurrences, sorted by count descending then letter
fn most_common(letters: impl Iterator<Item = char>, limit: usize) -> Vec<(char, usize)> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }

    let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Compute statistics for a puzzle set
///
/// Returns `None` for an empty set.
#[must_use]
pub fn analyze_puzzles(puzzles: &[Puzzle]) -> Option<PuzzleSetStatistics> {
    let count = puzzles.len();
    if count == 0 {
        return None;
    }

    let mut pangram_histogram = BTreeMap::new();
    for puzzle in puzzles {
        *pangram_histogram.entry(puzzle.pangrams.len()).or_insert(0) += 1;
    }

    let words = puzzles.iter().map(|p| p.total_words);
    let scores = puzzles.iter().map(|p| p.total_score);

    Some(PuzzleSetStatistics {
        total_puzzles: count,
        pangram_histogram,
        min_words: words.clone().min().unwrap_or(0),
        max_words: words.clone().max().unwrap_or(0),
        average_words: words.sum::<usize>() as f64 / count as f64,
        min_score: scores.clone().min().unwrap_or(0),
        max_score: scores.clone().max().unwrap_or(0),
        average_score: scores.map(f64::from).sum::<f64>() / count as f64,
        bingo_count: puzzles.iter().filter(|p| p.bingo_possible).count(),
        top_center_letters: most_common(puzzles.iter().map(|p| p.center_letter), 5),
        top_letters: most_common(
            puzzles
                .iter()
                .flat_map(|p| std::iter::once(p.center_letter).chain(p.outside_letters.iter().copied())),
            10,
        ),
    })
}

/// Pearson correlation coefficient of two equally long series
///
/// Returns 0.0 when fewer than two points are given or either series is
/// constant, where the correlation is undefined.
///
/// # Examples
/// ```
/// use spelling_bee::commands::analyze::pearson_correlation;
///
/// let r = pearson_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }

    let mean = |values: &[f64]| values[..n].iter().sum::<f64>() / n as f64;
    let (mean_x, mean_y) = (mean(xs), mean(ys));

    let (mut covariance, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys).take(n) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    covariance / (var_x * var_y).sqrt()
}

/// Correlate words, score and pangram count with calendar position
///
/// Puzzles are ordered by live date; undated puzzles sort first.
#[must_use]
pub fn check_randomization(puzzles: &[Puzzle]) -> RandomizationCheck {
    let mut ordered: Vec<&Puzzle> = puzzles.iter().collect();
    ordered.sort_by_key(|p| p.live_date);

    let days: Vec<f64> = (0..ordered.len()).map(|d| d as f64).collect();
    let series = |value: fn(&Puzzle) -> f64| -> Vec<f64> { ordered.iter().map(|p| value(p)).collect() };

    RandomizationCheck {
        word_correlation: pearson_correlation(&days, &series(|p| p.total_words as f64)),
        score_correlation: pearson_correlation(&days, &series(|p| f64::from(p.total_score))),
        pangram_correlation: pearson_correlation(&days, &series(|p| p.pangrams.len() as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use chrono::{Days, NaiveDate};

    fn puzzle(center: u8, outside: &[u8; 6], words: &[&str], pangrams: &[&str], day: u64) -> Puzzle {
        let letters = LetterSet::new(center, *outside).unwrap();
        let mut p = Puzzle::new(
            format!("p{day}"),
            &letters,
            words.iter().map(ToString::to_string).collect(),
            pangrams.iter().map(ToString::to_string).collect(),
            false,
        );
        p.live_date = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(day)));
        p
    }

    #[test]
    fn statistics_of_small_set() {
        let puzzles = vec![
            puzzle(b'a', b"tedfgl", &["date", "fate", "gate"], &[], 0),
            puzzle(b'a', b"rstnie", &["rain", "stain", "strain"], &["strain"], 1),
            puzzle(b'e', b"rstnia", &["rest"], &[], 2),
        ];

        let stats = analyze_puzzles(&puzzles).unwrap();
        assert_eq!(stats.total_puzzles, 3);
        assert_eq!(stats.pangram_histogram.get(&0), Some(&2));
        assert_eq!(stats.pangram_histogram.get(&1), Some(&1));
        assert_eq!(stats.min_words, 1);
        assert_eq!(stats.max_words, 3);
        assert!((stats.average_words - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.min_score, 1);
        assert_eq!(stats.bingo_count, 0);
        assert_eq!(stats.top_center_letters[0], ('a', 2));
        // a and e are on all three boards
        assert_eq!(stats.top_letters[0], ('a', 3));
        assert_eq!(stats.top_letters[1], ('e', 3));
    }

    #[test]
    fn statistics_of_empty_set() {
        assert!(analyze_puzzles(&[]).is_none());
    }

    #[test]
    fn pearson_detects_trends() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert!((pearson_correlation(&xs, &[3.0, 2.0, 1.0, 0.0]) + 1.0).abs() < 1e-12);
        assert!(pearson_correlation(&xs, &[5.0, 5.0, 5.0, 5.0]).abs() < f64::EPSILON);
        assert!(pearson_correlation(&[1.0], &[2.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn randomization_orders_by_date() {
        // Stored out of order; by date the word count grows every day
        let puzzles = vec![
            puzzle(b'a', b"tedfgl", &["date", "fate", "gate"], &[], 2),
            puzzle(b'a', b"tedfgl", &["date"], &[], 0),
            puzzle(b'a', b"tedfgl", &["date", "fate"], &[], 1),
        ];

        let check = check_randomization(&puzzles);
        assert!((check.word_correlation - 1.0).abs() < 1e-12);
        assert!(check.pangram_correlation.abs() < f64::EPSILON);
    }
}
