//! Batch generation command
//!
//! Generates a full puzzle set with a progress bar and tallies how each slot
//! was accepted.

use crate::core::Puzzle;
use crate::dictionary::Dictionary;
use crate::generator::{
    Acceptance, BatchEntry, BatchGenerator, GenerationError, GeneratorConfig, finalize_batch,
};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a generation run
pub struct GenerateConfig {
    pub count: usize,
    pub start_date: NaiveDate,
    pub generator: GeneratorConfig,
}

/// Result of a generation run
pub struct GenerateResult {
    pub puzzles: Vec<Puzzle>,
    /// Slots accepted despite overlapping a recent letter set
    pub relaxed: usize,
    /// Slots filled without a similarity check after every attempt failed
    pub forced: usize,
    pub duration: Duration,
}

impl GenerateResult {
    #[must_use]
    pub fn average_words(&self) -> f64 {
        self.average(|p| p.total_words as f64)
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        self.average(|p| f64::from(p.total_score))
    }

    #[must_use]
    pub fn average_pangrams(&self) -> f64 {
        self.average(|p| p.pangrams.len() as f64)
    }

    fn average(&self, value: impl Fn(&Puzzle) -> f64) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        self.puzzles.iter().map(value).sum::<f64>() / self.puzzles.len() as f64
    }
}

/// Generate `config.count` puzzles with dates from `config.start_date`
///
/// # Errors
///
/// Returns `GenerationError` if a slot cannot be filled even by a forced
/// search, or if the live dates run out of range.
pub fn run_generate(
    dictionary: &Dictionary,
    config: &GenerateConfig,
) -> Result<GenerateResult, GenerationError> {
    let start = Instant::now();
    let mut rng = config.generator.rng();
    let mut generator = BatchGenerator::new(dictionary, &config.generator);

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );

    let mut entries: Vec<BatchEntry> = Vec::with_capacity(config.count);
    let mut relaxed = 0;
    let mut forced = 0;

    for _ in 0..config.count {
        let entry = match generator.next_entry(&mut rng) {
            Ok(entry) => entry,
            Err(err) => {
                pb.abandon_with_message("Failed");
                return Err(err);
            }
        };

        match entry.acceptance {
            Acceptance::Diverse => {}
            Acceptance::Relaxed => relaxed += 1,
            Acceptance::Forced => forced += 1,
        }
        pb.set_message(format!("{} ({} words)", entry.puzzle.id, entry.puzzle.total_words));
        entries.push(entry);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let puzzles = finalize_batch(entries, config.start_date, &mut rng)?;

    Ok(GenerateResult {
        puzzles,
        relaxed,
        forced,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::search::tests::{relaxed_config, rich_dictionary};

    fn config(count: usize) -> GenerateConfig {
        GenerateConfig {
            count,
            start_date: NaiveDate::from_ymd_opt(2025, 2, 26).unwrap(),
            generator: GeneratorConfig {
                seed: Some(61),
                ..relaxed_config()
            },
        }
    }

    #[test]
    fn generate_runs() {
        let dictionary = rich_dictionary();
        let result = run_generate(&dictionary, &config(4)).unwrap();

        assert_eq!(result.puzzles.len(), 4);
        assert!(result.relaxed + result.forced <= 4);
        assert!(result.average_words() > 0.0);
        assert!(result.puzzles.iter().all(|p| p.live_date.is_some()));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dictionary = rich_dictionary();
        let first = run_generate(&dictionary, &config(3)).unwrap();
        let second = run_generate(&dictionary, &config(3)).unwrap();
        assert_eq!(first.puzzles, second.puzzles);
    }

    #[test]
    fn generate_fails_on_empty_dictionary() {
        let mut cfg = config(2);
        cfg.generator = GeneratorConfig {
            search_attempts: 1,
            diversity_attempts: 1,
            ..GeneratorConfig::default()
        };
        let result = run_generate(&Dictionary::default(), &cfg);
        assert!(matches!(result, Err(GenerationError::Exhausted { .. })));
    }

    #[test]
    fn averages_of_empty_result_are_zero() {
        let result = GenerateResult {
            puzzles: Vec::new(),
            relaxed: 0,
            forced: 0,
            duration: Duration::ZERO,
        };
        assert!(result.average_words().abs() < f64::EPSILON);
        assert!(result.average_score().abs() < f64::EPSILON);
        assert!(result.average_pangrams().abs() < f64::EPSILON);
    }
}
