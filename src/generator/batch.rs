//! Batch generation with letter-set diversity
//!
//! Puzzles are generated one at a time. Each new letter set is compared with
//! a sliding window of recently accepted sets and retried when it shares too
//! many letters with any of them. Once the batch is complete it is shuffled
//! and assigned consecutive live dates.

use super::config::GeneratorConfig;
use super::error::GenerationError;
use super::search::search;
use crate::core::{LetterMask, Puzzle};
use crate::dictionary::Dictionary;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Sliding window of recently accepted letter sets
#[derive(Debug, Clone)]
pub struct DiversityWindow {
    recent: VecDeque<LetterMask>,
    capacity: usize,
    max_shared: usize,
}

impl DiversityWindow {
    #[must_use]
    pub fn new(capacity: usize, max_shared: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity + 1),
            capacity,
            max_shared,
        }
    }

    /// True if `letters` shares at most `max_shared` letters with every set
    /// in the window
    #[must_use]
    pub fn is_diverse(&self, letters: LetterMask) -> bool {
        self.recent
            .iter()
            .all(|&previous| previous.shared_with(letters) <= self.max_shared)
    }

    /// Record an accepted set, evicting the oldest beyond capacity
    pub fn push(&mut self, letters: LetterMask) {
        self.recent.push_back(letters);
        while self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

/// How a puzzle made it into the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Passed the similarity check
    Diverse,
    /// Accepted despite similarity after too many similar candidates
    Relaxed,
    /// Generated after every slot attempt failed, without a similarity check
    Forced,
}

/// A puzzle accepted into the batch, before dates are assigned
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub puzzle: Puzzle,
    pub letters: LetterMask,
    pub acceptance: Acceptance,
    /// Searches spent on the slot, including the accepted one
    pub attempts: usize,
}

/// Drives generation of a batch one slot at a time
pub struct BatchGenerator<'a> {
    dictionary: &'a Dictionary,
    config: &'a GeneratorConfig,
    window: DiversityWindow,
}

impl<'a> BatchGenerator<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: &'a GeneratorConfig) -> Self {
        Self::with_window(
            dictionary,
            config,
            DiversityWindow::new(config.window_size, config.max_shared_letters),
        )
    }

    /// Continue from an existing window, e.g. the tail of a previous batch
    #[must_use]
    pub fn with_window(
        dictionary: &'a Dictionary,
        config: &'a GeneratorConfig,
        window: DiversityWindow,
    ) -> Self {
        Self {
            dictionary,
            config,
            window,
        }
    }

    #[must_use]
    pub const fn window(&self) -> &DiversityWindow {
        &self.window
    }

    /// Generate the next puzzle of the batch
    ///
    /// Failed searches inside the slot budget count as spent attempts. The
    /// final forced search is the only one whose failure is returned.
    ///
    /// # Errors
    /// Returns `GenerationError::Exhausted` if the forced search finds nothing.
    pub fn next_entry<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<BatchEntry, GenerationError> {
        for attempt in 0..self.config.diversity_attempts {
            let report = match search(self.dictionary, self.config, rng) {
                Ok(report) => report,
                Err(err) => {
                    debug!("Slot attempt {}: {err}", attempt + 1);
                    continue;
                }
            };

            let letters = report.letters.mask();
            let acceptance = if self.window.is_diverse(letters) {
                Acceptance::Diverse
            } else if attempt >= self.config.relax_after {
                info!("Accepting {} despite overlap with recent puzzles", report.letters);
                Acceptance::Relaxed
            } else {
                debug!("Slot attempt {}: {} too similar", attempt + 1, report.letters);
                continue;
            };

            return Ok(self.accept(report.puzzle, letters, acceptance, attempt + 1));
        }

        warn!(
            "No puzzle accepted after {} attempts, forcing one",
            self.config.diversity_attempts
        );
        let report = search(self.dictionary, self.config, rng)?;
        let letters = report.letters.mask();
        let attempts = self.config.diversity_attempts + 1;
        Ok(self.accept(report.puzzle, letters, Acceptance::Forced, attempts))
    }

    fn accept(
        &mut self,
        puzzle: Puzzle,
        letters: LetterMask,
        acceptance: Acceptance,
        attempts: usize,
    ) -> BatchEntry {
        self.window.push(letters);
        BatchEntry {
            puzzle,
            letters,
            acceptance,
            attempts,
        }
    }
}

/// Assign consecutive live dates from `start` in slice order
///
/// # Errors
/// Returns `GenerationError::DateOverflow` if a date falls outside the
/// supported calendar range.
pub fn assign_live_dates(puzzles: &mut [Puzzle], start: NaiveDate) -> Result<(), GenerationError> {
    for (offset, puzzle) in puzzles.iter_mut().enumerate() {
        let date = start
            .checked_add_days(Days::new(offset as u64))
            .ok_or(GenerationError::DateOverflow { start, offset })?;
        puzzle.live_date = Some(date);
    }
    Ok(())
}

/// Shuffle a finished batch and assign live dates in the shuffled order
///
/// The shuffle keeps puzzle size and difficulty from correlating with the
/// calendar.
///
/// # Errors
/// Returns `GenerationError::DateOverflow` if the dates run out of range.
pub fn finalize_batch<R: Rng + ?Sized>(
    entries: Vec<BatchEntry>,
    start: NaiveDate,
    rng: &mut R,
) -> Result<Vec<Puzzle>, GenerationError> {
    let mut puzzles: Vec<Puzzle> = entries.into_iter().map(|entry| entry.puzzle).collect();
    puzzles.shuffle(rng);
    assign_live_dates(&mut puzzles, start)?;
    Ok(puzzles)
}

/// Generate `count` diverse puzzles with consecutive live dates from `start`
///
/// # Errors
/// Returns `GenerationError` if a slot's forced search fails or dates overflow.
pub fn generate_batch<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    count: usize,
    config: &GeneratorConfig,
    start: NaiveDate,
    rng: &mut R,
) -> Result<Vec<Puzzle>, GenerationError> {
    let mut generator = BatchGenerator::new(dictionary, config);
    let entries = (0..count)
        .map(|_| generator.next_entry(rng))
        .collect::<Result<Vec<_>, _>>()?;
    finalize_batch(entries, start, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::generator::search::tests::{relaxed_config, rich_dictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn mask(center: u8, outside: &[u8; 6]) -> LetterMask {
        LetterSet::new(center, *outside).unwrap().mask()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 26).unwrap()
    }

    #[test]
    fn window_checks_shared_letters() {
        let mut window = DiversityWindow::new(5, 4);
        assert!(window.is_diverse(mask(b'a', b"bcdefg")));

        window.push(mask(b'a', b"bcdefg"));
        // shares a, b, c, d
        assert!(window.is_diverse(mask(b'a', b"bcdxyz")));
        // shares a, b, c, d, e
        assert!(!window.is_diverse(mask(b'a', b"bcdexy")));
    }

    #[test]
    fn window_evicts_oldest() {
        let mut window = DiversityWindow::new(2, 4);
        window.push(mask(b'a', b"bcdefg"));
        window.push(mask(b'h', b"ijklmn"));
        window.push(mask(b'o', b"pqrstu"));

        assert_eq!(window.len(), 2);
        // The first set has been evicted
        assert!(window.is_diverse(mask(b'a', b"bcdefg")));
        assert!(!window.is_diverse(mask(b'h', b"ijklmn")));
    }

    #[test]
    fn live_dates_are_consecutive() {
        let letters = LetterSet::new(b'a', *b"bcdefg").unwrap();
        let mut puzzles: Vec<Puzzle> = (0..4)
            .map(|i| Puzzle::new(format!("p{i}"), &letters, Vec::new(), Vec::new(), false))
            .collect();

        assign_live_dates(&mut puzzles, start()).unwrap();

        let dates: Vec<NaiveDate> = puzzles.iter().filter_map(|p| p.live_date).collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], start());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::TimeDelta::days(1));
        }
    }

    #[test]
    fn live_dates_overflow_is_reported() {
        let letters = LetterSet::new(b'a', *b"bcdefg").unwrap();
        let mut puzzles: Vec<Puzzle> = (0..2)
            .map(|i| Puzzle::new(format!("p{i}"), &letters, Vec::new(), Vec::new(), false))
            .collect();

        let result = assign_live_dates(&mut puzzles, NaiveDate::MAX);
        assert_eq!(
            result,
            Err(GenerationError::DateOverflow {
                start: NaiveDate::MAX,
                offset: 1
            })
        );
    }

    #[test]
    fn batch_has_requested_size_and_dates() {
        let dictionary = rich_dictionary();
        let config = relaxed_config();
        let mut rng = StdRng::seed_from_u64(41);

        let puzzles = generate_batch(&dictionary, 6, &config, start(), &mut rng).unwrap();
        assert_eq!(puzzles.len(), 6);

        let ids: FxHashSet<&str> = puzzles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 6);

        for (offset, puzzle) in puzzles.iter().enumerate() {
            let expected = start().checked_add_days(Days::new(offset as u64));
            assert_eq!(puzzle.live_date, expected);
        }
    }

    #[test]
    fn diverse_entries_respect_window() {
        let dictionary = rich_dictionary();
        let config = relaxed_config();
        let mut rng = StdRng::seed_from_u64(43);
        let mut generator = BatchGenerator::new(&dictionary, &config);

        let mut accepted: Vec<BatchEntry> = Vec::new();
        for _ in 0..8 {
            accepted.push(generator.next_entry(&mut rng).unwrap());
        }

        for (i, entry) in accepted.iter().enumerate() {
            if entry.acceptance != Acceptance::Diverse {
                continue;
            }
            let window_start = i.saturating_sub(config.window_size);
            for previous in &accepted[window_start..i] {
                assert!(
                    previous.letters.shared_with(entry.letters) <= config.max_shared_letters
                );
            }
        }
        assert!(generator.window().len() <= config.window_size);
    }

    /// Window holding every letter, so each candidate counts as too similar
    fn saturated_window(config: &GeneratorConfig) -> DiversityWindow {
        let mut window = DiversityWindow::new(config.window_size, config.max_shared_letters);
        window.push(LetterMask::from_letters(crate::core::ALPHABET.iter().copied()));
        window
    }

    #[test]
    fn similar_sets_are_retried_until_relax_point() {
        let dictionary = rich_dictionary();
        let config = relaxed_config();
        assert_eq!(config.relax_after, 5);
        let mut rng = StdRng::seed_from_u64(71);
        let mut generator =
            BatchGenerator::with_window(&dictionary, &config, saturated_window(&config));

        let entry = generator.next_entry(&mut rng).unwrap();
        assert_eq!(entry.acceptance, Acceptance::Relaxed);
        // Attempts 0..relax_after were turned away, attempt relax_after accepted
        assert_eq!(entry.attempts, config.relax_after + 1);
    }

    #[test]
    fn relax_point_beyond_budget_forces_slot() {
        let dictionary = rich_dictionary();
        let config = GeneratorConfig {
            relax_after: 10,
            diversity_attempts: 10,
            ..relaxed_config()
        };
        let mut rng = StdRng::seed_from_u64(73);
        let mut generator =
            BatchGenerator::with_window(&dictionary, &config, saturated_window(&config));

        let entry = generator.next_entry(&mut rng).unwrap();
        assert_eq!(entry.acceptance, Acceptance::Forced);
        assert_eq!(entry.attempts, 11);
    }

    #[test]
    fn diverse_set_is_accepted_first_try() {
        let dictionary = rich_dictionary();
        let config = relaxed_config();
        let mut rng = StdRng::seed_from_u64(79);
        let mut generator = BatchGenerator::new(&dictionary, &config);

        let entry = generator.next_entry(&mut rng).unwrap();
        assert_eq!(entry.acceptance, Acceptance::Diverse);
        assert_eq!(entry.attempts, 1);
    }

    #[test]
    fn forced_acceptance_after_failed_slot() {
        let dictionary = rich_dictionary();
        let config = GeneratorConfig {
            // Every search fails inside the slot budget
            diversity_attempts: 0,
            ..relaxed_config()
        };
        let mut rng = StdRng::seed_from_u64(47);
        let mut generator = BatchGenerator::new(&dictionary, &config);

        let entry = generator.next_entry(&mut rng).unwrap();
        assert_eq!(entry.acceptance, Acceptance::Forced);
        assert_eq!(generator.window().len(), 1);
    }

    #[test]
    fn exhausted_forced_search_fails_batch() {
        let config = GeneratorConfig {
            search_attempts: 2,
            diversity_attempts: 2,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(53);

        let result = generate_batch(&Dictionary::default(), 3, &config, start(), &mut rng);
        assert_eq!(result, Err(GenerationError::Exhausted { attempts: 2 }));
    }

    #[test]
    fn zero_puzzles_is_empty_batch() {
        let mut rng = StdRng::seed_from_u64(59);
        let config = GeneratorConfig::default();
        let puzzles = generate_batch(&Dictionary::default(), 0, &config, start(), &mut rng).unwrap();
        assert!(puzzles.is_empty());
    }
}
