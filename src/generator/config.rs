//! Generation tunables
//!
//! Every threshold the search loop and the batch filter consult lives here so
//! a run can be reproduced from its config alone.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Inclusive bounds on the length of a valid word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLengthRange {
    pub min: usize,
    pub max: usize,
}

impl WordLengthRange {
    #[inline]
    #[must_use]
    pub const fn contains(self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

impl Default for WordLengthRange {
    fn default() -> Self {
        Self { min: 4, max: 16 }
    }
}

/// Configuration for puzzle and batch generation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Length bounds for valid words
    pub word_lengths: WordLengthRange,
    /// Candidates with fewer valid words are rejected
    pub min_word_count: usize,
    /// Candidates with more valid words are rejected
    pub max_word_count: usize,
    /// Caller-supplied cap on valid words; the tighter of this and
    /// `max_word_count` applies
    pub max_words: usize,
    /// Inclusive pangram-count band
    pub min_pangrams: usize,
    pub max_pangrams: usize,
    /// Words of at most `short_word_length` letters count as starter words
    pub short_word_length: usize,
    pub min_short_words: usize,
    /// Every letter must appear in at least this many valid words
    pub min_letter_utility: usize,
    /// Target quality; a candidate scoring `early_accept_ratio` of this ends the search
    pub min_quality: f64,
    pub early_accept_ratio: f64,
    /// Attempts per puzzle search
    pub search_attempts: usize,
    /// Attempts of the biased letter heuristic before the random fallback
    pub selector_attempts: usize,
    /// Number of recent letter sets checked for similarity
    pub window_size: usize,
    /// Most letters a new set may share with any set in the window
    pub max_shared_letters: usize,
    /// Searches per batch slot before forcing an acceptance
    pub diversity_attempts: usize,
    /// After this many similar candidates the next one is accepted regardless
    pub relax_after: usize,
    /// Seed for a reproducible run; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_lengths: WordLengthRange::default(),
            min_word_count: 20,
            max_word_count: 150,
            max_words: 400,
            min_pangrams: 2,
            max_pangrams: 6,
            short_word_length: 5,
            min_short_words: 5,
            min_letter_utility: 3,
            min_quality: 0.65,
            early_accept_ratio: 0.8,
            search_attempts: 30,
            selector_attempts: 10,
            window_size: 5,
            max_shared_letters: 4,
            diversity_attempts: 10,
            relax_after: 5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Effective upper bound on valid words per puzzle
    #[inline]
    #[must_use]
    pub fn word_count_cap(&self) -> usize {
        self.max_word_count.min(self.max_words)
    }

    /// Quality at which the search stops early
    #[inline]
    #[must_use]
    pub fn acceptance_threshold(&self) -> f64 {
        self.min_quality * self.early_accept_ratio
    }

    /// Random source for a run, seeded from `seed` when set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn word_length_range_is_inclusive() {
        let range = WordLengthRange::default();
        assert!(!range.contains(3));
        assert!(range.contains(4));
        assert!(range.contains(16));
        assert!(!range.contains(17));
    }

    #[test]
    fn word_count_cap_takes_tighter_bound() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.word_count_cap(), 150);

        config.max_words = 60;
        assert_eq!(config.word_count_cap(), 60);
    }

    #[test]
    fn acceptance_threshold_scales_min_quality() {
        let config = GeneratorConfig {
            min_quality: 0.5,
            ..GeneratorConfig::default()
        };
        assert!((config.acceptance_threshold() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GeneratorConfig {
            seed: Some(42),
            ..GeneratorConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
