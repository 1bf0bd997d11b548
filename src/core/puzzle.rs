//! Puzzle records and word scoring
//!
//! A `Puzzle` is the serialized unit of a puzzle set. Everything except
//! `live_date` and `last_reviewed` is fixed when the puzzle is built.

use super::letters::{LetterSet, LetterSetError};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Bonus points added to a pangram's length score
pub const PANGRAM_BONUS: u32 = 10;

/// Bonus points added to a puzzle's total when bingo is possible
pub const BINGO_BONUS: u32 = 10;

/// Score a single word
///
/// Four-letter words are worth 1 point, longer words one point per letter.
/// Pangrams earn `PANGRAM_BONUS` on top.
///
/// # Examples
/// ```
/// use spelling_bee::core::word_score;
///
/// assert_eq!(word_score("gate", false), 1);
/// assert_eq!(word_score("gates", false), 5);
/// assert_eq!(word_score("gatefold", true), 18);
/// ```
#[must_use]
pub fn word_score(word: &str, is_pangram: bool) -> u32 {
    let length = word.chars().count() as u32;
    let base = if length == 4 { 1 } else { length };
    if is_pangram { base + PANGRAM_BONUS } else { base }
}

/// Total puzzle score: every word's score plus the bingo bonus
#[must_use]
pub fn total_score<S: AsRef<str>>(valid_words: &[S], pangrams: &[S], bingo_possible: bool) -> u32 {
    let pangram_set: FxHashSet<&str> = pangrams.iter().map(S::as_ref).collect();
    let words: u32 = valid_words
        .iter()
        .map(S::as_ref)
        .map(|word| word_score(word, pangram_set.contains(word)))
        .sum();
    if bingo_possible {
        words + BINGO_BONUS
    } else {
        words
    }
}

/// A single Spelling Bee puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<String>,
    #[serde(default)]
    pub live_date: Option<NaiveDate>,
    pub center_letter: char,
    pub outside_letters: Vec<char>,
    pub pangrams: Vec<String>,
    pub bingo_possible: bool,
    pub total_score: u32,
    pub total_words: usize,
    pub valid_words: Vec<String>,
}

impl Puzzle {
    /// Build a puzzle from its letters and solved word list
    ///
    /// `valid_words` is sorted and deduplicated; the total score is derived
    /// from the words, pangrams and bingo flag.
    #[must_use]
    pub fn new(
        id: String,
        letters: &LetterSet,
        mut valid_words: Vec<String>,
        pangrams: Vec<String>,
        bingo_possible: bool,
    ) -> Self {
        valid_words.sort_unstable();
        valid_words.dedup();
        let total_score = total_score(&valid_words, &pangrams, bingo_possible);

        Self {
            id,
            last_reviewed: None,
            live_date: None,
            center_letter: letters.center_char(),
            outside_letters: letters.outside_chars(),
            pangrams,
            bingo_possible,
            total_score,
            total_words: valid_words.len(),
            valid_words,
        }
    }

    /// Reconstruct the letter set from the stored letters
    ///
    /// # Errors
    /// Returns `LetterSetError` if the stored letters are not seven distinct
    /// lowercase letters (e.g. a hand-edited file).
    pub fn letter_set(&self) -> Result<LetterSet, LetterSetError> {
        LetterSet::from_chars(self.center_letter, &self.outside_letters)
    }

    /// Recompute the total score from the stored words and flags
    #[must_use]
    pub fn recomputed_score(&self) -> u32 {
        total_score(&self.valid_words, &self.pangrams, self.bingo_possible)
    }
}
