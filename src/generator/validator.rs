//! Word validation against a letter set
//!
//! A word is valid when its length is in range, it contains the center letter
//! and it uses no letter outside the board.

use super::config::WordLengthRange;
use crate::core::{ALPHABET, LetterMask, LetterSet};
use crate::dictionary::Dictionary;

/// Valid words, pangrams and bingo flag for one letter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Sorted, distinct valid words
    pub valid_words: Vec<String>,
    /// Valid words that use all seven letters, in `valid_words` order
    pub pangrams: Vec<String>,
    pub bingo_possible: bool,
}

/// Check whether `word` is a valid answer for `letters`
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::generator::{WordLengthRange, is_valid_word};
///
/// let letters = LetterSet::new(b'a', *b"tedfgl").unwrap();
/// let lengths = WordLengthRange::default();
/// assert!(is_valid_word("gate", &letters, lengths));
/// assert!(!is_valid_word("plate", &letters, lengths)); // p is not on the board
/// assert!(!is_valid_word("tee", &letters, lengths)); // too short, no center
/// ```
#[must_use]
pub fn is_valid_word(word: &str, letters: &LetterSet, lengths: WordLengthRange) -> bool {
    if !lengths.contains(word.len()) {
        return false;
    }
    LetterMask::of_word(word).is_some_and(|mask| {
        mask.contains(letters.center()) && letters.mask().is_superset_of(mask)
    })
}

/// Check whether `word` uses every letter of the board at least once
///
/// Characters outside `a..=z` are ignored, so a word is a pangram whenever
/// its letters cover the board.
#[must_use]
pub fn is_pangram(word: &str, letters: &LetterSet) -> bool {
    LetterMask::covering(word).is_superset_of(letters.mask())
}

/// Check whether every board letter starts at least one of `words`
#[must_use]
pub fn has_bingo<S: AsRef<str>>(words: &[S], letters: &LetterSet) -> bool {
    let first_letters =
        LetterMask::from_letters(words.iter().filter_map(|w| w.as_ref().bytes().next()));
    first_letters.is_superset_of(letters.mask())
}

/// All valid words for `letters`, sorted
#[must_use]
pub fn find_valid_words(
    dictionary: &Dictionary,
    letters: &LetterSet,
    lengths: WordLengthRange,
) -> Vec<String> {
    let mut valid: Vec<String> = dictionary
        .words()
        .filter(|word| is_valid_word(word, letters, lengths))
        .map(str::to_string)
        .collect();
    valid.sort_unstable();
    valid
}

/// Number of words containing each letter, indexed by `letter - b'a'`
#[must_use]
pub fn letter_coverage<S: AsRef<str>>(words: &[S]) -> [usize; 26] {
    let mut coverage = [0; 26];
    for word in words {
        for letter in LetterMask::covering(word.as_ref()).letters() {
            coverage[usize::from(letter - b'a')] += 1;
        }
    }
    coverage
}

/// Occurrences of each letter across all words, indexed by `letter - b'a'`
#[must_use]
pub fn letter_occurrences<S: AsRef<str>>(words: &[S]) -> [usize; 26] {
    let mut counts = [0; 26];
    for word in words {
        for b in word.as_ref().bytes().filter(u8::is_ascii_lowercase) {
            counts[usize::from(b - b'a')] += 1;
        }
    }
    counts
}

/// Solve a board: valid words, pangrams and bingo flag
#[must_use]
pub fn solve(dictionary: &Dictionary, letters: &LetterSet, lengths: WordLengthRange) -> Solution {
    let valid_words = find_valid_words(dictionary, letters, lengths);
    let pangrams = valid_words
        .iter()
        .filter(|word| is_pangram(word, letters))
        .cloned()
        .collect();
    let bingo_possible = has_bingo(&valid_words, letters);

    Solution {
        valid_words,
        pangrams,
        bingo_possible,
    }
}

/// Lowercase letters in `letters`' board order: center first
pub(crate) fn board_letters(letters: &LetterSet) -> impl Iterator<Item = u8> + '_ {
    std::iter::once(letters.center()).chain(letters.outside().iter().copied())
}

/// Alphabet index helper shared by the scoring passes
#[inline]
pub(crate) fn alphabet_index(letter: u8) -> usize {
    debug_assert!(ALPHABET.contains(&letter));
    usize::from(letter - b'a')
}
