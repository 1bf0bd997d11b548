//! Letter set selection
//!
//! Builds a candidate board out of a few frequent vowels, one common bigram,
//! one common word ending and the most frequent common consonants. Each
//! attempt is a pure function of the random source, so a seeded run always
//! draws the same boards.

use crate::core::{ALPHABET, LetterMask, LetterSet, OUTSIDE_LETTERS};
use log::warn;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// English letter frequencies in percent, indexed by `letter - b'a'`
pub const LETTER_FREQUENCIES: [f64; 26] = [
    8.12, 1.49, 2.71, 4.32, 12.02, 2.30, 2.03, 5.92, 7.31, 0.10, 0.69, 3.98, 2.61, // a-m
    6.95, 7.68, 1.82, 0.11, 6.02, 6.28, 9.10, 2.88, 1.11, 2.09, 0.17, 2.11, 0.07, // n-z
];

const VOWELS: &[u8] = b"aeiou";
const COMMON_CONSONANTS: &[u8] = b"rstlndhc";
const COMMON_PAIRS: &[&str] = &["th", "st", "ch", "sh", "tr", "pl", "cl"];
const COMMON_ENDINGS: &[&str] = &["ing", "er", "ed", "es"];

/// Frequency of a lowercase letter in English text
#[inline]
#[must_use]
pub fn letter_frequency(letter: u8) -> f64 {
    LETTER_FREQUENCIES[usize::from(letter - b'a')]
}

/// Pick the most frequent letter from `pool` that is not yet used
fn most_frequent_unused(pool: &[u8], used: LetterMask) -> Option<u8> {
    pool.iter()
        .copied()
        .filter(|&letter| !used.contains(letter))
        .max_by(|&a, &b| letter_frequency(a).total_cmp(&letter_frequency(b)))
}

/// Outside letters collected so far in one selection attempt
#[derive(Debug, Default)]
struct Draft {
    outside: Vec<u8>,
    used: LetterMask,
}

impl Draft {
    fn push(&mut self, letter: u8) {
        self.outside.push(letter);
        self.used.insert(letter);
    }

    /// Add the unused letters of `group` if they all fit in the remaining slots
    fn extend_if_fits(&mut self, group: &[u8]) -> bool {
        let fresh = LetterMask::from_letters(group.iter().copied())
            .letters()
            .filter(|&letter| !self.used.contains(letter))
            .collect::<Vec<_>>();

        if fresh.is_empty() || self.outside.len() + fresh.len() > OUTSIDE_LETTERS {
            return false;
        }
        for letter in fresh {
            self.push(letter);
        }
        true
    }

    /// Fill remaining slots with common consonants, then any frequent letter
    fn fill(&mut self) {
        while self.outside.len() < OUTSIDE_LETTERS {
            let Some(letter) = most_frequent_unused(COMMON_CONSONANTS, self.used)
                .or_else(|| most_frequent_unused(ALPHABET, self.used))
            else {
                break;
            };
            self.push(letter);
        }
    }

    /// Most frequent unused vowel or common consonant, else any unused letter
    fn pick_center(&self) -> Option<u8> {
        let preferred: Vec<u8> = VOWELS.iter().chain(COMMON_CONSONANTS).copied().collect();
        most_frequent_unused(&preferred, self.used)
            .or_else(|| most_frequent_unused(ALPHABET, self.used))
    }
}

/// One attempt of the biased selection heuristic
///
/// Returns `None` when the attempt cannot produce seven distinct letters.
pub fn attempt_letters<R: Rng + ?Sized>(rng: &mut R) -> Option<LetterSet> {
    let mut draft = Draft::default();

    let vowel_count = rng.random_range(2..=3);
    let vowels: Vec<u8> = VOWELS
        .choose_multiple_weighted(rng, vowel_count, |&v| letter_frequency(v))
        .ok()?
        .copied()
        .collect();
    for vowel in vowels {
        draft.push(vowel);
    }

    let pair = COMMON_PAIRS.choose(rng)?;
    draft.extend_if_fits(pair.as_bytes());

    // Keep room for at least one consonant after the ending
    if draft.outside.len() < OUTSIDE_LETTERS - 1 {
        let ending = COMMON_ENDINGS.choose(rng)?;
        draft.extend_if_fits(ending.as_bytes());
    }

    draft.fill();
    let center = draft.pick_center()?;
    let outside: [u8; OUTSIDE_LETTERS] = draft.outside.try_into().ok()?;
    LetterSet::new(center, outside).ok()
}

/// Seven letters drawn uniformly from the alphabet, one of them the center
///
/// Always succeeds: the alphabet has more than seven letters.
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R) -> LetterSet {
    let mut alphabet = *ALPHABET;
    alphabet.shuffle(rng);

    let mut outside = [0u8; OUTSIDE_LETTERS];
    outside.copy_from_slice(&alphabet[1..=OUTSIDE_LETTERS]);
    LetterSet::from_distinct(alphabet[0], outside)
}

/// Choose a letter set, falling back to uniform random letters if the
/// heuristic fails `attempts` times in a row
pub fn select_letters<R: Rng + ?Sized>(rng: &mut R, attempts: usize) -> LetterSet {
    for _ in 0..attempts {
        if let Some(letters) = attempt_letters(rng) {
            return letters;
        }
    }

    warn!("Letter heuristic failed {attempts} times, using random letters");
    random_letters(rng)
}
