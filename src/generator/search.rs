//! Puzzle search loop
//!
//! Draws letter sets, solves them, filters out boards that break the game
//! balance rules and keeps the best-scoring survivor. The first candidate
//! that clears the acceptance threshold ends the search early.

use super::config::GeneratorConfig;
use super::error::GenerationError;
use super::quality::evaluate;
use super::selector::select_letters;
use super::validator::{Solution, alphabet_index, board_letters, letter_coverage, solve};
use crate::core::{LetterSet, Puzzle};
use crate::dictionary::Dictionary;
use log::{debug, info};
use rand::Rng;
use std::fmt;

/// Reason a candidate board failed the structural filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooFewWords(usize),
    TooManyWords(usize),
    PangramCount(usize),
    TooFewShortWords(usize),
    UnderusedLetter { letter: char, words: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewWords(count) => write!(f, "only {count} valid words"),
            Self::TooManyWords(count) => write!(f, "{count} valid words is too many"),
            Self::PangramCount(count) => write!(f, "{count} pangrams"),
            Self::TooFewShortWords(count) => write!(f, "only {count} short starter words"),
            Self::UnderusedLetter { letter, words } => {
                write!(f, "letter '{letter}' appears in only {words} words")
            }
        }
    }
}

/// Check the game-balance rules a board must satisfy before it is scored
///
/// # Errors
/// Returns the first `Rejection` the board triggers.
pub fn check_structure(
    solution: &Solution,
    letters: &LetterSet,
    config: &GeneratorConfig,
) -> Result<(), Rejection> {
    let count = solution.valid_words.len();
    if count < config.min_word_count {
        return Err(Rejection::TooFewWords(count));
    }
    if count > config.word_count_cap() {
        return Err(Rejection::TooManyWords(count));
    }

    let pangrams = solution.pangrams.len();
    if !(config.min_pangrams..=config.max_pangrams).contains(&pangrams) {
        return Err(Rejection::PangramCount(pangrams));
    }

    let short_words = solution
        .valid_words
        .iter()
        .filter(|word| word.len() <= config.short_word_length)
        .count();
    if short_words < config.min_short_words {
        return Err(Rejection::TooFewShortWords(short_words));
    }

    let coverage = letter_coverage(&solution.valid_words);
    if let Some((letter, words)) = board_letters(letters)
        .map(|letter| (letter, coverage[alphabet_index(letter)]))
        .find(|&(_, words)| words < config.min_letter_utility)
    {
        return Err(Rejection::UnderusedLetter {
            letter: char::from(letter),
            words,
        });
    }

    Ok(())
}

/// A board that passed the structural filters, with its quality
#[derive(Debug, Clone)]
pub struct Candidate {
    pub letters: LetterSet,
    pub solution: Solution,
    pub quality: f64,
}

/// One search attempt: draw a board, solve it, filter it, score it
///
/// # Errors
/// Returns the `Rejection` when the board fails the structural filters.
pub fn attempt<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Candidate, Rejection> {
    let letters = select_letters(rng, config.selector_attempts);
    let solution = solve(dictionary, &letters, config.word_lengths);
    check_structure(&solution, &letters, config)?;

    let quality = evaluate(&solution.valid_words, &solution.pangrams);
    Ok(Candidate {
        letters,
        solution,
        quality,
    })
}

/// Keep whichever candidate scores higher; ties keep the incumbent
#[must_use]
pub fn keep_better(best: Option<Candidate>, candidate: Candidate) -> Option<Candidate> {
    match best {
        Some(current) if current.quality >= candidate.quality => Some(current),
        _ => Some(candidate),
    }
}

/// States of the search loop
#[derive(Debug)]
enum SearchState {
    Searching {
        attempts: usize,
        best: Option<Candidate>,
    },
    Accepted {
        candidate: Candidate,
        attempts: usize,
    },
    Exhausted {
        best: Option<Candidate>,
        attempts: usize,
    },
}

/// Result of a finished search
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub puzzle: Puzzle,
    pub letters: LetterSet,
    pub quality: f64,
    pub attempts: usize,
    /// True if the search stopped on the acceptance threshold rather than
    /// returning the best of an exhausted budget
    pub early_accept: bool,
}

/// Short puzzle id: the first 8 hex digits of a random v4 UUID
pub fn new_puzzle_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    let mut id = uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .simple()
        .to_string();
    id.truncate(8);
    id
}

fn into_report<R: Rng + ?Sized>(
    candidate: Candidate,
    attempts: usize,
    early_accept: bool,
    rng: &mut R,
) -> SearchReport {
    let Candidate {
        letters,
        solution,
        quality,
    } = candidate;
    let puzzle = Puzzle::new(
        new_puzzle_id(rng),
        &letters,
        solution.valid_words,
        solution.pangrams,
        solution.bingo_possible,
    );

    SearchReport {
        puzzle,
        letters,
        quality,
        attempts,
        early_accept,
    }
}

/// Run the bounded search for one puzzle
///
/// # Errors
/// Returns `GenerationError::Exhausted` if no board passes the structural
/// filters within `config.search_attempts` attempts.
pub fn search<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SearchReport, GenerationError> {
    let threshold = config.acceptance_threshold();
    let mut state = SearchState::Searching {
        attempts: 0,
        best: None,
    };

    let finished = loop {
        state = match state {
            SearchState::Searching { attempts, best } if attempts >= config.search_attempts => {
                SearchState::Exhausted { best, attempts }
            }
            SearchState::Searching { attempts, best } => {
                let attempts = attempts + 1;
                match attempt(dictionary, config, rng) {
                    Ok(candidate) if candidate.quality >= threshold => SearchState::Accepted {
                        candidate,
                        attempts,
                    },
                    Ok(candidate) => {
                        debug!(
                            "Attempt {attempts}: {} scored {:.3}, below {threshold:.3}",
                            candidate.letters, candidate.quality
                        );
                        SearchState::Searching {
                            attempts,
                            best: keep_better(best, candidate),
                        }
                    }
                    Err(rejection) => {
                        debug!("Attempt {attempts}: rejected, {rejection}");
                        SearchState::Searching { attempts, best }
                    }
                }
            }
            finished => break finished,
        };
    };

    match finished {
        SearchState::Accepted {
            candidate,
            attempts,
        } => {
            info!(
                "Accepted {} after {attempts} attempts (quality {:.3})",
                candidate.letters, candidate.quality
            );
            Ok(into_report(candidate, attempts, true, rng))
        }
        SearchState::Exhausted {
            best: Some(candidate),
            attempts,
        } => {
            info!(
                "Budget exhausted, keeping best {} (quality {:.3})",
                candidate.letters, candidate.quality
            );
            Ok(into_report(candidate, attempts, false, rng))
        }
        SearchState::Exhausted { best: None, attempts }
        | SearchState::Searching { attempts, .. } => Err(GenerationError::Exhausted { attempts }),
    }
}

/// Generate one puzzle, without a live date
///
/// # Errors
/// Returns `GenerationError::Exhausted` if the search finds no acceptable board.
pub fn generate_puzzle<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Puzzle, GenerationError> {
    search(dictionary, config, rng).map(|report| report.puzzle)
}
