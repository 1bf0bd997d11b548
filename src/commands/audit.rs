//! Puzzle set audit command
//!
//! Re-checks every stored puzzle against its own letters and the set as a
//! whole against the consecutive-date rule.

use crate::core::{LetterSet, LetterSetError, Puzzle};
use crate::generator::{WordLengthRange, has_bingo, is_pangram, is_valid_word};
use chrono::{NaiveDate, TimeDelta};
use rayon::prelude::*;
use std::fmt;

/// A single broken property of a stored puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Stored letters do not form a board
    LetterSet(LetterSetError),
    /// A listed word is not valid for the board
    InvalidWord(String),
    /// Words are not sorted or contain duplicates
    UnsortedWords,
    /// A pangram is missing from the valid words
    PangramNotValid(String),
    /// A listed pangram does not use every letter
    NotAPangram(String),
    /// A valid word uses every letter but is not listed as a pangram
    MissingPangram(String),
    BingoMismatch { stored: bool, actual: bool },
    ScoreMismatch { stored: u32, actual: u32 },
    WordCountMismatch { stored: usize, actual: usize },
    MissingDate,
    /// Live date does not follow the previous puzzle's by one day
    DateGap {
        previous: NaiveDate,
        date: NaiveDate,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterSet(err) => write!(f, "bad letters: {err}"),
            Self::InvalidWord(word) => write!(f, "'{word}' is not valid for this board"),
            Self::UnsortedWords => write!(f, "valid words are not sorted and distinct"),
            Self::PangramNotValid(word) => write!(f, "pangram '{word}' is not a valid word"),
            Self::NotAPangram(word) => write!(f, "'{word}' does not use every letter"),
            Self::MissingPangram(word) => write!(f, "'{word}' is a pangram but not listed"),
            Self::BingoMismatch { stored, actual } => {
                write!(f, "bingo flag is {stored}, words give {actual}")
            }
            Self::ScoreMismatch { stored, actual } => {
                write!(f, "total score is {stored}, words give {actual}")
            }
            Self::WordCountMismatch { stored, actual } => {
                write!(f, "total words is {stored}, list has {actual}")
            }
            Self::MissingDate => write!(f, "no live date"),
            Self::DateGap { previous, date } => {
                write!(f, "live date {date} does not follow {previous}")
            }
        }
    }
}

/// Violations found for one puzzle
#[derive(Debug, Clone)]
pub struct PuzzleAudit {
    pub id: String,
    pub violations: Vec<Violation>,
}

/// Result of auditing a puzzle set
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub audited: usize,
    /// Puzzles with at least one violation, in file order
    pub failures: Vec<PuzzleAudit>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.failures.iter().map(|f| f.violations.len()).sum()
    }
}

fn check_words(puzzle: &Puzzle, letters: &LetterSet, lengths: WordLengthRange) -> Vec<Violation> {
    let mut violations: Vec<Violation> = puzzle
        .valid_words
        .iter()
        .filter(|word| !is_valid_word(word, letters, lengths))
        .map(|word| Violation::InvalidWord(word.clone()))
        .collect();

    if !puzzle.valid_words.windows(2).all(|pair| pair[0] < pair[1]) {
        violations.push(Violation::UnsortedWords);
    }

    for pangram in &puzzle.pangrams {
        if !puzzle.valid_words.contains(pangram) {
            violations.push(Violation::PangramNotValid(pangram.clone()));
        }
        if !is_pangram(pangram, letters) {
            violations.push(Violation::NotAPangram(pangram.clone()));
        }
    }

    violations.extend(
        puzzle
            .valid_words
            .iter()
            .filter(|word| is_pangram(word, letters) && !puzzle.pangrams.contains(word))
            .map(|word| Violation::MissingPangram(word.clone())),
    );

    let bingo = has_bingo(&puzzle.valid_words, letters);
    if bingo != puzzle.bingo_possible {
        violations.push(Violation::BingoMismatch {
            stored: puzzle.bingo_possible,
            actual: bingo,
        });
    }

    violations
}

/// Check the self-contained properties of one puzzle
#[must_use]
pub fn audit_puzzle(puzzle: &Puzzle, lengths: WordLengthRange) -> Vec<Violation> {
    let mut violations = match puzzle.letter_set() {
        Ok(letters) => check_words(puzzle, &letters, lengths),
        Err(err) => vec![Violation::LetterSet(err)],
    };

    let score = puzzle.recomputed_score();
    if score != puzzle.total_score {
        violations.push(Violation::ScoreMismatch {
            stored: puzzle.total_score,
            actual: score,
        });
    }

    if puzzle.total_words != puzzle.valid_words.len() {
        violations.push(Violation::WordCountMismatch {
            stored: puzzle.total_words,
            actual: puzzle.valid_words.len(),
        });
    }

    if puzzle.live_date.is_none() {
        violations.push(Violation::MissingDate);
    }

    violations
}

/// Audit every puzzle, then the date sequence in file order
///
/// Per-puzzle checks run in parallel.
#[must_use]
pub fn audit_puzzles(puzzles: &[Puzzle], lengths: WordLengthRange) -> AuditReport {
    let mut per_puzzle: Vec<Vec<Violation>> = puzzles
        .par_iter()
        .map(|puzzle| audit_puzzle(puzzle, lengths))
        .collect();

    for (index, pair) in puzzles.windows(2).enumerate() {
        let (Some(previous), Some(date)) = (pair[0].live_date, pair[1].live_date) else {
            continue;
        };
        if date - previous != TimeDelta::days(1) {
            per_puzzle[index + 1].push(Violation::DateGap { previous, date });
        }
    }

    let failures = puzzles
        .iter()
        .zip(per_puzzle)
        .filter(|(_, violations)| !violations.is_empty())
        .map(|(puzzle, violations)| PuzzleAudit {
            id: puzzle.id.clone(),
            violations,
        })
        .collect();

    AuditReport {
        audited: puzzles.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::assign_live_dates;

    fn board() -> LetterSet {
        LetterSet::new(b'a', *b"tedfgl").unwrap()
    }

    fn sound_set() -> Vec<Puzzle> {
        let words = ["date", "fate", "gate", "flagdte"].map(String::from).to_vec();
        let mut puzzles = vec![
            Puzzle::new("one".into(), &board(), words.clone(), vec!["flagdte".into()], false),
            Puzzle::new("two".into(), &board(), words, vec!["flagdte".into()], false),
        ];
        assign_live_dates(&mut puzzles, NaiveDate::from_ymd_opt(2025, 2, 26).unwrap()).unwrap();
        puzzles
    }

    #[test]
    fn sound_set_is_clean() {
        let report = audit_puzzles(&sound_set(), WordLengthRange::default());
        assert_eq!(report.audited, 2);
        assert!(report.is_clean(), "{:?}", report.failures);
    }

    #[test]
    fn detects_tampered_words_and_score() {
        let mut puzzles = sound_set();
        puzzles[0].valid_words.push("plate".into());
        puzzles[0].total_score += 3;

        let report = audit_puzzles(&puzzles, WordLengthRange::default());
        assert_eq!(report.failures.len(), 1);

        let violations = &report.failures[0].violations;
        assert!(violations.contains(&Violation::InvalidWord("plate".into())));
        assert!(violations.contains(&Violation::WordCountMismatch { stored: 4, actual: 5 }));
        assert!(
            violations
                .iter()
                .any(|v| matches!(v, Violation::ScoreMismatch { .. }))
        );
    }

    #[test]
    fn detects_pangram_problems() {
        let mut puzzles = sound_set();
        puzzles[0].pangrams = vec!["gate".into()];
        puzzles[0].total_score = puzzles[0].recomputed_score();

        let violations = audit_puzzle(&puzzles[0], WordLengthRange::default());
        assert!(violations.contains(&Violation::NotAPangram("gate".into())));
        assert!(violations.contains(&Violation::MissingPangram("flagdte".into())));
    }

    #[test]
    fn detects_bad_letters() {
        let mut puzzles = sound_set();
        puzzles[1].outside_letters.pop();

        let report = audit_puzzles(&puzzles, WordLengthRange::default());
        assert_eq!(report.failures[0].id, "two");
        assert!(matches!(
            report.failures[0].violations[0],
            Violation::LetterSet(LetterSetError::WrongOutsideCount(5))
        ));
    }

    #[test]
    fn detects_date_gaps_and_missing_dates() {
        let mut puzzles = sound_set();
        puzzles.push(puzzles[0].clone());
        puzzles[1].live_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        puzzles[2].live_date = None;

        let report = audit_puzzles(&puzzles, WordLengthRange::default());
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0].violations[0],
            Violation::DateGap { .. }
        ));
        assert_eq!(report.failures[1].violations, vec![Violation::MissingDate]);
        assert_eq!(report.violation_count(), 2);
    }
}
