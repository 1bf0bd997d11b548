//! Spelling Bee Generator
//!
//! Generates balanced Spelling Bee puzzle sets from a word-frequency
//! dictionary: seven letters, one of them mandatory, with a solvable word
//! list, pangrams and a total score.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::LetterSet;
//! use spelling_bee::dictionary::Dictionary;
//! use spelling_bee::generator::{WordLengthRange, solve};
//!
//! let dictionary = Dictionary::from_words(["date", "fate", "gate", "plate"]);
//! let letters = LetterSet::new(b'a', *b"tedfgl").unwrap();
//!
//! let solution = solve(&dictionary, &letters, WordLengthRange::default());
//! assert_eq!(solution.valid_words, ["date", "fate", "gate"]);
//! ```

// Core domain types
pub mod core;

// Word-frequency dictionary and rejection cache
pub mod dictionary;

// Letter selection, validation, scoring and search
pub mod generator;

// Puzzle set files
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
