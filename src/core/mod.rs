//! Core domain types for Spelling Bee puzzles
//!
//! Letter sets, letter bitmasks and the serialized puzzle record. Nothing in
//! here depends on randomness or I/O.

mod letters;
mod puzzle;

pub use letters::{
    ALPHABET, BOARD_LETTERS, LetterMask, LetterSet, LetterSetError, OUTSIDE_LETTERS,
};
pub use puzzle::{BINGO_BONUS, PANGRAM_BONUS, Puzzle, total_score, word_score};
