//! Puzzle generation engine
//!
//! Letter selection, word validation, quality scoring, the bounded search
//! loop and the diversity-filtered batch driver.

pub mod batch;
pub mod config;
mod error;
pub mod quality;
pub mod search;
pub mod selector;
pub mod validator;

pub use batch::{
    Acceptance, BatchEntry, BatchGenerator, DiversityWindow, assign_live_dates, finalize_batch,
    generate_batch,
};
pub use config::{GeneratorConfig, WordLengthRange};
pub use error::GenerationError;
pub use quality::{QualityBreakdown, evaluate};
pub use search::{Rejection, SearchReport, generate_puzzle, new_puzzle_id, search};
pub use selector::select_letters;
pub use validator::{Solution, find_valid_words, has_bingo, is_pangram, is_valid_word, solve};
