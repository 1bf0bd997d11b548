//! Custom puzzle command
//!
//! Builds a puzzle for letters chosen by hand. No balance filters apply: the
//! operator gets whatever the dictionary yields for those letters.

use crate::core::{LetterSet, Puzzle};
use crate::dictionary::Dictionary;
use crate::generator::{WordLengthRange, new_puzzle_id, solve};
use chrono::NaiveDateTime;
use rand::Rng;

/// Timestamp format used for `last_reviewed`
pub const REVIEW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build a puzzle for `letters`, live on the day of `now`
pub fn create_custom_puzzle<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    letters: &LetterSet,
    lengths: WordLengthRange,
    now: NaiveDateTime,
    rng: &mut R,
) -> Puzzle {
    let solution = solve(dictionary, letters, lengths);
    let mut puzzle = Puzzle::new(
        new_puzzle_id(rng),
        letters,
        solution.valid_words,
        solution.pangrams,
        solution.bingo_possible,
    );
    puzzle.live_date = Some(now.date());
    puzzle.last_reviewed = Some(now.format(REVIEW_TIMESTAMP_FORMAT).to_string());
    puzzle
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 26)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn custom_puzzle_solves_letters() {
        let dictionary = Dictionary::from_words(["date", "fate", "gate", "plate", "dates"]);
        let letters = LetterSet::from_chars('a', &['t', 'e', 'd', 'f', 'g', 'l']).unwrap();
        let mut rng = StdRng::seed_from_u64(67);

        let puzzle = create_custom_puzzle(
            &dictionary,
            &letters,
            WordLengthRange::default(),
            now(),
            &mut rng,
        );

        assert_eq!(puzzle.valid_words, vec!["date", "fate", "gate"]);
        assert_eq!(puzzle.total_score, 3);
        assert!(!puzzle.bingo_possible);
        assert_eq!(puzzle.live_date, NaiveDate::from_ymd_opt(2025, 2, 26));
        assert_eq!(puzzle.last_reviewed.as_deref(), Some("2025-02-26 09:30:00"));
    }

    #[test]
    fn custom_puzzle_keeps_empty_boards() {
        let dictionary = Dictionary::from_words(["date"]);
        let letters = LetterSet::from_chars('z', &['q', 'x', 'j', 'k', 'v', 'w']).unwrap();
        let mut rng = StdRng::seed_from_u64(71);

        let puzzle = create_custom_puzzle(
            &dictionary,
            &letters,
            WordLengthRange::default(),
            now(),
            &mut rng,
        );
        assert_eq!(puzzle.total_words, 0);
        assert_eq!(puzzle.total_score, 0);
    }
}
