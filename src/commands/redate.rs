//! Redate command
//!
//! Reassigns consecutive live dates to an existing puzzle set, keeping its
//! current order.

use crate::core::Puzzle;
use crate::generator::{GenerationError, assign_live_dates};
use chrono::NaiveDate;

/// Date range covered after redating
pub struct RedateResult {
    pub count: usize,
    pub first: Option<NaiveDate>,
    pub last: Option<NaiveDate>,
}

/// Assign dates from `start`, one day apart, in file order
///
/// # Errors
///
/// Returns `GenerationError::DateOverflow` if the dates run out of range.
pub fn redate_puzzles(
    puzzles: &mut [Puzzle],
    start: NaiveDate,
) -> Result<RedateResult, GenerationError> {
    assign_live_dates(puzzles, start)?;
    Ok(RedateResult {
        count: puzzles.len(),
        first: puzzles.first().and_then(|p| p.live_date),
        last: puzzles.last().and_then(|p| p.live_date),
    })
}
