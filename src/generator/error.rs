//! Generation errors

use chrono::NaiveDate;
use std::fmt;

/// Error type for puzzle and batch generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No candidate passed the structural filters within the attempt budget
    Exhausted { attempts: usize },
    /// Live dates ran past the end of the calendar
    DateOverflow { start: NaiveDate, offset: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { attempts } => {
                write!(f, "Could not generate a valid puzzle after {attempts} attempts")
            }
            Self::DateOverflow { start, offset } => {
                write!(f, "Live date {start} + {offset} days is out of range")
            }
        }
    }
}

impl std::error::Error for GenerationError {}
