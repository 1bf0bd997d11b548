//! Command implementations

pub mod analyze;
pub mod audit;
pub mod custom;
pub mod generate;
pub mod redate;

pub use analyze::{PuzzleSetStatistics, RandomizationCheck, analyze_puzzles, check_randomization};
pub use audit::{AuditReport, PuzzleAudit, Violation, audit_puzzles};
pub use custom::create_custom_puzzle;
pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use redate::{RedateResult, redate_puzzles};
