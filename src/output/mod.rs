//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_generate_result, print_puzzle, print_randomization,
    print_redate_result, print_statistics,
};
