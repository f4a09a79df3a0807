//! Running an analysis and post-processing its violations.

pub mod analyzer;
pub mod process;

pub use analyzer::Analyzer;
pub use process::{compare_violations, process_violations, process_with_counter, sort_violations};
