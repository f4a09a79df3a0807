pub mod analysis;
pub mod cli;
pub mod collector;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod exit;
pub mod logging;
pub mod reporting;
pub mod ruleset;
pub mod types;

pub use analysis::{process_violations, Analyzer};
pub use collector::{Collector, Ignore, ViolationCollector};
pub use counter::UsageCounter;
pub use error::{GateError, Result};
pub use types::{AnalysisResult, Priority, Violation};
