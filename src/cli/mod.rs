// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{CheckArgs, Cli, Commands};
pub use handlers::{check, handle_check, handle_init, handle_rulesets, CheckOutcome};
