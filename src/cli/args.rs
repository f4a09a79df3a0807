use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;
use crate::types::Priority;

#[derive(Parser)]
#[command(name = "pmdgate", version, about = "Quality gate around the PMD static analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Log engine invocation and post-processing details
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run PMD (or replay its reports) and fail on accepted violations
    Check(CheckArgs),
    /// List predefined rule sets
    Rulesets,
    /// Write a starter pmdgate.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Config file (default: ./pmdgate.toml if present)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Replay this PMD JSON report instead of running PMD (repeatable)
    #[arg(long, value_name = "FILE")]
    pub report: Vec<PathBuf>,
    /// Source path to analyze, replacing the configured ones (repeatable)
    #[arg(long, short, value_name = "PATH")]
    pub source: Vec<PathBuf>,
    /// Rule set alias or reference, replacing the configured ones (repeatable)
    #[arg(long, short = 'R', value_name = "RULESET")]
    pub ruleset: Vec<String>,
    /// Least severe priority that still fails the gate
    #[arg(long, value_name = "PRIORITY")]
    pub min_priority: Option<Priority>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
