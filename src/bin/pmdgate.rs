// src/bin/pmdgate.rs
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pmdgate_core::cli::{self, Cli, Commands};
use pmdgate_core::exit::GateExit;
use pmdgate_core::logging;

fn main() -> GateExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match dispatch(&cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            GateExit::for_error(&e)
        }
    }
}

fn dispatch(cmd: &Commands) -> Result<GateExit> {
    match cmd {
        Commands::Check(args) => cli::handle_check(args),
        Commands::Rulesets => {
            cli::handle_rulesets();
            Ok(GateExit::Success)
        }
        Commands::Init { force } => {
            cli::handle_init(Path::new("."), *force)?;
            Ok(GateExit::Success)
        }
    }
}
