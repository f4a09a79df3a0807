// src/cli/handlers.rs
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::args::CheckArgs;
use crate::analysis::Analyzer;
use crate::config::{GateConfig, CONFIG_FILE, DEFAULT_TEMPLATE};
use crate::engine::{CommandEngine, Engine, ReportFileEngine};
use crate::exit::GateExit;
use crate::reporting;
use crate::ruleset::predefined;
use crate::types::AnalysisResult;

/// A finished `check`: the result and its rendering.
pub struct CheckOutcome {
    pub result: AnalysisResult,
    pub rendered: String,
}

impl CheckOutcome {
    #[must_use]
    pub fn exit(&self) -> GateExit {
        if self.result.passed() {
            GateExit::Success
        } else {
            GateExit::GateFailed
        }
    }
}

/// Runs `check` and prints the report.
///
/// # Errors
/// Returns error if configuration, engine or rendering fails.
pub fn handle_check(args: &CheckArgs) -> Result<GateExit> {
    let outcome = check(args, Path::new(""))?;
    print!("{}", outcome.rendered);
    Ok(outcome.exit())
}

/// Loads config from `args` (relative to `cwd`), runs the analysis and renders it.
///
/// # Errors
/// Returns error if configuration, engine or rendering fails.
pub fn check(args: &CheckArgs, cwd: &Path) -> Result<CheckOutcome> {
    let (config, base) = load_config(args, cwd)?;
    let mut config = apply_overrides(config, args);
    config.analysis.sources = config
        .analysis
        .sources
        .iter()
        .map(|p| resolve(&base, p))
        .collect();

    let analyzer = Analyzer::new(config.analysis.clone(), config.violation_collector()?)
        .with_rulesets(config.ruleset_selection().iter().cloned());

    let engine = build_engine(&config, &base);
    let result = analyzer.analyze(engine.as_ref())?;
    let rendered = reporting::render(&result, args.format)?;
    Ok(CheckOutcome { result, rendered })
}

fn load_config(args: &CheckArgs, cwd: &Path) -> Result<(GateConfig, PathBuf)> {
    match &args.config {
        Some(path) => {
            let path = resolve(cwd, path);
            let config = GateConfig::load(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok((config, base))
        }
        None => Ok((GateConfig::load_from_dir(cwd)?, cwd.to_path_buf())),
    }
}

fn apply_overrides(mut config: GateConfig, args: &CheckArgs) -> GateConfig {
    if !args.report.is_empty() {
        config.engine.reports = args.report.clone();
    }
    if !args.source.is_empty() {
        config.analysis.sources = args.source.clone();
    }
    if !args.ruleset.is_empty() {
        config.rulesets.enabled = args.ruleset.clone();
        let selected: Vec<String> = args
            .ruleset
            .iter()
            .map(|r| predefined::resolve(r).name)
            .collect();
        config
            .rulesets
            .properties
            .retain(|name, _| selected.contains(&predefined::resolve(name).name));
    }
    if let Some(p) = args.min_priority {
        config.collector.min_priority = p;
    }
    config
}

fn build_engine(config: &GateConfig, base: &Path) -> Box<dyn Engine> {
    if config.engine.reports.is_empty() {
        Box::new(
            CommandEngine::new(&config.engine.binary)
                .work_dir(resolve(base, &config.engine.work_dir))
                .extra_args(config.engine.args.iter().cloned()),
        )
    } else {
        let reports = config.engine.reports.iter().map(|p| resolve(base, p)).collect();
        Box::new(ReportFileEngine::new(reports))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Lists predefined rule sets.
pub fn handle_rulesets() {
    for (alias, name) in predefined::all() {
        println!("{:<16} {}", alias.cyan(), name);
    }
}

/// Writes the starter config into `dir`.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, DEFAULT_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote {}", "OK".green().bold(), path.display());
    Ok(path)
}
