//! Boundary to the analysis engine that actually produces violations.
//!
//! Engines write into an injected [`ReportSink`] instead of a shared output
//! stream, and must have delivered every violation by the time `run` returns.

use std::path::PathBuf;

use crate::error::Result;
use crate::ruleset::RulesetSelection;
use crate::types::Violation;

mod command;
pub mod json;
mod report_file;

pub use command::CommandEngine;
pub use report_file::ReportFileEngine;

/// Receives violations as the engine reports them.
pub trait ReportSink {
    fn accept(&mut self, violation: Violation);
}

/// In-memory sink that keeps everything it is given.
#[derive(Debug, Default)]
pub struct AccumulatingSink {
    violations: Vec<Violation>,
}

impl AccumulatingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl ReportSink for AccumulatingSink {
    fn accept(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Everything an engine needs to know about one run.
#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub sources: Vec<PathBuf>,
    pub rulesets: RulesetSelection,
    /// Worker threads; 0 lets the engine decide.
    pub threads: usize,
}

impl EngineRequest {
    /// Source paths joined the way PMD's `-d` option expects them.
    #[must_use]
    pub fn input_paths(&self) -> String {
        self.sources
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[must_use]
    pub fn ruleset_names(&self) -> String {
        self.rulesets.names().join(",")
    }
}

pub trait Engine {
    /// Runs the analysis and reports every violation to `sink`.
    ///
    /// # Errors
    /// Returns error if the engine cannot run or its output cannot be read.
    fn run(&self, request: &EngineRequest, sink: &mut dyn ReportSink) -> Result<()>;
}

/// Engine that replays a fixed list of violations.
#[derive(Debug, Clone, Default)]
pub struct StaticEngine {
    violations: Vec<Violation>,
}

impl StaticEngine {
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl Engine for StaticEngine {
    fn run(&self, _request: &EngineRequest, sink: &mut dyn ReportSink) -> Result<()> {
        for v in &self.violations {
            sink.accept(v.clone());
        }
        Ok(())
    }
}
