// src/engine/command.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use super::{json, Engine, EngineRequest, ReportSink};
use crate::error::{GateError, Result};
use crate::ruleset::render_overrides;

/// PMD exits with 4 when it found violations; that is still a good run.
const EXIT_VIOLATIONS_FOUND: i32 = 4;
const OVERRIDES_FILE: &str = "pmdgate-overrides.xml";

/// Runs the `pmd` command line tool and reads its JSON report from stdout.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    binary: String,
    work_dir: PathBuf,
    extra_args: Vec<String>,
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self {
            binary: "pmd".to_string(),
            work_dir: PathBuf::from("target/pmdgate"),
            extra_args: Vec::new(),
        }
    }
}

impl CommandEngine {
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ..Self::default()
        }
    }

    /// Directory for generated rule set files.
    #[must_use]
    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    #[must_use]
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Arguments for `request`. Rule sets with overrides are replaced by
    /// `overrides` when given.
    #[must_use]
    pub fn build_args(&self, request: &EngineRequest, overrides: Option<&Path>) -> Vec<String> {
        let mut rulesets: Vec<String> = request
            .rulesets
            .iter()
            .filter(|rs| overrides.is_none() || !rs.has_overrides())
            .map(|rs| rs.name.clone())
            .collect();
        if let Some(path) = overrides {
            rulesets.push(path.to_string_lossy().into_owned());
        }

        let mut args = vec![
            "check".to_string(),
            "--no-progress".to_string(),
            "--format".to_string(),
            "json".to_string(),
            "-d".to_string(),
            request.input_paths(),
            "-R".to_string(),
            rulesets.join(","),
            "-t".to_string(),
            request.threads.to_string(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    fn write_overrides(&self, request: &EngineRequest) -> Result<Option<PathBuf>> {
        let Some(xml) = render_overrides(&request.rulesets) else {
            return Ok(None);
        };
        fs::create_dir_all(&self.work_dir).map_err(|e| GateError::io(e, &self.work_dir))?;
        let path = self.work_dir.join(OVERRIDES_FILE);
        fs::write(&path, xml).map_err(|e| GateError::io(e, &path))?;
        Ok(Some(path))
    }
}

impl Engine for CommandEngine {
    fn run(&self, request: &EngineRequest, sink: &mut dyn ReportSink) -> Result<()> {
        let overrides = self.write_overrides(request)?;
        let args = self.build_args(request, overrides.as_deref());

        tracing::debug!(binary = %self.binary, args = ?args, "running PMD");
        let start = Instant::now();
        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| GateError::io(e, &self.binary))?;

        let code = output.status.code().unwrap_or(-1);
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(code, elapsed_ms, "PMD finished");
        if !accepted_exit(code) {
            return Err(GateError::Engine {
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let report = json::parse_report(&stdout)?;
        report.log_errors();
        for v in report.into_violations() {
            sink.accept(v);
        }
        Ok(())
    }
}

fn accepted_exit(code: i32) -> bool {
    code == 0 || code == EXIT_VIOLATIONS_FOUND
}
