//! PMD's JSON report format (`--format json`).

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::types::{Location, Priority, RuleRef, Violation};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    #[serde(default)]
    pub pmd_version: Option<String>,
    #[serde(default)]
    pub files: Vec<JsonFile>,
    #[serde(default)]
    pub processing_errors: Vec<JsonProcessingError>,
    #[serde(default)]
    pub configuration_errors: Vec<JsonConfigurationError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonFile {
    pub filename: PathBuf,
    #[serde(default)]
    pub violations: Vec<JsonViolation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonViolation {
    #[serde(rename = "beginline", default)]
    pub begin_line: usize,
    #[serde(rename = "begincolumn", default)]
    pub begin_column: usize,
    #[serde(rename = "endline", default)]
    pub end_line: usize,
    #[serde(rename = "endcolumn", default)]
    pub end_column: usize,
    #[serde(default)]
    pub description: String,
    pub rule: String,
    #[serde(default)]
    pub ruleset: String,
    pub priority: Priority,
    #[serde(default)]
    pub external_info_url: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub variable: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonProcessingError {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfigurationError {
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub message: String,
}

/// Parses a PMD JSON report.
///
/// # Errors
/// Returns error if the JSON is malformed or a priority is out of range.
pub fn parse_report(content: &str) -> Result<JsonReport> {
    Ok(serde_json::from_str(content)?)
}

impl JsonReport {
    /// Logs the engine-side errors PMD embedded in the report.
    pub fn log_errors(&self) {
        for e in &self.processing_errors {
            tracing::warn!(file = %e.filename, "PMD processing error: {}", e.message);
        }
        for e in &self.configuration_errors {
            tracing::warn!(rule = %e.rule, "PMD configuration error: {}", e.message);
        }
    }

    /// Flattens the report into violations, in file order.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.files
            .into_iter()
            .flat_map(|file| {
                let path = file.filename;
                file.violations
                    .into_iter()
                    .map(move |v| v.into_violation(path.clone()))
            })
            .collect()
    }
}

impl JsonViolation {
    #[must_use]
    pub fn into_violation(self, file: PathBuf) -> Violation {
        Violation {
            rule: RuleRef {
                name: self.rule,
                ruleset: self.ruleset,
                priority: self.priority,
            },
            description: self.description,
            location: Location {
                file,
                begin_line: self.begin_line,
                begin_column: self.begin_column,
                end_line: self.end_line,
                end_column: self.end_column,
                package: self.package,
                class: self.class,
                method: self.method,
                variable: self.variable,
            },
            external_info_url: self.external_info_url,
        }
    }
}
