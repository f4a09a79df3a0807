//! Rendering of analysis results.

pub mod console;
pub mod plain;
mod shared;

use anyhow::Result;
use clap::ValueEnum;

use crate::types::AnalysisResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, colored terminal report
    #[default]
    Text,
    /// One line per violation
    Plain,
    /// Machine-readable JSON
    Json,
}

/// Renders `result` in `format`.
///
/// # Errors
/// Returns error if formatting or serialization fails.
pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => console::render(result)?,
        OutputFormat::Plain => plain::render(result)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonOutput::from(result))?;
            json.push('\n');
            json
        }
    })
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    violations: &'a [crate::types::Violation],
    unused_actions: &'a [crate::collector::Action],
}

impl<'a> From<&'a AnalysisResult> for JsonOutput<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            passed: result.passed(),
            violations: result.violations(),
            unused_actions: result.unused_actions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Action, ActionId, Ignore};
    use crate::types::{Location, Priority, Violation};

    fn sample() -> AnalysisResult {
        AnalysisResult::new(
            vec![
                Violation::new("EmptyCatchBlock", Priority::High, Location::at("A.java", 7))
                    .with_description("Avoid empty catch blocks"),
                Violation::new("EmptyCatchBlock", Priority::High, Location::at("B.java", 3))
                    .with_description("Avoid empty catch blocks"),
            ],
            vec![Action::new(ActionId(0), Ignore::rules(["GodClass"]), Some("legacy".into()))],
        )
    }

    #[test]
    fn text_groups_repeated_rules() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert!(text.contains("[1 of 2]"));
        assert!(text.contains("see first EmptyCatchBlock above"));
        assert!(text.contains("ignore GodClass (legacy)"));
        assert!(text.contains("found 2 violations"));
    }

    #[test]
    fn text_reports_clean_result() {
        let text = render(&AnalysisResult::default(), OutputFormat::Text).unwrap();
        assert!(text.contains("No violations found."));
    }

    #[test]
    fn json_carries_gate_status() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["violations"][0]["rule"]["priority"], 1);
        assert_eq!(value["unused_actions"][0]["reason"], "legacy");
    }
}
