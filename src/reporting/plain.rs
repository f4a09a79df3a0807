use crate::types::AnalysisResult;
use std::fmt::Write;

/// One line per violation without colors: priority, rule, position, message.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render(result: &AnalysisResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for v in result.violations() {
        writeln!(
            out,
            "{:<12} {:<30} {}:{}    {}",
            v.priority().to_string(),
            v.rule_name(),
            v.location.file.display(),
            v.location.begin_line,
            v.description
        )?;
    }
    for action in result.unused_actions() {
        writeln!(out, "UNUSED       {action}")?;
    }
    Ok(out)
}
