use crate::reporting::shared::{
    next_occurrence, paint, pluralize, position, prefix, rule_counts,
};
use crate::types::{AnalysisResult, Priority, Violation};
use colored::Colorize;
use std::collections::HashMap;
use std::fmt::Write;

/// Renders the result for a terminal, grouped by rule: the first occurrence of
/// each rule gets the full block, later ones a compact back-reference.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render(result: &AnalysisResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let violations = result.violations();
    let counts = rule_counts(violations);
    let mut shown: HashMap<&str, usize> = HashMap::new();

    for v in violations {
        let total = counts.get(v.rule_name()).copied().unwrap_or(1);
        let occurrence = next_occurrence(&mut shown, v.rule_name());
        if occurrence == 1 {
            render_full(&mut out, v, occurrence, total)?;
        } else {
            render_compact(&mut out, v, occurrence, total)?;
        }
    }

    render_unused(&mut out, result)?;
    render_summary(&mut out, result)?;
    Ok(out)
}

fn render_full(out: &mut String, v: &Violation, occurrence: usize, total: usize) -> std::fmt::Result {
    let count_label = if total > 1 {
        format!(" [{occurrence} of {total}]")
    } else {
        String::new()
    };
    let header = format!("{}:{count_label} {}", prefix(v.priority()), v.description);
    writeln!(out, "{}", paint(v.priority(), &header))?;
    writeln!(out, "  {} {}", "-->".blue(), position(v))?;
    if let Some(code) = v.location.qualified_name() {
        writeln!(out, "   {} in {}", "|".blue(), code.dimmed())?;
    }

    let ruleset = if v.rule.ruleset.is_empty() {
        String::new()
    } else {
        format!("{}, ", v.rule.ruleset)
    };
    writeln!(
        out,
        "   {} {}: {ruleset}priority {} ({})",
        "=".blue(),
        v.rule_name().yellow(),
        v.priority().value(),
        v.priority()
    )?;

    if let Some(url) = &v.external_info_url {
        writeln!(out, "   {} {} {}", "=".blue(), "INFO:".cyan(), url.dimmed())?;
    }

    writeln!(
        out,
        "   {} {} {}",
        "=".blue(),
        "SUPPRESS:".dimmed(),
        format!(
            "[[collector.ignore]] rules = [\"{}\"] in pmdgate.toml",
            v.rule_name()
        )
        .dimmed()
    )?;
    writeln!(out)
}

fn render_compact(out: &mut String, v: &Violation, occurrence: usize, total: usize) -> std::fmt::Result {
    let header = format!(
        "{}: [{occurrence} of {total}] {}",
        prefix(v.priority()),
        v.description
    );
    writeln!(out, "{}", paint(v.priority(), &header))?;
    writeln!(out, "  {} {}", "-->".blue(), position(v))?;
    writeln!(
        out,
        "   {} {}: see first {} above",
        "=".blue(),
        v.rule_name().yellow(),
        v.rule_name()
    )?;
    writeln!(out)
}

fn render_unused(out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
    let unused = result.unused_actions();
    if unused.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "{} {} {} never matched a violation:",
        "~".yellow().bold(),
        unused.len(),
        pluralize("collector action", unused.len())
    )?;
    for action in unused {
        writeln!(out, "   - {action}")?;
    }
    writeln!(out)
}

fn render_summary(out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
    let total = result.violation_count();
    if total == 0 {
        return writeln!(out, "{} No violations found.", "OK".green().bold());
    }

    let parts: Vec<String> = Priority::ALL
        .into_iter()
        .filter_map(|p| {
            let n = result.count_at(p);
            (n > 0).then(|| format!("{n} {p}"))
        })
        .collect();

    writeln!(
        out,
        "{} pmdgate found {total} {} ({}).",
        "X".red().bold(),
        pluralize("violation", total),
        parts.join(", ")
    )
}
