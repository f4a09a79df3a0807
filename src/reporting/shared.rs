use crate::types::{Priority, Violation};
use colored::{ColoredString, Colorize};
use std::collections::HashMap;

pub(crate) fn rule_counts(violations: &[Violation]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in violations {
        *counts.entry(v.rule_name()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn next_occurrence<'a>(shown: &mut HashMap<&'a str, usize>, rule: &'a str) -> usize {
    let entry = shown.entry(rule).or_insert(0);
    *entry += 1;
    *entry
}

/// Prefix word for the report line (error/warn/info).
pub(crate) fn prefix(priority: Priority) -> &'static str {
    match priority {
        Priority::High | Priority::MediumHigh => "error",
        Priority::Medium => "warn",
        Priority::MediumLow | Priority::Low => "info",
    }
}

pub(crate) fn paint(priority: Priority, text: &str) -> ColoredString {
    match priority {
        Priority::High | Priority::MediumHigh => text.red().bold(),
        Priority::Medium => text.yellow(),
        Priority::MediumLow | Priority::Low => text.dimmed(),
    }
}

pub(crate) fn position(v: &Violation) -> String {
    let loc = &v.location;
    if loc.begin_column > 0 {
        format!("{}:{}:{}", loc.file.display(), loc.begin_line, loc.begin_column)
    } else {
        format!("{}:{}", loc.file.display(), loc.begin_line)
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
