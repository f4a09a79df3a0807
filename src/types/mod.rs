use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GateError;

mod result;
pub use result::AnalysisResult;

/// PMD rule priority. Lower number means higher severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriorityRepr", into = "u8")]
pub enum Priority {
    High = 1,
    MediumHigh = 2,
    Medium = 3,
    MediumLow = 4,
    Low = 5,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Self::High,
        Self::MediumHigh,
        Self::Medium,
        Self::MediumLow,
        Self::Low,
    ];

    /// Numeric PMD value (1..=5).
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Converts a PMD priority number.
    ///
    /// # Errors
    /// Returns error if `value` is outside 1..=5.
    pub fn from_value(value: u8) -> Result<Self, GateError> {
        Self::ALL
            .into_iter()
            .find(|p| p.value() == value)
            .ok_or_else(|| GateError::InvalidPriority(value.to_string()))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::MediumHigh => "medium-high",
            Self::Medium => "medium",
            Self::MediumLow => "medium-low",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(n) = normalized.parse::<u8>() {
            return Self::from_value(n);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label() == normalized)
            .ok_or_else(|| GateError::InvalidPriority(s.to_string()))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.value()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<PriorityRepr> for Priority {
    type Error = GateError;

    fn try_from(repr: PriorityRepr) -> Result<Self, Self::Error> {
        match repr {
            PriorityRepr::Number(n) => Self::from_value(n),
            PriorityRepr::Name(s) => s.parse(),
        }
    }
}

/// The rule that produced a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRef {
    pub name: String,
    pub ruleset: String,
    pub priority: Priority,
}

/// Where a violation was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub begin_line: usize,
    pub begin_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

impl Location {
    #[must_use]
    pub fn at(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            begin_line: line,
            end_line: line,
            ..Self::default()
        }
    }

    /// `package.Class#method`, or whatever part of it the engine reported.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let class = self.class.as_deref()?;
        let mut name = match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{class}"),
            _ => class.to_string(),
        };
        if let Some(method) = &self.method {
            name.push('#');
            name.push_str(method);
        }
        Some(name)
    }
}

/// A single violation reported by the engine. Read-only for post-processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: RuleRef,
    pub description: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_info_url: Option<String>,
}

impl Violation {
    #[must_use]
    pub fn new(rule: &str, priority: Priority, location: Location) -> Self {
        Self {
            rule: RuleRef {
                name: rule.to_string(),
                ruleset: String::new(),
                priority,
            },
            description: String::new(),
            location,
            external_info_url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_ruleset(mut self, ruleset: impl Into<String>) -> Self {
        self.rule.ruleset = ruleset.into();
        self
    }

    #[must_use]
    pub fn rule_name(&self) -> &str {
        &self.rule.name
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.rule.priority
    }
}
