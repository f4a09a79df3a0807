use serde::Serialize;
use std::fmt;

use super::{ActionId, LocationPattern};
use crate::error::Result;
use crate::types::Violation;

/// Rules and locations that should not fail the gate.
///
/// An empty rule list (or `*`) means any rule; an empty location list means
/// anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ignore {
    rules: Vec<String>,
    locations: Vec<LocationPattern>,
}

impl Ignore {
    #[must_use]
    pub fn rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
            locations: Vec::new(),
        }
    }

    /// Ignore every rule at the given locations.
    ///
    /// # Errors
    /// Returns error if a pattern is invalid.
    pub fn everything_at<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().at(patterns)
    }

    /// Restricts this ignore to the given location patterns.
    ///
    /// # Errors
    /// Returns error if a pattern is invalid.
    pub fn at<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for p in patterns {
            self.locations.push(LocationPattern::parse(p.as_ref())?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn rule_names(&self) -> &[String] {
        &self.rules
    }

    #[must_use]
    pub fn locations(&self) -> &[LocationPattern] {
        &self.locations
    }

    fn any_rule(&self) -> bool {
        self.rules.is_empty() || self.rules.iter().any(|r| r == "*")
    }

    /// Match quality for `violation`, `None` if this ignore does not apply.
    #[must_use]
    pub fn quality(&self, violation: &Violation) -> Option<usize> {
        let rule_quality = if self.any_rule() {
            0
        } else {
            let name = violation.rule_name();
            self.rules.iter().find(|r| *r == name)?.len()
        };
        if self.locations.is_empty() {
            return Some(rule_quality);
        }
        self.locations
            .iter()
            .filter_map(|p| p.quality(&violation.location))
            .max()
            .map(|q| q + rule_quality)
    }
}

impl fmt::Display for Ignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.any_rule() {
            f.write_str("ignore all rules")?;
        } else {
            write!(f, "ignore {}", self.rules.join(", "))?;
        }
        if !self.locations.is_empty() {
            let locs: Vec<&str> = self.locations.iter().map(LocationPattern::as_str).collect();
            write!(f, " in {}", locs.join(", "))?;
        }
        Ok(())
    }
}

/// An ignore registered with a collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    id: ActionId,
    ignore: Ignore,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Action {
    #[must_use]
    pub fn new(id: ActionId, ignore: Ignore, reason: Option<String>) -> Self {
        Self { id, ignore, reason }
    }

    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    #[must_use]
    pub fn ignore(&self) -> &Ignore {
        &self.ignore
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ignore)?;
        if let Some(reason) = &self.reason {
            write!(f, " ({reason})")?;
        }
        Ok(())
    }
}
