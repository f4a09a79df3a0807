//! Rule-set selection: which PMD rule sets run, with which property overrides.

use serde::Serialize;
use std::collections::BTreeMap;

pub mod predefined;
mod xml;

pub use xml::render_overrides;

/// A named PMD rule set, optionally overriding properties of its rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ruleset {
    pub name: String,
    /// rule name -> property name -> value
    pub properties: BTreeMap<String, BTreeMap<String, String>>,
}

impl Ruleset {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(
        mut self,
        rule: impl Into<String>,
        property: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        self.properties
            .entry(rule.into())
            .or_default()
            .insert(property.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn has_overrides(&self) -> bool {
        self.properties.values().any(|p| !p.is_empty())
    }

    /// File stem of the rule set name, e.g. `design` for `category/java/design.xml`.
    #[must_use]
    pub fn stem(&self) -> &str {
        let file = self.name.rsplit('/').next().unwrap_or(&self.name);
        file.strip_suffix(".xml").unwrap_or(file)
    }
}

/// Immutable set of rule sets keyed by name. Modifiers return a new selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesetSelection {
    rulesets: BTreeMap<String, Ruleset>,
}

impl RulesetSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rule sets; a rule set replaces an earlier one of the same name.
    #[must_use]
    pub fn with<I>(&self, rulesets: I) -> Self
    where
        I: IntoIterator<Item = Ruleset>,
    {
        let mut next = self.rulesets.clone();
        for rs in rulesets {
            next.insert(rs.name.clone(), rs);
        }
        Self { rulesets: next }
    }

    /// Removes rule sets by name.
    #[must_use]
    pub fn without<'a, I>(&self, rulesets: I) -> Self
    where
        I: IntoIterator<Item = &'a Ruleset>,
    {
        let mut next = self.rulesets.clone();
        for rs in rulesets {
            next.remove(&rs.name);
        }
        Self { rulesets: next }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    /// Rule set names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rulesets.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ruleset> {
        self.rulesets.values()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Ruleset> {
        self.rulesets.get(name)
    }
}

impl FromIterator<Ruleset> for RulesetSelection {
    fn from_iter<T: IntoIterator<Item = Ruleset>>(iter: T) -> Self {
        Self::new().with(iter)
    }
}
