// src/config/mod.rs
pub mod types;

pub use self::types::{
    AnalyzerConfig, CollectorSection, EngineSection, GateConfig, IgnoreEntry, RulesetsSection,
};

use std::fs;
use std::path::Path;

use crate::collector::{Ignore, ViolationCollector};
use crate::error::{GateError, Result};
use crate::ruleset::{predefined, Ruleset, RulesetSelection};

pub const CONFIG_FILE: &str = "pmdgate.toml";

/// Written by `pmdgate init`.
pub const DEFAULT_TEMPLATE: &str = r#"# pmdgate configuration

[analysis]
sources = ["src/main/java"]
# 0 lets PMD decide
threads = 0

[rulesets]
# aliases (see `pmdgate rulesets`) or PMD rule set references
enabled = ["bestpractices", "errorprone", "design"]

# [rulesets.properties.design.CyclomaticComplexity]
# methodReportLevel = 12

[collector]
# violations less severe than this are not reported: high, medium-high, medium, medium-low, low
min_priority = "medium"

# [[collector.ignore]]
# rules = ["GodClass"]
# locations = ["*Generated*"]
# reason = "generated code"

[engine]
binary = "pmd"
work_dir = "target/pmdgate"
# replay existing PMD JSON reports instead of running PMD
# reports = ["target/pmd.json"]
"#;

impl GateConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or inconsistent.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GateError::io(e, path))?;
        Self::parse(&content)
    }

    /// Loads `pmdgate.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but is invalid.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (i, entry) in self.collector.ignore.iter().enumerate() {
            if entry.rules.is_empty() && entry.locations.is_empty() {
                return Err(GateError::Config(format!(
                    "collector.ignore[{i}] has neither rules nor locations"
                )));
            }
        }
        let enabled: Vec<Ruleset> = self
            .rulesets
            .enabled
            .iter()
            .map(|n| predefined::resolve(n))
            .collect();
        for name in self.rulesets.properties.keys() {
            let target = predefined::resolve(name);
            if !enabled.iter().any(|rs| rs.name == target.name) {
                return Err(GateError::Config(format!(
                    "properties given for rule set '{name}' which is not enabled"
                )));
            }
        }
        Ok(())
    }

    /// Enabled rule sets with their property overrides.
    #[must_use]
    pub fn ruleset_selection(&self) -> RulesetSelection {
        let rulesets = self.rulesets.enabled.iter().map(|name| {
            let mut rs = predefined::resolve(name);
            for (key, rules) in &self.rulesets.properties {
                if predefined::resolve(key).name != rs.name {
                    continue;
                }
                for (rule, props) in rules {
                    for (prop, value) in props {
                        rs = rs.with_property(rule, prop, value_to_string(value));
                    }
                }
            }
            rs
        });
        rulesets.collect()
    }

    /// Builds the collector described by `[collector]`.
    ///
    /// # Errors
    /// Returns error if a location pattern is invalid.
    pub fn violation_collector(&self) -> Result<ViolationCollector> {
        let mut collector = ViolationCollector::new().min_priority(self.collector.min_priority);
        for entry in &self.collector.ignore {
            let ignore = Ignore::rules(entry.rules.iter().cloned()).at(&entry.locations)?;
            collector = match &entry.reason {
                Some(reason) => collector.because(reason, [ignore]),
                None => collector.just([ignore]),
            };
        }
        Ok(collector)
    }
}

fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Collector;
    use crate::types::Priority;

    #[test]
    fn template_parses() {
        let config = GateConfig::parse(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(config.collector.min_priority, Priority::Medium);
        assert_eq!(config.ruleset_selection().len(), 3);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = GateConfig::parse("").unwrap();
        assert_eq!(config.analysis.sources.len(), 1);
        assert_eq!(config.rulesets.enabled, vec!["quickstart".to_string()]);
        assert_eq!(config.engine.binary, "pmd");
    }

    #[test]
    fn properties_attach_to_enabled_ruleset() {
        let config = GateConfig::parse(
            "[rulesets]\nenabled = [\"design\"]\n\
             [rulesets.properties.design.NcssCount]\nmethodReportLevel = 40\n",
        )
        .unwrap();
        let sel = config.ruleset_selection();
        let design = sel.get("category/java/design.xml").unwrap();
        assert_eq!(design.properties["NcssCount"]["methodReportLevel"], "40");
    }

    #[test]
    fn properties_for_disabled_ruleset_are_rejected() {
        let err = GateConfig::parse(
            "[rulesets]\nenabled = [\"design\"]\n\
             [rulesets.properties.codestyle.ShortVariable]\nminimum = 2\n",
        )
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn ignore_entries_become_actions() {
        let config = GateConfig::parse(
            "[collector]\nmin_priority = 2\n\
             [[collector.ignore]]\nrules = [\"GodClass\"]\nlocations = [\"*Dto\"]\nreason = \"dto\"\n\
             [[collector.ignore]]\nrules = [\"ShortVariable\"]\n",
        )
        .unwrap();
        let collector = config.violation_collector().unwrap();
        assert_eq!(collector.priority_threshold(), Priority::MediumHigh);
        assert_eq!(collector.actions().len(), 2);
        assert_eq!(collector.actions()[0].reason(), Some("dto"));
    }

    #[test]
    fn ignore_without_rules_or_locations_is_rejected() {
        assert!(GateConfig::parse("[[collector.ignore]]\nreason = \"x\"\n").is_err());
    }

    #[test]
    fn invalid_priority_is_rejected() {
        assert!(GateConfig::parse("[collector]\nmin_priority = \"urgent\"\n").is_err());
    }
}
