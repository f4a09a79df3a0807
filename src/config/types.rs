use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::Priority;

/// Source paths and threading handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,
    /// 0 lets the engine decide.
    #[serde(default)]
    pub threads: usize,
}

impl AnalyzerConfig {
    #[must_use]
    pub fn new<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            threads: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesetsSection {
    /// Aliases (`design`) or PMD rule set references.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
    /// rule set -> rule -> property -> value
    #[serde(default)]
    pub properties: BTreeMap<String, BTreeMap<String, BTreeMap<String, toml::Value>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorSection {
    #[serde(default = "default_min_priority")]
    pub min_priority: Priority,
    #[serde(default)]
    pub ignore: Vec<IgnoreEntry>,
}

impl Default for CollectorSection {
    fn default() -> Self {
        Self {
            min_priority: default_min_priority(),
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreEntry {
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    #[serde(default = "default_binary")]
    pub binary: String,
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
    /// Existing PMD JSON reports; when set, PMD is not invoked.
    #[serde(default)]
    pub reports: Vec<PathBuf>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            work_dir: default_work_dir(),
            reports: Vec::new(),
            args: Vec::new(),
        }
    }
}

/// Contents of `pmdgate.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_analysis")]
    pub analysis: AnalyzerConfig,
    #[serde(default = "default_rulesets")]
    pub rulesets: RulesetsSection,
    #[serde(default)]
    pub collector: CollectorSection,
    #[serde(default)]
    pub engine: EngineSection,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            analysis: default_analysis(),
            rulesets: default_rulesets(),
            collector: CollectorSection::default(),
            engine: EngineSection::default(),
        }
    }
}

fn default_sources() -> Vec<PathBuf> { vec![PathBuf::from("src/main/java")] }
fn default_enabled() -> Vec<String> { vec!["quickstart".into()] }
const fn default_min_priority() -> Priority { Priority::Medium }
fn default_binary() -> String { "pmd".to_string() }
fn default_work_dir() -> PathBuf { PathBuf::from("target/pmdgate") }

fn default_analysis() -> AnalyzerConfig {
    AnalyzerConfig {
        sources: default_sources(),
        threads: 0,
    }
}

fn default_rulesets() -> RulesetsSection {
    RulesetsSection {
        enabled: default_enabled(),
        properties: BTreeMap::new(),
    }
}
