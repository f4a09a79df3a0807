//! Analyzer: rule-set selection + source config + collector, run against an engine.

use crate::collector::Collector;
use crate::config::AnalyzerConfig;
use crate::engine::{AccumulatingSink, Engine, EngineRequest};
use crate::error::{GateError, Result};
use crate::ruleset::{Ruleset, RulesetSelection};
use crate::types::AnalysisResult;

use super::process::process_violations;

#[derive(Debug, Clone)]
pub struct Analyzer<C> {
    config: AnalyzerConfig,
    collector: C,
    rulesets: RulesetSelection,
}

impl<C: Collector> Analyzer<C> {
    #[must_use]
    pub fn new(config: AnalyzerConfig, collector: C) -> Self {
        Self {
            config,
            collector,
            rulesets: RulesetSelection::new(),
        }
    }

    #[must_use]
    pub fn with_rulesets<I>(&self, rulesets: I) -> Self
    where
        I: IntoIterator<Item = Ruleset>,
        C: Clone,
    {
        self.with_selection(self.rulesets.with(rulesets))
    }

    #[must_use]
    pub fn without_rulesets<'a, I>(&self, rulesets: I) -> Self
    where
        I: IntoIterator<Item = &'a Ruleset>,
        C: Clone,
    {
        self.with_selection(self.rulesets.without(rulesets))
    }

    fn with_selection(&self, rulesets: RulesetSelection) -> Self
    where
        C: Clone,
    {
        Self {
            config: self.config.clone(),
            collector: self.collector.clone(),
            rulesets,
        }
    }

    #[must_use]
    pub fn rulesets(&self) -> &RulesetSelection {
        &self.rulesets
    }

    #[must_use]
    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// Checks everything that must hold before the engine may run.
    ///
    /// # Errors
    /// Returns error if no rule set is selected or no source path is configured.
    pub fn validate(&self) -> Result<()> {
        if self.rulesets.is_empty() {
            return Err(GateError::NoRulesets);
        }
        if self.config.sources.is_empty() {
            return Err(GateError::NoSources);
        }
        Ok(())
    }

    #[must_use]
    pub fn request(&self) -> EngineRequest {
        EngineRequest {
            sources: self.config.sources.clone(),
            rulesets: self.rulesets.clone(),
            threads: self.config.threads,
        }
    }

    /// Runs `engine` to completion, then post-processes what it reported.
    ///
    /// # Errors
    /// Returns error if validation fails or the engine fails.
    pub fn analyze(&self, engine: &dyn Engine) -> Result<AnalysisResult> {
        self.validate()?;
        let request = self.request();
        tracing::info!(
            sources = %request.input_paths(),
            rulesets = %request.ruleset_names(),
            "starting analysis"
        );

        let mut sink = AccumulatingSink::new();
        engine.run(&request, &mut sink)?;
        Ok(process_violations(sink.into_violations(), &self.collector))
    }
}
