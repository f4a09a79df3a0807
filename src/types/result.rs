//! Outcome of one analysis run.

use serde::Serialize;

use super::{Priority, Violation};
use crate::collector::Action;

/// Sorted accepted violations plus the collector actions that never matched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    violations: Vec<Violation>,
    unused_actions: Vec<Action>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(violations: Vec<Violation>, unused_actions: Vec<Action>) -> Self {
        Self {
            violations,
            unused_actions,
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn unused_actions(&self) -> &[Action] {
        &self.unused_actions
    }

    /// A non-empty violation list fails the quality gate.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn count_at(&self, priority: Priority) -> usize {
        self.violations
            .iter()
            .filter(|v| v.priority() == priority)
            .count()
    }
}
