//! Per-run usage counting of collector verdicts.

use std::collections::HashMap;

use crate::collector::{ActionId, ActionTag, Verdict};

/// Counts how often each action tag decided a violation. One per run.
#[derive(Debug, Clone, Default)]
pub struct UsageCounter {
    counts: HashMap<ActionTag, usize>,
}

impl UsageCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict and returns whether it accepts the violation.
    pub fn record(&mut self, verdict: &Verdict) -> bool {
        *self.counts.entry(verdict.tag()).or_insert(0) += 1;
        verdict.accept
    }

    #[must_use]
    pub fn count(&self, tag: ActionTag) -> usize {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn action_count(&self, id: ActionId) -> usize {
        self.count(ActionTag::Action(id))
    }

    /// The subset of `known` that was never recorded, in the given order.
    #[must_use]
    pub fn unused(&self, known: &[ActionId]) -> Vec<ActionId> {
        known
            .iter()
            .copied()
            .filter(|id| self.action_count(*id) == 0)
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_returns_accept_flag() {
        let mut c = UsageCounter::new();
        assert!(c.record(&Verdict::accept()));
        assert!(!c.record(&Verdict::reject()));
        assert!(!c.record(&Verdict::ignored_by(ActionId(0), 1)));
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn never_seen_tags_count_zero() {
        let c = UsageCounter::new();
        assert_eq!(c.count(ActionTag::Default { accept: true }), 0);
        assert_eq!(c.action_count(ActionId(9)), 0);
    }

    #[test]
    fn unused_is_known_minus_used() {
        let mut c = UsageCounter::new();
        c.record(&Verdict::ignored_by(ActionId(0), 1));
        c.record(&Verdict::ignored_by(ActionId(1), 1));
        c.record(&Verdict::ignored_by(ActionId(1), 1));
        let known = [ActionId(0), ActionId(1), ActionId(2)];
        assert_eq!(c.unused(&known), vec![ActionId(2)]);
        assert_eq!(c.action_count(ActionId(1)), 2);
    }
}
