use super::{Action, ActionId, Collector, Ignore, Verdict};
use crate::types::{Priority, Violation};

/// Default collector for PMD violations.
///
/// Violations whose priority is less severe than `min_priority` are rejected;
/// everything else is accepted unless a registered ignore matches. The most
/// specific matching ignore wins, the earliest registered on ties.
#[derive(Debug, Clone)]
pub struct ViolationCollector {
    min_priority: Priority,
    actions: Vec<Action>,
}

impl Default for ViolationCollector {
    fn default() -> Self {
        Self {
            min_priority: Priority::Medium,
            actions: Vec::new(),
        }
    }
}

impl ViolationCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    #[must_use]
    pub fn priority_threshold(&self) -> Priority {
        self.min_priority
    }

    /// Registers ignores without a reason.
    #[must_use]
    pub fn just<I>(self, ignores: I) -> Self
    where
        I: IntoIterator<Item = Ignore>,
    {
        self.register(None, ignores)
    }

    /// Registers ignores that share a reason.
    #[must_use]
    pub fn because<I>(self, reason: &str, ignores: I) -> Self
    where
        I: IntoIterator<Item = Ignore>,
    {
        self.register(Some(reason.to_string()), ignores)
    }

    fn register<I>(mut self, reason: Option<String>, ignores: I) -> Self
    where
        I: IntoIterator<Item = Ignore>,
    {
        for ignore in ignores {
            let id = ActionId(self.actions.len());
            self.actions.push(Action::new(id, ignore, reason.clone()));
        }
        self
    }
}

impl Collector for ViolationCollector {
    fn classify(&self, violation: &Violation) -> Verdict {
        let mut best: Option<(ActionId, usize)> = None;
        for action in &self.actions {
            let Some(quality) = action.ignore().quality(violation) else {
                continue;
            };
            if best.map_or(true, |(_, q)| quality > q) {
                best = Some((action.id(), quality));
            }
        }
        match best {
            Some((id, quality)) => Verdict::ignored_by(id, quality),
            None => Verdict::by_default(violation.priority() <= self.min_priority),
        }
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::UsageCounter;
    use crate::types::Location;

    fn v(rule: &str, priority: Priority, file: &str) -> Violation {
        Violation::new(rule, priority, Location::at(file, 1))
    }

    #[test]
    fn default_threshold_is_medium() {
        let c = ViolationCollector::new();
        assert!(c.classify(&v("A", Priority::Medium, "X.java")).accept);
        assert!(!c.classify(&v("A", Priority::MediumLow, "X.java")).accept);
    }

    #[test]
    fn threshold_rejections_use_default_tag() {
        let c = ViolationCollector::new().min_priority(Priority::High);
        let verdict = c.classify(&v("A", Priority::MediumHigh, "X.java"));
        assert_eq!(verdict, Verdict::reject());
    }

    #[test]
    fn most_specific_ignore_wins() {
        let c = ViolationCollector::new()
            .just([Ignore::everything_at(["*.java"]).unwrap()])
            .because(
                "legacy",
                [Ignore::rules(["GodClass"]).at(["legacy/*.java"]).unwrap()],
            );
        let verdict = c.classify(&v("GodClass", Priority::High, "src/legacy/Big.java"));
        assert_eq!(verdict.action, Some(ActionId(1)));
        assert!(!verdict.accept);

        let verdict = c.classify(&v("Other", Priority::High, "src/legacy/Big.java"));
        assert_eq!(verdict.action, Some(ActionId(0)));
    }

    #[test]
    fn first_registered_wins_ties() {
        let c = ViolationCollector::new().just([Ignore::rules(["A"]), Ignore::rules(["A"])]);
        let verdict = c.classify(&v("A", Priority::High, "X.java"));
        assert_eq!(verdict.action, Some(ActionId(0)));
    }

    #[test]
    fn reasons_are_attached_to_actions() {
        let c = ViolationCollector::new()
            .because("generated", [Ignore::rules(["A"]), Ignore::rules(["B"])])
            .just([Ignore::rules(["C"])]);
        let reasons: Vec<Option<&str>> = c.actions().iter().map(Action::reason).collect();
        assert_eq!(reasons, vec![Some("generated"), Some("generated"), None]);
    }

    #[test]
    fn unused_actions_are_those_never_matched() {
        let c = ViolationCollector::new().just([
            Ignore::rules(["A"]),
            Ignore::rules(["B"]),
            Ignore::rules(["C"]),
        ]);
        let mut counter = UsageCounter::new();
        for rule in ["A", "B", "B"] {
            counter.record(&c.classify(&v(rule, Priority::High, "X.java")));
        }
        let unused: Vec<ActionId> = c.unused_actions(&counter).iter().map(Action::id).collect();
        assert_eq!(unused, vec![ActionId(2)]);
    }
}
