//! Collector policy: decides per violation whether it counts toward failing
//! the gate, and which registered action made that decision.

use serde::Serialize;
use std::fmt;

use crate::counter::UsageCounter;
use crate::types::Violation;

mod action;
mod location;
mod violations;

pub use action::{Action, Ignore};
pub use location::LocationPattern;
pub use violations::ViolationCollector;

/// Identity of a registered action, assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ActionId(pub usize);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the usage counter records for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    /// No registered action matched; the collector's default applied.
    Default { accept: bool },
    /// A registered action decided.
    Action(ActionId),
}

/// Result of classifying one violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub accept: bool,
    pub action: Option<ActionId>,
    /// How specifically the deciding action matched. Zero for defaults.
    pub quality: usize,
}

impl Verdict {
    #[must_use]
    pub fn accept() -> Self {
        Self::by_default(true)
    }

    #[must_use]
    pub fn reject() -> Self {
        Self::by_default(false)
    }

    #[must_use]
    pub fn by_default(accept: bool) -> Self {
        Self {
            accept,
            action: None,
            quality: 0,
        }
    }

    #[must_use]
    pub fn ignored_by(action: ActionId, quality: usize) -> Self {
        Self {
            accept: false,
            action: Some(action),
            quality,
        }
    }

    #[must_use]
    pub fn tag(&self) -> ActionTag {
        match self.action {
            Some(id) => ActionTag::Action(id),
            None => ActionTag::Default {
                accept: self.accept,
            },
        }
    }
}

/// Caller-supplied policy deciding which violations fail the gate.
pub trait Collector {
    fn classify(&self, violation: &Violation) -> Verdict;

    /// Every action registered with this collector, in registration order.
    fn actions(&self) -> &[Action];

    /// Registered actions that never decided a violation during the run.
    fn unused_actions(&self, counter: &UsageCounter) -> Vec<Action> {
        let known: Vec<ActionId> = self.actions().iter().map(Action::id).collect();
        let unused = counter.unused(&known);
        self.actions()
            .iter()
            .filter(|a| unused.contains(&a.id()))
            .cloned()
            .collect()
    }
}

/// Warns about actions that never matched; silent when there are none.
pub fn warn_unused(unused: &[Action]) {
    if unused.is_empty() {
        return;
    }
    let listing: Vec<String> = unused.iter().map(ToString::to_string).collect();
    tracing::warn!(
        count = unused.len(),
        "collector actions never matched a violation: {}",
        listing.join("; ")
    );
}

/// Accepts everything and registers no actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Collector for AcceptAll {
    fn classify(&self, _violation: &Violation) -> Verdict {
        Verdict::accept()
    }

    fn actions(&self) -> &[Action] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_follows_deciding_action() {
        assert_eq!(Verdict::accept().tag(), ActionTag::Default { accept: true });
        assert_eq!(Verdict::reject().tag(), ActionTag::Default { accept: false });
        assert_eq!(
            Verdict::ignored_by(ActionId(2), 7).tag(),
            ActionTag::Action(ActionId(2))
        );
    }

    #[test]
    fn accept_all_has_nothing_unused() {
        let counter = UsageCounter::new();
        assert!(AcceptAll.unused_actions(&counter).is_empty());
    }
}
