//! Violation post-processing: filter through the collector, count verdicts,
//! sort, and collect unused actions.

use std::cmp::Ordering;

use crate::collector::{warn_unused, Collector};
use crate::counter::UsageCounter;
use crate::types::{AnalysisResult, Violation};

/// Priority first (most severe first), then rule name.
#[must_use]
pub fn compare_violations(a: &Violation, b: &Violation) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.rule_name().cmp(b.rule_name()))
}

pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(compare_violations);
}

/// Runs the collector over `violations` and packages the accepted ones.
pub fn process_violations<I, C>(violations: I, collector: &C) -> AnalysisResult
where
    I: IntoIterator<Item = Violation>,
    C: Collector + ?Sized,
{
    let (result, _) = process_with_counter(violations, collector);
    result
}

/// Same as [`process_violations`], also handing back the usage counter.
pub fn process_with_counter<I, C>(violations: I, collector: &C) -> (AnalysisResult, UsageCounter)
where
    I: IntoIterator<Item = Violation>,
    C: Collector + ?Sized,
{
    let mut counter = UsageCounter::new();
    let mut accepted = Vec::new();

    for violation in violations {
        if counter.record(&collector.classify(&violation)) {
            accepted.push(violation);
        }
    }

    sort_violations(&mut accepted);
    let unused = collector.unused_actions(&counter);
    warn_unused(&unused);

    tracing::debug!(
        processed = counter.total(),
        accepted = accepted.len(),
        unused = unused.len(),
        "post-processed violations"
    );

    (AnalysisResult::new(accepted, unused), counter)
}
