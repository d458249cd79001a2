//! Rule engine for lexical multi-key ordering.
//!
//! Composes a primary dispatching rule with tie-breakers. The sort is
//! stable: items tied on every rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::WorkItem;

/// A composable rule engine for static dispatch ordering.
///
/// # Example
/// ```
/// use u_dispatch::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityValue)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts items into dispatch order.
    ///
    /// Returns indices into the input slice, first-dispatched first.
    pub fn sort_indices(&self, items: &[WorkItem]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&items[a], &items[b]));
        indices
    }

    fn compare(&self, a: &WorkItem, b: &WorkItem) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
