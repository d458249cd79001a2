//! Static dispatching rules and rule engine.
//!
//! The sort-then-simulate disciplines (static SJF, static priority) fix
//! the whole dispatch order before the clock starts. That order comes from
//! a [`RuleEngine`]: a primary rule plus tie-breakers, evaluated lexically.
//!
//! # Usage
//!
//! ```
//! use u_dispatch::dispatching::{rules, RuleEngine};
//! use u_dispatch::models::WorkItem;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let items = vec![WorkItem::new(1, 0, 5), WorkItem::new(2, 2, 3)];
//! assert_eq!(engine.sort_indices(&items), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::WorkItem;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched earlier. Scores are exact integer keys, so
/// any two distinct descriptor values order distinctly.
pub type RuleScore = i64;

/// A rule that scores an item for static ordering.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules read only immutable item
/// descriptors, so the score of an item never changes during a run.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores an item.
    fn evaluate(&self, item: &WorkItem) -> RuleScore;
}
