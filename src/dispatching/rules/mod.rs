//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for items dispatched earlier.

use super::{DispatchingRule, RuleScore};
use crate::models::WorkItem;

/// Shortest Job First.
///
/// Scores by total requested processing time. Dispatching in this order
/// minimizes mean waiting time when every item is present at t=0.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        item.original_burst_time
    }
}

/// First In First Out.
///
/// Scores by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        item.arrival_time
    }
}

/// Priority value.
///
/// Scores by `item.priority` as-is: the lowest value is the most
/// important.
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl DispatchingRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        i64::from(item.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst() {
        let short = WorkItem::new(1, 0, 2);
        let long = WorkItem::new(2, 0, 9);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_shortest_burst_ignores_consumed_burst() {
        let mut served = WorkItem::new(1, 0, 8);
        served.burst_time = 1;
        assert_eq!(ShortestBurst.evaluate(&served), 8);
    }

    #[test]
    fn test_earliest_arrival() {
        let early = WorkItem::new(1, 0, 5);
        let late = WorkItem::new(2, 7, 1);
        assert!(EarliestArrival.evaluate(&early) < EarliestArrival.evaluate(&late));
    }

    #[test]
    fn test_priority_value_lower_first() {
        let urgent = WorkItem::new(1, 0, 5).with_priority(1);
        let routine = WorkItem::new(2, 0, 5).with_priority(4);
        let negative = WorkItem::new(3, 0, 5).with_priority(-2);
        assert!(PriorityValue.evaluate(&urgent) < PriorityValue.evaluate(&routine));
        assert!(PriorityValue.evaluate(&negative) < PriorityValue.evaluate(&urgent));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(EarliestArrival.name(), "FIFO");
        assert_eq!(PriorityValue.name(), "PRIORITY");
    }
}
