//! Dispatch timeline model.
//!
//! A timeline is the ordered record of every slice a run granted on the
//! resource: a Gantt chart of a single machine. Non-preemptive runs produce
//! one slice per item; preemptive runs produce one slice per dispatch.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ItemId;

/// Ready queue a multilevel run drew an item from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueLevel {
    /// Short-quantum, high-precedence queue.
    High,
    /// Long-quantum queue, served only when `High` is empty.
    Low,
}

/// One contiguous dispatch of one item.
///
/// Covers `[start, end)` on the logical clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Dispatched item.
    pub item_id: ItemId,
    /// Clock value when the slice began.
    pub start: i64,
    /// Clock value when the slice ended.
    pub end: i64,
    /// Source queue for multilevel runs; `None` for single-queue disciplines.
    pub queue: Option<QueueLevel>,
}

impl Slice {
    /// Creates a single-queue slice.
    pub fn new(item_id: ItemId, start: i64, end: i64) -> Self {
        Self {
            item_id,
            start,
            end,
            queue: None,
        }
    }

    /// Tags the slice with its source queue.
    pub fn with_queue(mut self, queue: QueueLevel) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Units served in this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// All slices of one run, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in the order they were dispatched.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Slices granted to one item, in dispatch order.
    pub fn slices_for(&self, item_id: ItemId) -> impl Iterator<Item = &Slice> + '_ {
        self.slices.iter().filter(move |s| s.item_id == item_id)
    }

    /// Total units an item was served.
    pub fn service_time(&self, item_id: ItemId) -> i64 {
        self.slices_for(item_id).map(Slice::duration).sum()
    }

    /// Number of dispatches.
    pub fn dispatch_count(&self) -> usize {
        self.slices.len()
    }

    /// Dispatches that did not run an item to completion.
    pub fn preemption_count(&self) -> usize {
        let distinct: HashSet<ItemId> = self.slices.iter().map(|s| s.item_id).collect();
        self.slices.len() - distinct.len()
    }

    /// Latest slice end. Zero for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Units the resource spent serving items.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Busy time over makespan, in `0.0..=1.0`.
    ///
    /// Returns 0.0 for an empty timeline.
    pub fn utilization(&self) -> f64 {
        let horizon = self.makespan();
        if horizon <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / horizon as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(Slice::new(1, 0, 2));
        t.push(Slice::new(2, 4, 6));
        t.push(Slice::new(1, 6, 9));
        t
    }

    #[test]
    fn test_timeline_makespan() {
        assert_eq!(sample_timeline().makespan(), 9);
    }

    #[test]
    fn test_service_time() {
        let t = sample_timeline();
        assert_eq!(t.service_time(1), 5);
        assert_eq!(t.service_time(2), 2);
        assert_eq!(t.service_time(99), 0);
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        let starts: Vec<i64> = t.slices_for(1).map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 6]);
    }

    #[test]
    fn test_counts() {
        let t = sample_timeline();
        assert_eq!(t.dispatch_count(), 3);
        assert_eq!(t.preemption_count(), 1);
    }

    #[test]
    fn test_utilization_with_idle_gap() {
        let t = sample_timeline();
        // busy 7 over horizon 9; idle [2, 4)
        assert_eq!(t.busy_time(), 7);
        assert!((t.utilization() - 7.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_slice_queue_tag() {
        let s = Slice::new(3, 0, 4).with_queue(QueueLevel::Low);
        assert_eq!(s.queue, Some(QueueLevel::Low));
        assert_eq!(s.duration(), 4);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.dispatch_count(), 0);
        assert_eq!(t.preemption_count(), 0);
        assert!((t.utilization() - 0.0).abs() < 1e-10);
    }
}
