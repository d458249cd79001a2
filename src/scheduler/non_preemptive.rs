//! Non-preemptive run-to-completion simulation.
//!
//! Shared by FCFS, static SJF and static priority: the discipline only
//! decides the dispatch order, this loop advances the clock over it.
//!
//! # Algorithm
//! For each item in order: idle until it arrives, then run it to
//! completion in one slice.
//!
//! # Complexity
//! O(n) given the order.

use tracing::trace;

use crate::models::{Slice, Timeline, WorkItem};

/// Runs `items` in the given index order.
///
/// `order` must be a permutation of `0..items.len()`.
pub(crate) fn simulate(items: &mut [WorkItem], order: &[usize]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    for &idx in order {
        let item = &mut items[idx];
        clock = clock.max(item.arrival_time);
        item.mark_started(clock);

        let start = clock;
        let burst = item.burst_time;
        clock += item.serve(burst);
        item.finish_time = Some(clock);

        trace!(item = item.id, start, end = clock, "dispatched to completion");
        timeline.push(Slice::new(item.id, start, clock));
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_back_to_back() {
        let mut items = vec![WorkItem::new(1, 0, 5), WorkItem::new(2, 2, 3)];
        let timeline = simulate(&mut items, &identity(2));

        assert_eq!(items[0].start_time, Some(0));
        assert_eq!(items[0].finish_time, Some(5));
        // Arrived at 2, waits for item 1
        assert_eq!(items[1].start_time, Some(5));
        assert_eq!(items[1].finish_time, Some(8));
        assert_eq!(timeline.dispatch_count(), 2);
        assert!(items.iter().all(|i| i.burst_time == 0));
    }

    #[test]
    fn test_idle_gap_until_arrival() {
        let mut items = vec![WorkItem::new(1, 0, 2), WorkItem::new(2, 10, 3)];
        let timeline = simulate(&mut items, &identity(2));

        assert_eq!(items[1].start_time, Some(10));
        assert_eq!(items[1].finish_time, Some(13));
        assert_eq!(timeline.busy_time(), 5);
        assert_eq!(timeline.makespan(), 13);
    }

    #[test]
    fn test_custom_order() {
        let mut items = vec![WorkItem::new(1, 0, 4), WorkItem::new(2, 0, 1)];
        simulate(&mut items, &[1, 0]);

        assert_eq!(items[1].start_time, Some(0));
        assert_eq!(items[1].finish_time, Some(1));
        assert_eq!(items[0].start_time, Some(1));
        assert_eq!(items[0].finish_time, Some(5));
    }

    #[test]
    fn test_late_item_first_in_order() {
        // Order is followed even when it forces the resource to idle
        let mut items = vec![WorkItem::new(1, 0, 2), WorkItem::new(2, 6, 1)];
        simulate(&mut items, &[1, 0]);

        assert_eq!(items[1].start_time, Some(6));
        assert_eq!(items[0].start_time, Some(7));
        assert_eq!(items[0].finish_time, Some(9));
    }
}
