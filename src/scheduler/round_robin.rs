//! Round-robin simulation.
//!
//! # Algorithm
//! 1. Seed one FIFO ready queue with every item in input order.
//! 2. Dequeue the head, idling the resource until it has arrived.
//! 3. Serve `min(quantum, remaining)` units.
//! 4. Requeue at the tail if work remains, otherwise record completion.
//!
//! Items are not gated on arrival: queue order alone decides who runs next.
//!
//! # Complexity
//! O(sum(ceil(burst / quantum))) dispatches.

use std::collections::VecDeque;

use tracing::trace;

use super::check_quantum;
use crate::error::Result;
use crate::models::{Slice, Timeline, WorkItem};

/// Runs `items` round-robin with a fixed quantum.
///
/// # Errors
/// `Configuration` if `quantum <= 0`.
pub(crate) fn simulate(items: &mut [WorkItem], quantum: i64) -> Result<Timeline> {
    check_quantum("round-robin quantum", quantum)?;

    let mut ready: VecDeque<usize> = (0..items.len()).collect();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    while let Some(idx) = ready.pop_front() {
        let item = &mut items[idx];
        clock = clock.max(item.arrival_time);
        item.mark_started(clock);

        let start = clock;
        clock += item.serve(quantum);
        timeline.push(Slice::new(item.id, start, clock));

        trace!(
            item = item.id,
            start,
            end = clock,
            remaining = item.burst_time,
            "round-robin slice"
        );

        if item.burst_time > 0 {
            ready.push_back(idx);
        } else {
            item.finish_time = Some(clock);
        }
    }

    Ok(timeline)
}
