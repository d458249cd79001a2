//! Run quality metrics.
//!
//! Computes per-item and average waiting/turnaround times from a completed
//! run, and the summary record reported for each discipline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | start - arrival |
//! | Turnaround time | finish - arrival |
//! | Makespan | Latest slice end |
//! | Utilization | Busy time / makespan |
//! | Preemptions | Dispatches - items |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{Timeline, WorkItem};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Average waiting and turnaround time over a completed item set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineMetrics {
    /// Mean of `start - arrival`.
    pub average_waiting_time: f64,
    /// Mean of `finish - arrival`.
    pub average_turnaround_time: f64,
}

impl TimelineMetrics {
    /// Computes per-item waiting/turnaround times and their means.
    ///
    /// Writes `waiting_time` and `turnaround_time` onto each item.
    /// Nothing is written if any item is incomplete.
    ///
    /// # Errors
    /// - `InvalidInput` if `items` is empty.
    /// - `InvalidState` if any item has no start or finish time.
    pub fn calculate(items: &mut [WorkItem]) -> Result<Self> {
        if items.is_empty() {
            return Err(SchedulerError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "Cannot compute metrics over an empty item set",
            )]));
        }

        for item in items.iter() {
            if item.start_time.is_none() {
                return Err(SchedulerError::invalid_state(item.id, "start time unset"));
            }
            if item.finish_time.is_none() {
                return Err(SchedulerError::invalid_state(item.id, "finish time unset"));
            }
        }

        // Each value fits in i64; their sum may not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;

        for item in items.iter_mut() {
            if let (Some(start), Some(finish)) = (item.start_time, item.finish_time) {
                let waiting = start - item.arrival_time;
                let turnaround = finish - item.arrival_time;
                item.waiting_time = Some(waiting);
                item.turnaround_time = Some(turnaround);
                total_waiting += i128::from(waiting);
                total_turnaround += i128::from(turnaround);
            }
        }

        let n = items.len() as f64;
        Ok(Self {
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
        })
    }
}

/// Summary record of one discipline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Discipline name (e.g. "FCFS").
    pub algorithm: String,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Latest completion.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the resource was busy.
    pub utilization: f64,
    /// Number of slices dispatched.
    pub dispatches: usize,
    /// Dispatches that did not complete their item.
    pub preemptions: usize,
}

impl RunSummary {
    /// Builds a summary from computed metrics and the run's timeline.
    pub fn new(algorithm: impl Into<String>, metrics: &TimelineMetrics, timeline: &Timeline) -> Self {
        Self {
            algorithm: algorithm.into(),
            average_waiting_time: metrics.average_waiting_time,
            average_turnaround_time: metrics.average_turnaround_time,
            makespan: timeline.makespan(),
            utilization: timeline.utilization(),
            dispatches: timeline.dispatch_count(),
            preemptions: timeline.preemption_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    fn completed(id: u32, arrival: i64, burst: i64, start: i64, finish: i64) -> WorkItem {
        let mut item = WorkItem::new(id, arrival, burst);
        item.start_time = Some(start);
        item.finish_time = Some(finish);
        item.burst_time = 0;
        item
    }

    #[test]
    fn test_metrics_basic() {
        let mut items = vec![
            completed(1, 0, 5, 0, 5),
            completed(2, 2, 3, 5, 8),
            completed(3, 4, 6, 8, 14),
            completed(4, 6, 2, 14, 16),
            completed(5, 8, 4, 16, 20),
        ];

        let m = TimelineMetrics::calculate(&mut items).unwrap();
        assert!((m.average_waiting_time - 4.6).abs() < 1e-10); // (0+3+4+8+8)/5
        assert!((m.average_turnaround_time - 8.6).abs() < 1e-10); // (5+6+10+10+12)/5
        assert_eq!(items[1].waiting_time, Some(3));
        assert_eq!(items[1].turnaround_time, Some(6));
    }

    #[test]
    fn test_metrics_totals_exceed_i64() {
        let mut items = vec![
            completed(1, 0, 5, i64::MAX - 10, i64::MAX - 5),
            completed(2, 0, 5, i64::MAX - 5, i64::MAX),
        ];

        let m = TimelineMetrics::calculate(&mut items).unwrap();
        let expected = (i64::MAX as f64) - 7.5;
        assert!((m.average_waiting_time - expected).abs() / expected < 1e-12);
        assert_eq!(items[1].turnaround_time, Some(i64::MAX));
    }

    #[test]
    fn test_metrics_empty() {
        let err = TimelineMetrics::calculate(&mut []).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidInput(_)));
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_metrics_unset_start() {
        let mut items = vec![completed(1, 0, 2, 0, 2), WorkItem::new(2, 0, 3)];

        let err = TimelineMetrics::calculate(&mut items).unwrap_err();
        assert_eq!(err, SchedulerError::invalid_state(2, "start time unset"));
        // No partial writes
        assert_eq!(items[0].waiting_time, None);
    }

    #[test]
    fn test_metrics_unset_finish() {
        let mut item = WorkItem::new(4, 1, 3);
        item.start_time = Some(1);

        let err = TimelineMetrics::calculate(&mut [item]).unwrap_err();
        assert_eq!(err, SchedulerError::invalid_state(4, "finish time unset"));
    }

    #[test]
    fn test_summary_from_timeline() {
        let mut items = vec![completed(1, 0, 3, 0, 5), completed(2, 1, 2, 2, 4)];
        let metrics = TimelineMetrics::calculate(&mut items).unwrap();

        let mut timeline = Timeline::new();
        timeline.push(Slice::new(1, 0, 2));
        timeline.push(Slice::new(2, 2, 4));
        timeline.push(Slice::new(1, 4, 5));

        let summary = RunSummary::new("Round Robin", &metrics, &timeline);
        assert_eq!(summary.algorithm, "Round Robin");
        assert_eq!(summary.makespan, 5);
        assert_eq!(summary.dispatches, 3);
        assert_eq!(summary.preemptions, 1);
        assert!((summary.utilization - 1.0).abs() < 1e-10);
        assert!((summary.average_waiting_time - 0.5).abs() < 1e-10); // (0+1)/2
        assert!((summary.average_turnaround_time - 4.0).abs() < 1e-10); // (5+3)/2
    }
}
