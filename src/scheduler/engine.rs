//! Scheduler engine and discipline selection.
//!
//! The engine owns a validated, pristine item set. Every run clones it into
//! a fresh working copy, so disciplines never observe each other's consumed
//! bursts or recorded times and the same engine can be run any number of
//! times, from any number of threads.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::metrics::{RunSummary, TimelineMetrics};
use super::mlfq::{self, MlfqQuanta};
use super::{check_quantum, non_preemptive, round_robin};
use crate::dispatching::{rules, RuleEngine};
use crate::error::{Result, SchedulerError};
use crate::models::{ItemId, Timeline, WorkItem};
use crate::validation::validate_items;

/// A dispatch discipline and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come-first-served, in input order.
    Fcfs,
    /// Shortest burst first, order fixed before the run.
    StaticSjf,
    /// Lowest priority value first, order fixed before the run.
    StaticPriority,
    /// Round robin with a fixed quantum.
    RoundRobin {
        /// Maximum units per dispatch.
        quantum: i64,
    },
    /// Two-level multilevel feedback queue.
    Mlfq(MlfqQuanta),
}

impl Algorithm {
    /// Display name reported in run summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::StaticSjf => "Static SJF",
            Self::StaticPriority => "Static Priority",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Mlfq(_) => "Multilevel Feedback Queue",
        }
    }

    /// Whether an item may be paused and resumed.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. } | Self::Mlfq(_))
    }

    /// Checks the discipline's parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::RoundRobin { quantum } => check_quantum("round-robin quantum", *quantum),
            Self::Mlfq(quanta) => quanta.validate(),
            Self::Fcfs | Self::StaticSjf | Self::StaticPriority => Ok(()),
        }
    }

    /// The five baseline runs: FCFS, static SJF, RR(2), static priority,
    /// MLFQ(2, 4).
    pub fn baseline() -> Vec<Self> {
        vec![
            Self::Fcfs,
            Self::StaticSjf,
            Self::RoundRobin { quantum: 2 },
            Self::StaticPriority,
            Self::Mlfq(MlfqQuanta::default()),
        ]
    }
}

/// Result of one discipline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRun {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// Items in input order with start/finish/waiting/turnaround set.
    pub items: Vec<WorkItem>,
    /// Every dispatched slice.
    pub timeline: Timeline,
    /// Averages and timeline statistics.
    pub summary: RunSummary,
}

impl ScheduleRun {
    /// Finds an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&WorkItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Item IDs in order of first dispatch.
    pub fn dispatch_order(&self) -> Vec<ItemId> {
        let mut order: Vec<ItemId> = Vec::with_capacity(self.items.len());
        for slice in &self.timeline.slices {
            if !order.contains(&slice.item_id) {
                order.push(slice.item_id);
            }
        }
        order
    }
}

/// Runs dispatch disciplines over one item set.
///
/// # Example
///
/// ```
/// use u_dispatch::models::WorkItem;
/// use u_dispatch::scheduler::SchedulerEngine;
///
/// let engine = SchedulerEngine::new(vec![
///     WorkItem::new(1, 0, 5),
///     WorkItem::new(2, 2, 3),
/// ])
/// .unwrap();
///
/// let run = engine.fcfs().unwrap();
/// assert_eq!(run.item(2).unwrap().start_time, Some(5));
/// assert!((run.summary.average_waiting_time - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SchedulerEngine {
    items: Vec<WorkItem>,
}

impl SchedulerEngine {
    /// Validates and stores the item set.
    ///
    /// Items are reset, so previously run items are accepted.
    ///
    /// # Errors
    /// `InvalidInput` listing every validation problem.
    pub fn new(mut items: Vec<WorkItem>) -> Result<Self> {
        if let Err(errors) = validate_items(&items) {
            warn!(problems = errors.len(), "rejected work item set");
            return Err(SchedulerError::InvalidInput(errors));
        }

        items.iter_mut().for_each(WorkItem::reset);
        debug!(items = items.len(), "scheduler engine ready");

        Ok(Self { items })
    }

    /// The pristine item set, in input order.
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// Runs one discipline on a fresh copy of the items.
    pub fn run(&self, algorithm: Algorithm) -> Result<ScheduleRun> {
        algorithm.validate()?;

        let mut items = self.items.clone();
        debug!(algorithm = algorithm.name(), items = items.len(), "starting run");

        let timeline = match algorithm {
            Algorithm::Fcfs => {
                let order: Vec<usize> = (0..items.len()).collect();
                non_preemptive::simulate(&mut items, &order)
            }
            Algorithm::StaticSjf => {
                let order = static_sjf_rules().sort_indices(&items);
                non_preemptive::simulate(&mut items, &order)
            }
            Algorithm::StaticPriority => {
                let order = static_priority_rules().sort_indices(&items);
                non_preemptive::simulate(&mut items, &order)
            }
            Algorithm::RoundRobin { quantum } => round_robin::simulate(&mut items, quantum)?,
            Algorithm::Mlfq(quanta) => mlfq::simulate(&mut items, quanta)?,
        };

        let metrics = TimelineMetrics::calculate(&mut items)?;
        let summary = RunSummary::new(algorithm.name(), &metrics, &timeline);

        info!(
            algorithm = algorithm.name(),
            average_waiting_time = summary.average_waiting_time,
            average_turnaround_time = summary.average_turnaround_time,
            makespan = summary.makespan,
            "run complete"
        );

        Ok(ScheduleRun {
            algorithm,
            items,
            timeline,
            summary,
        })
    }

    /// Runs each discipline in turn. Stops at the first failure.
    pub fn run_all(&self, algorithms: &[Algorithm]) -> Result<Vec<ScheduleRun>> {
        algorithms.iter().map(|&a| self.run(a)).collect()
    }

    /// First-come-first-served.
    pub fn fcfs(&self) -> Result<ScheduleRun> {
        self.run(Algorithm::Fcfs)
    }

    /// Static shortest-job-first.
    pub fn static_sjf(&self) -> Result<ScheduleRun> {
        self.run(Algorithm::StaticSjf)
    }

    /// Static priority.
    pub fn static_priority(&self) -> Result<ScheduleRun> {
        self.run(Algorithm::StaticPriority)
    }

    /// Round robin with the given quantum.
    pub fn round_robin(&self, quantum: i64) -> Result<ScheduleRun> {
        self.run(Algorithm::RoundRobin { quantum })
    }

    /// Two-level feedback queue with the given quanta.
    pub fn mlfq(&self, quanta: MlfqQuanta) -> Result<ScheduleRun> {
        self.run(Algorithm::Mlfq(quanta))
    }
}

/// (burst asc, arrival asc), input order on full ties.
fn static_sjf_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::ShortestBurst)
        .with_tie_breaker(rules::EarliestArrival)
}

/// (priority asc, arrival asc), input order on full ties.
fn static_priority_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::PriorityValue)
        .with_tie_breaker(rules::EarliestArrival)
}
