//! Work item model.
//!
//! A work item is one request competing for the single processing resource
//! (an appointment, a ticket, a job). It carries immutable descriptors set
//! at creation and mutable run state written by a simulation.
//!
//! # Time Representation
//! All times are integer units of a logical clock starting at t=0.
//! The consumer defines what one unit means (minutes, slots, ticks).

use serde::{Deserialize, Serialize};

/// Stable work item identifier.
pub type ItemId = u32;

/// A request to be dispatched onto the resource.
///
/// `burst_time` is the *remaining* demand and is consumed by preemptive
/// runs; `original_burst_time` keeps the initial demand so a run can be
/// measured and the item reset afterwards.
///
/// # Serialization
/// Serializing writes the full run state. Deserializing is input-only: it
/// reads the descriptors and yields an unscheduled item, so a serialized
/// run item comes back reset. Run fields in the input are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkItemDescriptor")]
pub struct WorkItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Instant the item becomes eligible.
    pub arrival_time: i64,
    /// Remaining processing units.
    pub burst_time: i64,
    /// Processing units requested at creation.
    pub original_burst_time: i64,
    /// Dispatch precedence (lower = more important).
    pub priority: i32,
    /// Latest desired completion. Carried through, not used for dispatch.
    pub deadline: Option<i64>,
    /// Instant of first dispatch. `None` until scheduled.
    pub start_time: Option<i64>,
    /// Instant the burst was fully consumed. `None` until complete.
    pub finish_time: Option<i64>,
    /// `start_time - arrival_time`, written by metrics.
    pub waiting_time: Option<i64>,
    /// `finish_time - arrival_time`, written by metrics.
    pub turnaround_time: Option<i64>,
}

/// Input shape of a work item: the static descriptors only.
///
/// `original_burst_time`, when present (serialized run output), is the
/// demand; `burst_time` there is only what remained.
#[derive(Debug, Clone, Deserialize)]
struct WorkItemDescriptor {
    id: ItemId,
    arrival_time: i64,
    burst_time: i64,
    #[serde(default)]
    original_burst_time: Option<i64>,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    deadline: Option<i64>,
}

impl From<WorkItemDescriptor> for WorkItem {
    fn from(d: WorkItemDescriptor) -> Self {
        let demand = d.original_burst_time.unwrap_or(d.burst_time);
        let mut item = WorkItem::new(d.id, d.arrival_time, demand).with_priority(d.priority);
        item.deadline = d.deadline;
        item
    }
}

impl WorkItem {
    /// Creates an unscheduled item with priority 0 and no deadline.
    pub fn new(id: ItemId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            original_burst_time: burst_time,
            priority: 0,
            deadline: None,
            start_time: None,
            finish_time: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Sets the dispatch priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Restores the item to its pre-run state.
    ///
    /// Remaining burst returns to the original demand and all run
    /// fields are cleared.
    pub fn reset(&mut self) {
        self.burst_time = self.original_burst_time;
        self.start_time = None;
        self.finish_time = None;
        self.waiting_time = None;
        self.turnaround_time = None;
    }

    /// Whether the item has been dispatched at least once.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the item's burst has been fully consumed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Records the first dispatch. Later calls are ignored.
    pub(crate) fn mark_started(&mut self, at: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(at);
        }
    }

    /// Serves up to `quantum` units and returns the units actually served.
    ///
    /// The slice never exceeds the remaining burst.
    pub(crate) fn serve(&mut self, quantum: i64) -> i64 {
        let slice = quantum.min(self.burst_time);
        self.burst_time -= slice;
        slice
    }
}
