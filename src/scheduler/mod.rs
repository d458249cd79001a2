//! Dispatch disciplines and run metrics.
//!
//! Every discipline is a deterministic simulation over a logical clock on a
//! single resource. `SchedulerEngine` validates the item set once and runs
//! each discipline on an independent, reset copy.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Dispatch order |
//! |------------|-----------|----------------|
//! | FCFS | no | input order |
//! | Static SJF | no | (burst, arrival), fixed up front |
//! | Static Priority | no | (priority, arrival), fixed up front |
//! | Round Robin | yes | FIFO rotation, fixed quantum |
//! | MLFQ | yes | two FIFO levels, two quanta |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

mod engine;
mod metrics;
mod mlfq;
mod non_preemptive;
mod round_robin;

pub use engine::{Algorithm, ScheduleRun, SchedulerEngine};
pub use metrics::{RunSummary, TimelineMetrics};
pub use mlfq::MlfqQuanta;

use crate::error::{Result, SchedulerError};

/// Rejects non-positive quanta.
fn check_quantum(label: &str, quantum: i64) -> Result<()> {
    if quantum <= 0 {
        return Err(SchedulerError::configuration(format!(
            "{label} must be positive, got {quantum}"
        )));
    }
    Ok(())
}
