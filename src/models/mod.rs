//! Dispatch simulation domain models.
//!
//! Provides the data types shared by every discipline: the work item
//! competing for the resource and the timeline a run produces.
//!
//! # Domain Mappings
//!
//! | u-dispatch | Clinic | Operating system | Help desk |
//! |------------|--------|------------------|-----------|
//! | WorkItem | Appointment | Process | Ticket |
//! | Slice | Consultation slot | CPU time slice | Agent session |
//! | Timeline | Day plan | Gantt chart | Shift log |

mod item;
mod timeline;

pub use item::{ItemId, WorkItem};
pub use timeline::{QueueLevel, Slice, Timeline};
