//! Single-resource dispatch simulation.
//!
//! Simulates how a pool of requests, each with an arrival time, a
//! processing demand, a priority and a deadline, is dispatched onto one
//! processing resource under classical disciplines, and measures the
//! resulting waiting and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WorkItem`, `Slice`, `Timeline`
//! - **`scheduler`**: `SchedulerEngine`, the five disciplines, run metrics
//! - **`dispatching`**: Static ordering rules behind SJF and priority
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times)
//! - **`config`**: Serde-backed simulation requests
//! - **`workload`**: Baseline and seeded random item sets
//!
//! # Example
//!
//! ```
//! use u_dispatch::scheduler::{Algorithm, SchedulerEngine};
//! use u_dispatch::workload::sample_items;
//!
//! let engine = SchedulerEngine::new(sample_items()).unwrap();
//! for run in engine.run_all(&Algorithm::baseline()).unwrap() {
//!     assert!(run.summary.average_turnaround_time >= run.summary.average_waiting_time);
//! }
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` per run start, `trace` per slice,
//! `info` per completed run). Installing a subscriber is up to the caller.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulerError};
