//! Simulation configuration and requests.
//!
//! A [`SimulationRequest`] bundles an item set with the disciplines to run
//! over it. Both deserialize from JSON so a simulation can be described as
//! a document:
//!
//! ```
//! use u_dispatch::config::SimulationRequest;
//!
//! let request = SimulationRequest::from_json(r#"{
//!     "items": [
//!         {"id": 1, "arrival_time": 0, "burst_time": 5, "priority": 3, "deadline": 10},
//!         {"id": 2, "arrival_time": 2, "burst_time": 3, "priority": 1}
//!     ],
//!     "config": {"algorithms": [{"kind": "fcfs"}, {"kind": "round_robin", "quantum": 2}]}
//! }"#).unwrap();
//!
//! let runs = request.run().unwrap();
//! assert_eq!(runs.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::WorkItem;
use crate::scheduler::{Algorithm, ScheduleRun, SchedulerEngine};

/// Which disciplines to run, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Disciplines with their parameters.
    pub algorithms: Vec<Algorithm>,
}

impl SimulationConfig {
    /// Creates a configuration running exactly `algorithms`.
    pub fn from_algorithms(algorithms: Vec<Algorithm>) -> Self {
        Self { algorithms }
    }

    /// Appends a discipline.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks at least one discipline is configured and all parameters
    /// are valid.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(SchedulerError::configuration("no algorithms configured"));
        }
        self.algorithms.iter().try_for_each(Algorithm::validate)
    }
}

impl Default for SimulationConfig {
    /// The five baseline runs.
    fn default() -> Self {
        Self::from_algorithms(Algorithm::baseline())
    }
}

/// An item set plus the disciplines to run over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Items to dispatch, in admission order.
    pub items: Vec<WorkItem>,
    /// Disciplines to run. Defaults to the baseline set.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request running the baseline disciplines.
    pub fn new(items: Vec<WorkItem>) -> Self {
        Self {
            items,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a JSON request and validates its configuration.
    ///
    /// Items are validated when the request is run.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.config.validate()?;
        Ok(request)
    }

    /// Runs every configured discipline.
    pub fn run(&self) -> Result<Vec<ScheduleRun>> {
        self.config.validate()?;
        let engine = SchedulerEngine::new(self.items.clone())?;
        engine.run_all(&self.config.algorithms)
    }
}
