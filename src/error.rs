//! Error types for dispatch simulation.
//!
//! Every fallible operation in the crate returns [`SchedulerError`]. Runs are
//! pure and deterministic, so none of these conditions are retryable: a run
//! either completes for every item or fails before producing output.

use thiserror::Error;

use crate::models::ItemId;
use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;

/// Simulation errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SchedulerError {
    /// Invalid algorithm parameters (e.g. a non-positive quantum) or a
    /// malformed configuration document.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The item set failed validation. Holds every detected problem.
    #[error("invalid input: {}", join_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An item reached metrics computation without a start or finish time.
    #[error("invalid state for item {item_id}: {reason}")]
    InvalidState {
        /// Offending item.
        item_id: ItemId,
        /// What was missing.
        reason: String,
    },
}

impl SchedulerError {
    /// Create a configuration error
    #[inline]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid state error
    #[inline]
    pub fn invalid_state(item_id: ItemId, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            item_id,
            reason: reason.into(),
        }
    }

    /// Validation problems carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(format!("malformed document: {err}"))
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
