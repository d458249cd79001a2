//! Input validation for dispatch simulations.
//!
//! Checks structural integrity of a work item set before any run.
//! Detects:
//! - Empty item sets
//! - Duplicate IDs
//! - Negative arrival times
//! - Zero or negative burst times
//! - Sets whose latest possible completion overflows the clock
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::WorkItem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The item set is empty; averages are undefined.
    EmptyInput,
    /// Two items share the same ID.
    DuplicateId,
    /// An item arrives before t=0.
    NegativeArrival,
    /// An item requests no processing (or a negative amount).
    NonPositiveBurst,
    /// The latest arrival plus the total demand does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a work item set.
///
/// Checks:
/// 1. At least one item
/// 2. No duplicate item IDs
/// 3. Every arrival time is >= 0
/// 4. Every original burst time is > 0
/// 5. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value a run can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items(items: &[WorkItem]) -> ValidationResult {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Item set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Item {} arrives at negative time {}",
                    item.id, item.arrival_time
                ),
            ));
        }

        if item.original_burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Item {} has non-positive burst time {}",
                    item.id, item.original_burst_time
                ),
            ));
        }
    }

    if completion_bound(items).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any instant a run reaches: the resource never idles
/// past the latest arrival and is busy for exactly the total demand.
fn completion_bound(items: &[WorkItem]) -> Option<i64> {
    let latest_arrival = items.iter().map(|i| i.arrival_time.max(0)).max().unwrap_or(0);
    items
        .iter()
        .try_fold(latest_arrival, |acc, i| acc.checked_add(i.original_burst_time.max(0)))
}
