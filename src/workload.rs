//! Work item sets for simulations.
//!
//! - [`sample_items`]: the five-request baseline set.
//! - [`WorkloadGenerator`]: seeded random sets for comparisons and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SchedulerError};
use crate::models::{ItemId, WorkItem};

/// The five-request baseline set, `(id, arrival, burst, priority, deadline)`:
/// `(1,0,5,3,10) (2,2,3,1,7) (3,4,6,4,8) (4,6,2,2,5) (5,8,4,5,12)`.
pub fn sample_items() -> Vec<WorkItem> {
    let rows: [(ItemId, i64, i64, i32, i64); 5] = [
        (1, 0, 5, 3, 10),
        (2, 2, 3, 1, 7),
        (3, 4, 6, 4, 8),
        (4, 6, 2, 2, 5),
        (5, 8, 4, 5, 12),
    ];
    rows.into_iter()
        .map(|(id, arrival, burst, priority, deadline)| {
            WorkItem::new(id, arrival, burst)
                .with_priority(priority)
                .with_deadline(deadline)
        })
        .collect()
}

/// Seeded generator of valid, arrival-ordered item sets.
///
/// IDs run from 1. Arrivals start at 0 and grow by a random gap.
/// Each deadline is `arrival + burst + slack` with random slack.
///
/// # Example
/// ```
/// use u_dispatch::workload::WorkloadGenerator;
///
/// let items = WorkloadGenerator::new(8).with_seed(7).generate().unwrap();
/// assert_eq!(items.len(), 8);
/// assert!(items.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_interarrival: i64,
    min_burst: i64,
    max_burst: i64,
    min_priority: i32,
    max_priority: i32,
    max_slack: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` items with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_interarrival: 4,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
            max_slack: 10,
            seed: 0,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the largest gap between consecutive arrivals.
    pub fn with_max_interarrival(mut self, gap: i64) -> Self {
        self.max_interarrival = gap;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Sets the largest deadline slack.
    pub fn with_max_slack(mut self, slack: i64) -> Self {
        self.max_slack = slack;
        self
    }

    /// Generates the item set.
    ///
    /// # Errors
    /// `Configuration` if the count is zero or a range is empty or
    /// would produce invalid items.
    pub fn generate(&self) -> Result<Vec<WorkItem>> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival: i64 = 0;
        let mut items = Vec::with_capacity(self.count);

        for n in 0..self.count {
            if n > 0 {
                arrival += rng.random_range(0..=self.max_interarrival);
            }
            let burst = rng.random_range(self.min_burst..=self.max_burst);
            let priority = rng.random_range(self.min_priority..=self.max_priority);
            let slack = rng.random_range(0..=self.max_slack);

            let id = ItemId::try_from(n + 1)
                .map_err(|_| SchedulerError::configuration("workload too large for item IDs"))?;
            items.push(
                WorkItem::new(id, arrival, burst)
                    .with_priority(priority)
                    .with_deadline(arrival + burst + slack),
            );
        }

        Ok(items)
    }

    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(SchedulerError::configuration("workload count must be positive"));
        }
        if self.min_burst < 1 || self.min_burst > self.max_burst {
            return Err(SchedulerError::configuration(format!(
                "invalid burst range {}..={}",
                self.min_burst, self.max_burst
            )));
        }
        if self.min_priority > self.max_priority {
            return Err(SchedulerError::configuration(format!(
                "invalid priority range {}..={}",
                self.min_priority, self.max_priority
            )));
        }
        if self.max_interarrival < 0 || self.max_slack < 0 {
            return Err(SchedulerError::configuration(
                "interarrival gap and slack must be non-negative",
            ));
        }
        Ok(())
    }
}
