//! Bounded alert log with probabilistic derivation.
//!
//! Alerts are cosmetic flavor for the dashboard: each tick gets one uniform
//! draw and, above the configured threshold, a message naming a random
//! project and metric. There is no statistical test behind them.

use crate::core::ProjectName;
use rand::Rng;
use std::collections::VecDeque;

/// Capped FIFO log of alert messages.
#[derive(Debug, Clone)]
pub struct AlertLog {
    entries: VecDeque<String>,
    capacity: usize,
    threshold: f64,
}

impl AlertLog {
    /// Creates an empty log keeping at most `capacity` messages.
    pub fn new(capacity: usize, threshold: f64) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            threshold,
        }
    }

    /// Appends a message, evicting the oldest entry on overflow.
    pub fn push(&mut self, message: String) {
        self.entries.push_back(message);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Runs one tick's alert derivation against the given project names.
    ///
    /// Skips silently when no projects are tracked. Returns the raised
    /// message, if any.
    pub fn maybe_raise<R: Rng>(
        &mut self,
        rng: &mut R,
        project_names: &[ProjectName],
    ) -> Option<&str> {
        if project_names.is_empty() {
            return None;
        }
        if rng.gen::<f64>() <= self.threshold {
            return None;
        }

        let metric = if rng.gen_bool(0.5) {
            "utilization"
        } else {
            "efficiency"
        };
        let project = &project_names[rng.gen_range(0..project_names.len())];

        self.push(format!(
            "Alert: Unusual {} pattern detected in {}",
            metric, project
        ));
        self.entries.back().map(|s| s.as_str())
    }

    /// Iterates messages oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Owned copy of the log, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Current number of retained messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no alerts are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained messages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
