//! Rolling aggregate trend window.
//!
//! A fixed-capacity FIFO of [`HistorySample`] values. The window is seeded
//! with a smooth-plus-noise curve so the trend view has shape before the
//! first tick; every tick afterwards perturbs the newest sample and evicts
//! the oldest.

use crate::core::HistorySample;
use chrono::Local;
use rand::Rng;
use std::collections::VecDeque;

/// Date label format used for trend samples.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Half-width of the uniform efficiency delta per tick.
const EFFICIENCY_DELTA: f64 = 2.5;
/// Half-width of the uniform utilization delta per tick.
const UTILIZATION_DELTA: f64 = 2.5;
/// Half-width of the uniform risk delta per tick.
const RISK_DELTA: f64 = 1.5;

/// Fixed-length rolling window of aggregate trend samples.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<HistorySample>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Creates a window seeded with exactly `capacity` synthetic samples.
    ///
    /// Samples are dated on consecutive prior days ending today, oldest
    /// first. Each field follows a distinct periodic baseline with uniform
    /// noise so the three trends stay visually distinct but correlated.
    pub fn new<R: Rng>(capacity: usize, rng: &mut R) -> Self {
        let today = Local::now().date_naive();
        let mut samples = VecDeque::with_capacity(capacity);

        for i in 0..capacity {
            let day = today - chrono::Duration::days((capacity - 1 - i) as i64);
            let i = i as f64;
            samples.push_back(HistorySample {
                date: day.format(DATE_FORMAT).to_string(),
                efficiency: 65.0 + (i / 3.0).sin() * 15.0 + rng.gen_range(0.0..5.0),
                utilization: 70.0 + (i / 4.0).cos() * 20.0 + rng.gen_range(0.0..5.0),
                risk: 30.0 + (i / 2.0).sin() * 10.0 + rng.gen_range(0.0..5.0),
            });
        }

        Self { samples, capacity }
    }

    /// Derives one new sample from the newest entry and evicts the oldest.
    ///
    /// No-op on an empty window. Trend values are not clamped, unlike the
    /// per-project metrics, so they may drift outside [0, 100].
    pub fn append_tick<R: Rng>(&mut self, rng: &mut R) {
        let Some(last) = self.samples.back() else {
            return;
        };

        let next = HistorySample {
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            efficiency: last.efficiency + symmetric_delta(rng, EFFICIENCY_DELTA),
            utilization: last.utilization + symmetric_delta(rng, UTILIZATION_DELTA),
            risk: last.risk + symmetric_delta(rng, RISK_DELTA),
        };

        self.samples.push_back(next);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Iterates samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }

    /// The most recently appended sample.
    pub fn latest(&self) -> Option<&HistorySample> {
        self.samples.back()
    }

    /// Owned copy of the window, oldest first.
    pub fn snapshot(&self) -> Vec<HistorySample> {
        self.samples.iter().cloned().collect()
    }

    /// Current number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configured window size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Uniform delta in (-half_width, half_width).
fn symmetric_delta<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    rng.gen_range(-half_width..half_width)
}
