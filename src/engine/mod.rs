//! Simulation engine and its state stores.
//!
//! The [`Engine`] owns the metrics store, the rolling trend window and the
//! alert log, and advances all three in one synchronous [`Engine::tick`].
//! Timing lives outside the engine: [`runner::SimulationRunner`] drives
//! ticks on an interval, so the engine itself stays unit-testable without
//! fake clocks.

#![warn(missing_docs)]

pub mod alerts;
pub mod history;
pub mod runner;
pub mod store;

pub use alerts::AlertLog;
pub use history::HistoryBuffer;
pub use runner::SimulationRunner;
pub use store::MetricsStore;

use crate::core::{Config, ProjectMetrics, ProjectName, Result};
use rand::Rng;

/// One dashboard session's simulation state.
///
/// Constructed once per session and shared by reference with the rendering
/// layer. Stopping and restarting the tick source resumes from the current
/// in-memory state; nothing is persisted.
#[derive(Debug)]
pub struct Engine {
    store: MetricsStore,
    history: HistoryBuffer,
    alerts: AlertLog,
    tick_count: u64,
}

impl Engine {
    /// Creates an engine from config and seed projects.
    pub fn new(config: &Config, seed: Vec<ProjectMetrics>) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::with_rng(config, seed, &mut rng)
    }

    /// Creates an engine with a caller-supplied randomness source.
    pub fn with_rng<R: Rng>(
        config: &Config,
        seed: Vec<ProjectMetrics>,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self {
            store: MetricsStore::new(seed)?,
            history: HistoryBuffer::new(config.simulation.history_window, rng),
            alerts: AlertLog::new(
                config.simulation.alert_capacity,
                config.simulation.alert_threshold,
            ),
            tick_count: 0,
        })
    }

    /// Advances the simulation by one discrete step.
    pub fn tick(&mut self) {
        let mut rng = rand::thread_rng();
        self.tick_with_rng(&mut rng);
    }

    /// Advances the simulation using a caller-supplied randomness source.
    pub fn tick_with_rng<R: Rng>(&mut self, rng: &mut R) {
        // Alert text samples from the pre-tick project list.
        let pre_tick_names: Vec<ProjectName> = self
            .store
            .projects()
            .iter()
            .map(|p| p.name.clone())
            .collect();

        self.store.apply_tick(rng);
        self.history.append_tick(rng);

        if let Some(message) = self.alerts.maybe_raise(rng, &pre_tick_names) {
            tracing::debug!(tick = self.tick_count, "{}", message);
        }

        self.tick_count += 1;
    }

    /// The current project snapshot store.
    pub fn store(&self) -> &MetricsStore {
        &self.store
    }

    /// The rolling trend window.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The bounded alert log.
    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// Number of ticks applied this session.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_projects, ConfigBuilder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_engine(threshold: f64) -> Engine {
        let config = ConfigBuilder::new()
            .alert_threshold(threshold)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        Engine::with_rng(&config, default_projects(), &mut rng).unwrap()
    }

    #[test]
    fn test_tick_advances_all_state() {
        let mut engine = test_engine(0.8);
        let mut rng = StdRng::seed_from_u64(18);

        let history_before = engine.history().snapshot();
        engine.tick_with_rng(&mut rng);

        assert_eq!(engine.tick_count(), 1);
        assert_eq!(engine.history().len(), 30);
        assert_ne!(engine.history().snapshot(), history_before);
    }

    #[test]
    fn test_alert_names_reference_tracked_projects() {
        let mut engine = test_engine(0.0);
        let mut rng = StdRng::seed_from_u64(19);

        for _ in 0..10 {
            engine.tick_with_rng(&mut rng);
        }

        assert!(!engine.alerts().is_empty());
        for alert in engine.alerts().iter() {
            assert!(engine
                .store()
                .projects()
                .iter()
                .any(|p| alert.ends_with(p.name.as_str())));
        }
    }

    #[test]
    fn test_alert_log_bounded_across_ticks() {
        let mut engine = test_engine(0.0);
        let mut rng = StdRng::seed_from_u64(20);

        for _ in 0..50 {
            engine.tick_with_rng(&mut rng);
            assert!(engine.alerts().len() <= 5);
        }
        assert_eq!(engine.alerts().len(), 5);
    }
}
