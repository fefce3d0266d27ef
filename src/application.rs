//! Main application entry point for the dashboard.

use crate::core::{default_projects, Config, ProjectMetrics, Result};
use crate::engine::{Engine, SimulationRunner};
use crate::tui;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Main application struct that wires the engine, runner and UI together.
pub struct Application {
    /// Shared simulation engine, constructed once per session
    engine: Arc<RwLock<Engine>>,
    /// Application configuration
    config: Config,
}

impl Application {
    /// Create a new Application with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let engine = Engine::new(&config, default_projects())?;

        Ok(Self {
            engine: Arc::new(RwLock::new(engine)),
            config,
        })
    }

    /// Run the interactive dashboard until the user quits.
    pub async fn run(self) -> Result<()> {
        tracing::info!("Starting resource dashboard");

        let runner = SimulationRunner::new(
            Arc::clone(&self.engine),
            self.config.simulation.tick_interval,
        );

        tui::run_tui(self.engine, runner, self.config).await
    }

    /// Apply `ticks` simulation steps without a UI and return the snapshot.
    pub async fn run_headless(&self, ticks: u64) -> Result<Vec<ProjectMetrics>> {
        tracing::info!(ticks, "Running headless simulation");

        let mut engine = self.engine.write().await;
        for _ in 0..ticks {
            engine.tick();
        }
        Ok(engine.store().snapshot())
    }

    /// Get a handle to the shared engine.
    pub fn engine(&self) -> Arc<RwLock<Engine>> {
        Arc::clone(&self.engine)
    }
}
