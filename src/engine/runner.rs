//! Periodic tick source for the simulation engine.
//!
//! The runner owns the timing the engine deliberately does not: `start()`
//! spawns an interval task that locks the shared engine and ticks it,
//! `stop()` cancels the task so no further ticks fire. A tick that already
//! holds the write lock runs to completion; there are no await points
//! inside a tick.

use super::Engine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Start/stop control around a shared [`Engine`].
pub struct SimulationRunner {
    engine: Arc<RwLock<Engine>>,
    tick_interval: Duration,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SimulationRunner {
    /// Creates a stopped runner around a shared engine.
    pub fn new(engine: Arc<RwLock<Engine>>, tick_interval: Duration) -> Self {
        Self {
            engine,
            tick_interval,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Starts the periodic tick source. No-op if already running.
    ///
    /// The first engine tick lands one full interval after start, so a
    /// start immediately followed by a stop leaves the engine untouched.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let engine = Arc::clone(&self.engine);
        let running = Arc::clone(&self.running);
        let tick_interval = self.tick_interval;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(tick_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // tokio intervals fire immediately; consume the zeroth tick.
            ticker.tick().await;

            while running.load(Ordering::Relaxed) {
                ticker.tick().await;
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                engine.write().await.tick();
            }
        }));

        tracing::info!(interval_ms = tick_interval.as_millis() as u64, "simulation started");
    }

    /// Stops the periodic tick source. No-op if already stopped.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        tracing::info!("simulation stopped");
    }

    /// Flips between running and stopped; returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
            false
        } else {
            self.start();
            true
        }
    }

    /// True while the periodic tick source is armed.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Drop for SimulationRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_projects, Config};

    fn shared_engine() -> Arc<RwLock<Engine>> {
        let config = Config::default();
        let engine = Engine::new(&config, default_projects()).unwrap();
        Arc::new(RwLock::new(engine))
    }

    #[tokio::test]
    async fn test_start_stop_transitions() {
        let mut runner = SimulationRunner::new(shared_engine(), Duration::from_secs(3600));
        assert!(!runner.is_running());

        runner.start();
        assert!(runner.is_running());

        // Second start is a no-op.
        runner.start();
        assert!(runner.is_running());

        runner.stop();
        assert!(!runner.is_running());

        // Second stop is a no-op.
        runner.stop();
        assert!(!runner.is_running());
    }

    #[tokio::test]
    async fn test_toggle() {
        let mut runner = SimulationRunner::new(shared_engine(), Duration::from_secs(3600));
        assert!(runner.toggle());
        assert!(runner.is_running());
        assert!(!runner.toggle());
        assert!(!runner.is_running());
    }

    #[tokio::test]
    async fn test_ticks_fire_while_running() {
        let engine = shared_engine();
        let mut runner = SimulationRunner::new(Arc::clone(&engine), Duration::from_millis(10));

        runner.start();
        tokio::time::sleep(Duration::from_millis(100)).await;
        runner.stop();

        let ticks = engine.read().await.tick_count();
        assert!(ticks > 0, "expected at least one tick, got {}", ticks);
    }

    #[tokio::test]
    async fn test_no_ticks_after_stop() {
        let engine = shared_engine();
        let mut runner = SimulationRunner::new(Arc::clone(&engine), Duration::from_millis(10));

        runner.start();
        tokio::time::sleep(Duration::from_millis(50)).await;
        runner.stop();

        let ticks_at_stop = engine.read().await.tick_count();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(engine.read().await.tick_count(), ticks_at_stop);
    }
}
