//! Current-state store for all tracked projects.
//!
//! Holds one [`ProjectMetrics`] record per project and mutates the bounded
//! fields in place on every simulation tick.

use crate::core::{DashError, ProjectMetrics, Result};
use rand::Rng;

/// Half-width of the uniform utilization delta per tick.
const UTILIZATION_DELTA: f64 = 5.0;
/// Half-width of the uniform efficiency delta per tick.
const EFFICIENCY_DELTA: f64 = 4.0;
/// Half-width of the uniform risk delta per tick.
const RISK_DELTA: f64 = 2.5;
/// Upper bound of the non-negative completion step per tick.
const COMPLETION_STEP: f64 = 2.0;

/// In-memory store of the current project snapshot.
#[derive(Debug, Clone)]
pub struct MetricsStore {
    projects: Vec<ProjectMetrics>,
}

impl MetricsStore {
    /// Creates a store from seed records, preserving insertion order.
    pub fn new(seed: Vec<ProjectMetrics>) -> Result<Self> {
        if seed.is_empty() {
            return Err(DashError::InvalidProject(
                "MetricsStore requires at least one project".to_string(),
            ));
        }
        Ok(Self { projects: seed })
    }

    /// Read access to all tracked projects in insertion order.
    pub fn projects(&self) -> &[ProjectMetrics] {
        &self.projects
    }

    /// Owned copy of the current state, for rendering and export.
    pub fn snapshot(&self) -> Vec<ProjectMetrics> {
        self.projects.clone()
    }

    /// Number of tracked projects. Fixed for the session.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True when the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Applies one simulation step to every project.
    ///
    /// Each delta is sampled independently per field per project. Bounded
    /// percentages are clamped to [0, 100]; completion only grows and caps
    /// at 100. Staff and equipment counts are never touched.
    pub fn apply_tick<R: Rng>(&mut self, rng: &mut R) -> &[ProjectMetrics] {
        for project in &mut self.projects {
            project.utilization =
                clamp_pct(project.utilization + symmetric_delta(rng, UTILIZATION_DELTA));
            project.efficiency =
                clamp_pct(project.efficiency + symmetric_delta(rng, EFFICIENCY_DELTA));
            project.completion =
                (project.completion + rng.gen_range(0.0..COMPLETION_STEP)).min(100.0);
            project.risk = clamp_pct(project.risk + symmetric_delta(rng, RISK_DELTA));
        }
        &self.projects
    }
}

/// Uniform delta in (-half_width, half_width).
fn symmetric_delta<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    rng.gen_range(-half_width..half_width)
}

fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
