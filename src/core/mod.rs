//! Core domain models for the dashboard.
//!
//! This module contains the fundamental types shared by the simulation
//! engine, export and rendering layers.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, Theme};
pub use error::{DashError, Result};
pub use types::{
    default_projects, HistorySample, ProjectMetrics, ProjectName, ProjectStatus, RiskLevel,
};
