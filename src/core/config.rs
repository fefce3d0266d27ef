//! Configuration management for the dashboard.
//!
//! Supports YAML file configuration with environment and CLI overrides,
//! plus validation and sensible defaults.

use crate::core::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation configuration
    pub simulation: SimulationConfig,
    /// UI configuration
    pub ui: UiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Debug mode
    #[serde(skip)]
    pub debug: bool,
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Interval between simulation ticks
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    /// Number of samples kept in the rolling trend window
    pub history_window: usize,
    /// Maximum alerts retained, oldest evicted first
    pub alert_capacity: usize,
    /// Uniform draw in [0, 1) must exceed this for a tick to raise an alert
    pub alert_threshold: f64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI refresh rate
    #[serde(with = "humantime_serde")]
    pub refresh_rate: Duration,
    /// Color theme
    pub theme: Theme,
    /// Enable vim keybindings
    pub vim_mode: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
}

/// Color themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark terminal background
    Dark,
    /// Dark text on a light terminal background
    Light,
}

/// Log levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level logging
    Trace,
    /// Debug-level logging
    Debug,
    /// Info-level logging
    Info,
    /// Warn-level logging
    Warn,
    /// Error-level logging
    Error,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simulation: SimulationConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            debug: false,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            tick_interval: Duration::from_millis(1000),
            history_window: 30,
            alert_capacity: 5,
            alert_threshold: 0.8,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            refresh_rate: Duration::from_millis(100),
            theme: Theme::Dark,
            vim_mode: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Result<Self> {
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.simulation.tick_interval.is_zero() {
            return Err(DashError::config("tick_interval must be greater than 0"));
        }

        if self.simulation.history_window == 0 {
            return Err(DashError::config("history_window must be greater than 0"));
        }

        if self.simulation.alert_capacity == 0 {
            return Err(DashError::config("alert_capacity must be greater than 0"));
        }

        if !(0.0..=1.0).contains(&self.simulation.alert_threshold) {
            return Err(DashError::config(format!(
                "alert_threshold must be between 0 and 1, got {}",
                self.simulation.alert_threshold
            )));
        }

        if self.ui.refresh_rate.is_zero() {
            return Err(DashError::config("refresh_rate must be greater than 0"));
        }

        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing filter string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    /// Load configuration from YAML string
    pub fn from_yaml(mut self, yaml: &str) -> Result<Self> {
        self.config = serde_yaml::from_str(yaml)
            .map_err(|e| DashError::config(format!("Failed to parse YAML config: {}", e)))?;
        Ok(self)
    }

    /// Set the tick interval
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.simulation.tick_interval = interval;
        self
    }

    /// Set the trend window size
    pub fn history_window(mut self, window: usize) -> Self {
        self.config.simulation.history_window = window;
        self
    }

    /// Set the alert log capacity
    pub fn alert_capacity(mut self, capacity: usize) -> Self {
        self.config.simulation.alert_capacity = capacity;
        self
    }

    /// Set the alert threshold
    pub fn alert_threshold(mut self, threshold: f64) -> Self {
        self.config.simulation.alert_threshold = threshold;
        self
    }

    /// Set debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
