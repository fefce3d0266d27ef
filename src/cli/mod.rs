//! Command-line interface for the dashboard.
//!
//! Run `resdash` with no arguments for the interactive TUI with sensible
//! defaults; `--headless` runs a batch simulation and prints or writes the
//! export artifact instead.

use crate::application::Application;
use crate::core::{Config, DashError, Result};
use crate::export::{ExportFormat, SnapshotExporter};
use clap::Parser;
use std::path::PathBuf;

/// Terminal-native resource utilization dashboard with a simulated feed
#[derive(Parser, Debug)]
#[command(name = "resdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Simulation tick interval in milliseconds
    #[arg(long, env = "RESDASH_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Rolling trend window size in samples
    #[arg(long, env = "RESDASH_WINDOW")]
    pub window: Option<usize>,

    /// Configuration file path (default: ~/.config/resdash/config.yaml)
    #[arg(short, long, env = "RESDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "RESDASH_DEBUG")]
    pub debug: bool,

    /// Run a batch simulation without the terminal UI
    #[arg(long, env = "RESDASH_HEADLESS")]
    pub headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value = "60")]
    pub ticks: u64,

    /// Write the headless export to this file instead of stdout
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export format for headless mode (csv or json)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Validate configuration and exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Load configuration with proper precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest priority)
    pub async fn load_config(&self) -> Result<Config> {
        use crate::core::config::ConfigBuilder;

        let mut builder = ConfigBuilder::new();

        let config_path = if let Some(path) = &self.config {
            path.clone()
        } else {
            let default_path = dirs::config_dir()
                .map(|d| d.join("resdash").join("config.yaml"))
                .unwrap_or_else(|| PathBuf::from("~/.config/resdash/config.yaml"));

            if default_path.exists() {
                default_path
            } else {
                return self.build_config_from_args(builder);
            }
        };

        match tokio::fs::read_to_string(&config_path).await {
            Ok(content) => {
                builder = builder.from_yaml(&content)?;
                tracing::info!("Loaded configuration from: {:?}", config_path);
            },
            Err(e) if self.config.is_some() => {
                return Err(DashError::config(format!(
                    "Failed to read config file {:?}: {}",
                    config_path, e
                )));
            },
            Err(_) => {
                tracing::debug!("No config file found at {:?}, using defaults", config_path);
            },
        }

        self.build_config_from_args(builder)
    }

    fn build_config_from_args(
        &self,
        mut builder: crate::core::config::ConfigBuilder,
    ) -> Result<Config> {
        if let Some(ms) = self.interval_ms {
            builder = builder.tick_interval(std::time::Duration::from_millis(ms));
        }
        if let Some(window) = self.window {
            builder = builder.history_window(window);
        }

        builder = builder.debug(self.debug);

        builder.build()
    }

    /// Initialize logging with precedence: debug flag, env var, config file.
    pub fn init_logging(&self, config: &Config) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let env_log_level = std::env::var("RESDASH_LOG_LEVEL")
            .unwrap_or_else(|_| config.logging.level.as_str().to_string());
        let log_level = if self.debug {
            "debug"
        } else {
            env_log_level.as_str()
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // The alternate screen owns stdout while the TUI runs; keep the
        // interactive format minimal.
        let fmt_layer = if self.headless {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .compact()
        } else {
            tracing_subscriber::fmt::layer().with_target(false).compact()
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| DashError::config(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }
}

/// Execute the dashboard application.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.load_config().await?;
    cli.init_logging(&config)?;

    if cli.check_config {
        config.validate()?;
        println!("Configuration is valid!");
        println!("  Tick interval: {:?}", config.simulation.tick_interval);
        println!("  History window: {}", config.simulation.history_window);
        println!("  Alert capacity: {}", config.simulation.alert_capacity);
        println!("  Alert threshold: {}", config.simulation.alert_threshold);
        return Ok(());
    }

    let app = Application::new(config)?;

    if cli.headless {
        let format: ExportFormat = cli
            .format
            .parse()
            .map_err(DashError::export)?;

        let snapshot = app.run_headless(cli.ticks).await?;
        let exporter = SnapshotExporter::new(&snapshot);
        let content = exporter.export(format)?;
        exporter.write_output(&content, cli.export.as_deref())?;
        return Ok(());
    }

    app.run().await
}
