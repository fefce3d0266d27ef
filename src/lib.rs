//! Resdash - Terminal-native resource utilization dashboard.
//!
//! Resdash renders live resource metrics for a small set of tracked
//! projects, driven entirely by an in-memory simulation. There is no data
//! ingestion and no persistence: a session seeds four projects, a rolling
//! trend window and an empty alert log, then a periodic tick mutates all
//! three while the terminal UI renders snapshots.
//!
//! # Architecture
//!
//! - `core`: domain models, configuration and errors
//! - `engine`: the simulation engine, its stores and the tick scheduler
//! - `export`: CSV/JSON snapshot export
//! - `tui`: terminal user interface
//! - `cli`: command-line interface
//!
//! # Example
//!
//! ```no_run
//! use resdash_lib::core::Config;
//! use resdash_lib::Application;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let app = Application::new(config)?;
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod application;
pub mod cli;
pub mod core;
pub mod engine;
pub mod export;
pub mod tui;

// Re-export core types for convenience
pub use crate::application::Application;
pub use crate::core::{Config, Result};
