//! Export functionality for project snapshots.
//!
//! Serializes the current metrics snapshot to CSV (the dashboard's download
//! format) or pretty JSON, written to a file or stdout.

use crate::core::{ProjectMetrics, Result};
use std::io::Write;
use std::path::Path;

/// Default file name offered by the export control.
pub const DEFAULT_EXPORT_FILE: &str = "resource_data.csv";

/// CSV header row, matching the record's field order.
const CSV_HEADER: &str = "project,utilization,budget,staff,equipment,efficiency,completion,risk,status";

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one row per project
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Snapshot exporter over a read-only view of the metrics store.
pub struct SnapshotExporter<'a> {
    projects: &'a [ProjectMetrics],
}

impl<'a> SnapshotExporter<'a> {
    /// Create a new exporter over a project snapshot.
    pub fn new(projects: &'a [ProjectMetrics]) -> Self {
        Self { projects }
    }

    /// Serialize the snapshot in the requested format.
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => self.export_csv(),
            ExportFormat::Json => self.export_json(),
        }
    }

    /// Export the snapshot as CSV, header row first, rows in insertion order.
    fn export_csv(&self) -> Result<String> {
        let mut csv_output = String::new();

        csv_output.push_str(CSV_HEADER);
        csv_output.push('\n');

        for project in self.projects {
            csv_output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                project.name.as_str(),
                project.utilization,
                project.budget,
                project.staff,
                project.equipment,
                project.efficiency,
                project.completion,
                project.risk,
                project.status,
            ));
        }

        Ok(csv_output)
    }

    /// Export the snapshot as pretty JSON.
    fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.projects)?)
    }

    /// Write exported content to a file or stdout.
    pub fn write_output(&self, content: &str, output: Option<&Path>) -> Result<()> {
        match output {
            Some(path) => {
                let mut file = std::fs::File::create(path)?;
                file.write_all(content.as_bytes())?;
                Ok(())
            },
            None => {
                print!("{}", content);
                Ok(())
            },
        }
    }
}
