//! Event export (JSON and CSV).
//!
//! Both formats cover the full event collection. Rendering returns text;
//! [`ExportService::export_to_file`] writes it out for the CLI.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::models::event::Event;

mod csv;
mod json;

pub use self::csv::{quote_field, CSV_HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "calendar_events.json",
            ExportFormat::Csv => "calendar_events.csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("Unknown export format '{}' (expected json or csv)", other)),
        }
    }
}

pub struct ExportService;

impl ExportService {
    /// Render events in the requested format.
    pub fn render(events: &[Event], format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => json::to_json(events),
            ExportFormat::Csv => Ok(csv::to_csv(events)),
        }
    }

    /// Write the export to `path`, or to the default file name inside `dir`
    /// when `path` is a directory.
    pub fn export_to_file(events: &[Event], format: ExportFormat, path: &Path) -> Result<PathBuf> {
        let target = if path.is_dir() {
            path.join(format.default_file_name())
        } else {
            path.to_path_buf()
        };

        let content = Self::render(events, format)?;
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {}", parent.display()))?;
            }
        }
        fs::write(&target, content)
            .with_context(|| format!("Failed to write export to {}", target.display()))?;

        log::info!("Exported {} events as {} to {}", events.len(), format, target.display());
        Ok(target)
    }
}
