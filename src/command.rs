//! The export command: notice, path naming, walk, assemble, write, open.

use crate::error::CommandError;
use crate::export::{ReportFormat, Viewer};
use crate::graph::CategoryGraph;
use crate::record::header_line;
use crate::report::{Report, RowOrder};
use crate::walker::collect_records;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "Model_OSS_Export_";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Message shown before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            title: "Exporting MOSS".to_string(),
            message: "This will Export the Model Object Style Settings!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeResponse {
    Acknowledged,
    Dismissed,
}

/// Shows the pre-export notice and reports how the user answered.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice) -> std::io::Result<NoticeResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Folder for the report. The desktop folder when `None`.
    pub output_dir: Option<PathBuf>,
    pub format: ReportFormat,
    pub order: RowOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Succeeded { path: PathBuf, rows: usize },
    Cancelled,
}

/// `<dir>/Model_OSS_Export_<yyyy-MM-dd_HH-mm-ss>.<ext>`
#[must_use]
pub fn output_path(dir: &Path, timestamp: NaiveDateTime, format: ReportFormat) -> PathBuf {
    dir.join(format!(
        "{FILE_PREFIX}{}.{}",
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    ))
}

fn output_dir(options: &ExportOptions) -> Result<PathBuf, CommandError> {
    match &options.output_dir {
        Some(dir) => Ok(dir.clone()),
        None => dirs::desktop_dir().ok_or(CommandError::DesktopNotFound),
    }
}

/// Runs the export against `graph` using the current local time.
///
/// # Errors
///
/// Returns [`CommandError`] if the notice cannot be shown, the category
/// collection is unavailable, or writing or opening the file fails.
pub fn execute<G: CategoryGraph>(
    graph: &G,
    options: &ExportOptions,
    notifier: &mut dyn Notifier,
    viewer: &dyn Viewer,
) -> Result<ExportStatus, CommandError> {
    execute_at(graph, options, notifier, viewer, || Local::now().naive_local())
}

/// Runs the export, reading the file name timestamp from `clock`.
///
/// `clock` is called once, after the notice has been acknowledged.
pub fn execute_at<G: CategoryGraph>(
    graph: &G,
    options: &ExportOptions,
    notifier: &mut dyn Notifier,
    viewer: &dyn Viewer,
    clock: impl FnOnce() -> NaiveDateTime,
) -> Result<ExportStatus, CommandError> {
    let response = notifier
        .notify(&Notice::default())
        .map_err(CommandError::Notice)?;
    if response == NoticeResponse::Dismissed {
        tracing::warn!("export cancelled at the notice");
        return Ok(ExportStatus::Cancelled);
    }

    let path = output_path(&output_dir(options)?, clock(), options.format);
    tracing::info!(path = %path.display(), "exporting object style settings");
    tracing::debug!("{}", header_line());

    let records = collect_records(graph)?;
    let report = Report::assemble(records, options.order);
    tracing::info!(rows = report.row_count(), "report assembled");

    options.format.write(&report, &path)?;
    tracing::info!(path = %path.display(), format = ?options.format, "report written");

    viewer.open(&path)?;

    Ok(ExportStatus::Succeeded {
        path,
        rows: report.row_count(),
    })
}
