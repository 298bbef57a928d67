pub mod csv;
pub mod json;
pub mod text;
pub mod viewer;
pub mod xlsx;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;
pub use text::export_text;
pub use viewer::{NoViewer, SystemViewer, Viewer};
pub use xlsx::export_xlsx;

use crate::report::Report;
use std::path::Path;

/// Output file format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
    Text,
}

impl ReportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Materializes `report` at `path` in this format.
    pub fn write(self, report: &Report, path: &Path) -> Result<(), ExportError> {
        match self {
            Self::Xlsx => export_xlsx(report, path),
            Self::Csv => export_csv(report, path),
            Self::Json => export_json(report, path),
            Self::Text => export_text(report, path),
        }
    }
}
