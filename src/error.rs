//! Error types for MOSS export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a document snapshot.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the snapshot file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot is not a valid document.
    #[error("invalid document '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Structural failures of the category graph. These abort the whole export.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The document does not expose its category collection.
    #[error("category collection is unavailable in this document")]
    CategoriesUnavailable,
}

/// Errors that can occur when writing the report or opening it.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },

    /// Failed to build or save the workbook.
    #[error("XLSX write failed: {source}")]
    Xlsx {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },

    /// The platform viewer could not be started for the written file.
    #[error("failed to open '{path}' in the default viewer: {source}")]
    ViewerLaunch {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors surfaced by the export command as a single failed outcome.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The pre-export notice could not be shown.
    #[error("failed to show the export notice: {0}")]
    Notice(#[source] std::io::Error),

    /// No output directory was configured and the desktop folder is unknown.
    #[error("desktop folder could not be determined")]
    DesktopNotFound,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
