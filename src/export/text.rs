use crate::error::ExportError;
use crate::report::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the colon-delimited form, header first, one row per line.
pub fn export_text<P: AsRef<Path>>(report: &Report, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    for line in report.to_lines() {
        writeln!(writer, "{line}").map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
