use crate::error::ExportError;
use crate::report::Report;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(report: &Report, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(report.header)?;

    for record in &report.records {
        writer.write_record(record.fields())?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
