use crate::error::ExportError;
use crate::report::Report;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub const WORKSHEET_NAME: &str = "Object Styles";

/// Writes the report to a single worksheet.
///
/// Row 1 is the header; each record fills columns 1 to 7 as text.
pub fn export_xlsx<P: AsRef<Path>>(report: &Report, path: P) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in report.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (row, record) in report.records.iter().enumerate() {
        let excel_row = (row + 1) as u32;
        for (col, value) in record.fields().iter().enumerate() {
            worksheet.write_string(excel_row, col as u16, *value)?;
        }
    }

    worksheet.autofit();

    workbook.save(path.as_ref())?;

    Ok(())
}
