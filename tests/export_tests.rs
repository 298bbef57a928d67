//! Report sinks: write into a temp dir and read the result back.

use calamine::{open_workbook, Reader, Xlsx};
use moss_export::export::xlsx::WORKSHEET_NAME;
use moss_export::export::{export_csv, export_json, export_text, export_xlsx, ReportFormat};
use moss_export::record::{CategoryRecord, HEADER};
use moss_export::report::{Report, RowOrder};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn record(fields: [&str; 7]) -> CategoryRecord {
    CategoryRecord {
        parent_label: fields[0].to_string(),
        name: fields[1].to_string(),
        cut_line_weight: fields[2].to_string(),
        projection_line_weight: fields[3].to_string(),
        line_color: fields[4].to_string(),
        line_pattern: fields[5].to_string(),
        material: fields[6].to_string(),
    }
}

fn sample_report() -> Report {
    Report::assemble(
        vec![
            record(["Walls", "Walls", "5", "2", "128-64-0", "Solid", "Default Wall"]),
            record(["---", "Interior", "", "1", "0-0-255", "Dash", ""]),
            record(["---", "Edge: Top", "", "", "0-0-0", "Solid", ""]),
        ],
        RowOrder::Traversal,
    )
}

fn read_xlsx(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(WORKSHEET_NAME).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// XLSX
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn xlsx_header_then_one_row_per_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.xlsx");

    export_xlsx(&sample_report(), &path).unwrap();
    let rows = read_xlsx(&path);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], HEADER.map(String::from).to_vec());
    assert_eq!(
        rows[1],
        ["Walls", "Walls", "5", "2", "128-64-0", "Solid", "Default Wall"]
    );
    assert_eq!(rows[2], ["---", "Interior", "", "1", "0-0-255", "Dash", ""]);
}

#[test]
fn xlsx_keeps_delimiter_inside_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.xlsx");

    export_xlsx(&sample_report(), &path).unwrap();
    let rows = read_xlsx(&path);

    assert_eq!(rows[3][1], "Edge: Top");
    assert_eq!(rows[3].len(), 7);
}

#[test]
fn xlsx_empty_report_is_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.xlsx");

    export_xlsx(&Report::assemble(Vec::new(), RowOrder::Traversal), &path).unwrap();
    let rows = read_xlsx(&path);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "ParentCategory");
}

#[test]
fn xlsx_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.xlsx");

    assert!(export_xlsx(&sample_report(), &path).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// CSV / JSON / TEXT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn csv_header_then_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.csv");

    export_csv(&sample_report(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "ParentCategory,SubCategoryName,LW_Projection,LW_Cut,LineColor,LinePattern,Material"
    );
    assert_eq!(lines[2], "---,Interior,,1,0-0-255,Dash,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn csv_into_missing_directory_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.csv");

    let err = export_csv(&sample_report(), &path).unwrap_err();
    assert!(err.to_string().contains("report.csv"));
}

#[test]
fn json_objects_keyed_by_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    export_json(&sample_report(), &path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["ParentCategory"], "Walls");
    assert_eq!(rows[0]["LW_Projection"], "5");
    assert_eq!(rows[0]["LW_Cut"], "2");
    assert_eq!(rows[1]["Material"], "");
}

#[test]
fn text_is_colon_delimited_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    export_text(&sample_report(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert_eq!(
        content,
        "ParentCategory:SubCategoryName:LW_Projection:LW_Cut:LineColor:LinePattern:Material\n\
         Walls:Walls:5:2:128-64-0:Solid:Default Wall\n\
         ---:Interior::1:0-0-255:Dash:\n\
         ---:Edge: Top:::0-0-0:Solid:\n"
    );
}

#[test]
fn format_dispatch_writes_each_extension() {
    let temp_dir = TempDir::new().unwrap();
    let report = sample_report();

    for format in [
        ReportFormat::Xlsx,
        ReportFormat::Csv,
        ReportFormat::Json,
        ReportFormat::Text,
    ] {
        let path = temp_dir.path().join(format!("report.{}", format.extension()));
        format.write(&report, &path).unwrap();
        assert!(path.exists(), "{format:?} output should exist");
    }
}
