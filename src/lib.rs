//! # MOSS Export
//!
//! Exports a building model's Model Object Style Settings: per-category line
//! weights, line colors, line patterns and materials, as a spreadsheet report.
//!
//! ## Features
//!
//! - Read-only category graph interface, implemented for JSON document snapshots
//! - Eligibility filtering of top-level model categories
//! - One 7-field record per category and subcategory, in document order
//! - Export to XLSX, CSV, JSON or colon-delimited text
//!
//! ## Example
//!
//! ```no_run
//! use moss_export::parser::parse_document_file;
//! use moss_export::report::{Report, RowOrder};
//! use moss_export::walker::collect_records;
//!
//! let document = parse_document_file("model.json").expect("Failed to load");
//! let records = collect_records(&document).expect("No categories");
//! let report = Report::assemble(records, RowOrder::Traversal);
//! for line in report.to_lines() {
//!     println!("{line}");
//! }
//! ```

pub mod command;
pub mod error;
pub mod export;
pub mod formatter;
pub mod graph;
pub mod model;
pub mod parser;
pub mod record;
pub mod report;
pub mod ui;
pub mod walker;
