//! Report assembly: header plus ordered records.

use crate::record::{header_line, CategoryRecord, FIELD_COUNT, HEADER};

/// Row order of the assembled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Keep the walker's order.
    #[default]
    Traversal,
    /// Stable ascending sort on (parent label, name), case-sensitive.
    ParentThenName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: [&'static str; FIELD_COUNT],
    pub records: Vec<CategoryRecord>,
}

impl Report {
    /// Prepends the header to `records`, reordering only when asked to.
    #[must_use]
    pub fn assemble(mut records: Vec<CategoryRecord>, order: RowOrder) -> Self {
        if order == RowOrder::ParentThenName {
            records.sort_by(|a, b| {
                (a.parent_label.as_str(), a.name.as_str())
                    .cmp(&(b.parent_label.as_str(), b.name.as_str()))
            });
        }

        Self {
            header: HEADER,
            records,
        }
    }

    /// Data rows, header excluded.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Header and records as colon-delimited lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        std::iter::once(header_line())
            .chain(self.records.iter().map(CategoryRecord::to_delimited))
            .collect()
    }
}
