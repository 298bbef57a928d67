//! The typed report row and its delimited text form.

use serde::Serialize;
use std::fmt;

/// Number of fields in every record. Field position is the schema.
pub const FIELD_COUNT: usize = 7;

/// Delimiter of the text interchange form.
pub const DELIMITER: char = ':';

/// Parent label written for every subcategory row in place of the parent name.
pub const SUBCATEGORY_MARKER: &str = "---";

/// Pattern name used when neither drawing context resolves to a pattern.
pub const SOLID_PATTERN_NAME: &str = "Solid";

/// Column names of the report header, in column order.
pub const HEADER: [&str; FIELD_COUNT] = [
    "ParentCategory",
    "SubCategoryName",
    "LW_Projection",
    "LW_Cut",
    "LineColor",
    "LinePattern",
    "Material",
];

/// One report row.
///
/// The third column carries the cut weight and the fourth the projection
/// weight, even though the header labels them the other way round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    #[serde(rename = "ParentCategory")]
    pub parent_label: String,
    #[serde(rename = "SubCategoryName")]
    pub name: String,
    #[serde(rename = "LW_Projection")]
    pub cut_line_weight: String,
    #[serde(rename = "LW_Cut")]
    pub projection_line_weight: String,
    #[serde(rename = "LineColor")]
    pub line_color: String,
    #[serde(rename = "LinePattern")]
    pub line_pattern: String,
    #[serde(rename = "Material")]
    pub material: String,
}

impl CategoryRecord {
    /// Fields in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.parent_label.as_str(),
            self.name.as_str(),
            self.cut_line_weight.as_str(),
            self.projection_line_weight.as_str(),
            self.line_color.as_str(),
            self.line_pattern.as_str(),
            self.material.as_str(),
        ]
    }

    /// Colon-joined form, e.g. `Walls:Walls:3:1:0-0-0:Solid:`.
    ///
    /// Names containing the delimiter are written as-is and will not split
    /// back into the same fields.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        join_fields(&self.fields())
    }
}

impl fmt::Display for CategoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

/// Colon-joined header line.
#[must_use]
pub fn header_line() -> String {
    join_fields(&HEADER)
}

fn join_fields(fields: &[&str]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(field);
    }
    line
}
