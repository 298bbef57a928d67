use crate::error::ParseError;
use crate::model::Document;
use std::path::Path;

/// Loads a document snapshot from a JSON file.
///
/// The snapshot mirrors the host document's category settings: top-level
/// categories with their subcategories, per-context line weights and
/// pattern ids, line colors, materials, and the document's line patterns.
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidJson`] if the content is not a valid snapshot.
///
/// # Example
///
/// ```no_run
/// use moss_export::parser::parse_document_file;
///
/// let document = parse_document_file("model.json")?;
/// println!("Categories: {}", document.total_categories());
/// # Ok::<(), moss_export::error::ParseError>(())
/// ```
pub fn parse_document_file<P: AsRef<Path>>(path: P) -> Result<Document, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    parse_document_str(&content).map_err(|source| ParseError::InvalidJson {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

pub fn parse_document_str(content: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CategoryGraph;
    use crate::model::{CategoryType, GraphicsStyleType, LinePatternId};

    const SNAPSHOT: &str = r#"{
        "title": "Office",
        "line_patterns": [{"id": 501, "name": "Dash 1/8\""}],
        "categories": [
            {
                "name": "Walls",
                "category_type": "model",
                "can_add_subcategory": true,
                "line_color": {"red": 10, "green": 20, "blue": 30},
                "line_weights": {"projection": 1, "cut": 4},
                "line_patterns": {"projection": -3000010},
                "material": {"name": "Default Wall"},
                "subcategories": [
                    {"name": "Common Edges", "category_type": "model",
                     "line_patterns": {"cut": 501}}
                ]
            },
            {"name": "Grids", "category_type": "annotation", "visible_in_ui": false}
        ]
    }"#;

    #[test]
    fn parses_nested_snapshot() {
        let document = parse_document_str(SNAPSHOT).unwrap();
        let categories = document.categories().unwrap();

        assert_eq!(document.title.as_deref(), Some("Office"));
        assert_eq!(categories.len(), 2);

        let walls = categories[0];
        assert_eq!(walls.line_weights.get(GraphicsStyleType::Cut), Some(4));
        assert_eq!(
            walls.line_patterns.get(GraphicsStyleType::Projection),
            Some(LinePatternId::SOLID)
        );
        assert_eq!(walls.subcategories[0].name, "Common Edges");

        let grids = categories[1];
        assert_eq!(grids.category_type, CategoryType::Annotation);
        assert!(!grids.visible_in_ui);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = parse_document_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ParseError::FileRead { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn unknown_category_type_is_rejected() {
        let result = parse_document_str(
            r#"{"categories": [{"name": "X", "category_type": "furniture"}]}"#,
        );
        assert!(result.is_err());
    }
}
