use super::{Category, LinePatternId};
use crate::error::GraphError;
use crate::graph::CategoryGraph;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePattern {
    pub id: LinePatternId,
    pub name: String,
}

/// In-memory snapshot of a host document's object style settings.
///
/// `categories` is `None` when the host did not expose its category
/// collection; walking such a document fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub line_patterns: Vec<LinePattern>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl Document {
    /// An empty document with an available, empty category collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            line_patterns: Vec::new(),
            categories: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_line_pattern(mut self, id: i64, name: impl Into<String>) -> Self {
        self.line_patterns.push(LinePattern {
            id: LinePatternId(id),
            name: name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.get_or_insert_with(Vec::new).push(category);
        self
    }

    #[must_use]
    pub fn total_categories(&self) -> usize {
        self.categories.as_ref().map_or(0, Vec::len)
    }
}

impl CategoryGraph for Document {
    type Node = Category;

    fn categories(&self) -> Result<Vec<&Category>, GraphError> {
        self.categories
            .as_ref()
            .map(|categories| categories.iter().collect())
            .ok_or(GraphError::CategoriesUnavailable)
    }

    fn subcategories<'a>(&'a self, parent: &'a Category) -> Vec<&'a Category> {
        parent.subcategories.iter().collect()
    }

    fn line_pattern_name(&self, id: LinePatternId) -> Option<&str> {
        if id.is_solid() {
            return None;
        }
        self.line_patterns
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryType;

    #[test]
    fn missing_category_collection_is_a_graph_failure() {
        let document: Document = serde_json::from_str(r#"{"title": "Broken"}"#).unwrap();
        assert!(matches!(
            document.categories(),
            Err(GraphError::CategoriesUnavailable)
        ));
    }

    #[test]
    fn empty_category_collection_is_valid() {
        let document: Document = serde_json::from_str(r#"{"categories": []}"#).unwrap();
        assert!(document.categories().unwrap().is_empty());
    }

    #[test]
    fn pattern_lookup_skips_solid_sentinel() {
        let document = Document::new()
            .with_line_pattern(LinePatternId::SOLID.0, "Solid")
            .with_line_pattern(7, "Dash");

        assert_eq!(document.line_pattern_name(LinePatternId(7)), Some("Dash"));
        assert_eq!(document.line_pattern_name(LinePatternId::SOLID), None);
        assert_eq!(document.line_pattern_name(LinePatternId(8)), None);
    }

    #[test]
    fn categories_keep_document_order() {
        let document = Document::new()
            .with_category(Category::new("Walls", CategoryType::Model))
            .with_category(Category::new("Doors", CategoryType::Model))
            .with_category(Category::new("Casework", CategoryType::Model));

        let names: Vec<&str> = document
            .categories()
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Walls", "Doors", "Casework"]);
    }
}
