//! Read-only access to a host category graph.
//!
//! The walker and formatter only see the document through these traits, so
//! they run the same against a live host binding or a synthetic graph.

use crate::error::GraphError;
use crate::model::{Category, CategoryType, GraphicsStyleType, LineColor, LinePatternId};

/// One category or subcategory node.
pub trait CategoryNode {
    fn name(&self) -> &str;
    fn category_type(&self) -> CategoryType;
    fn is_visible_in_ui(&self) -> bool;
    fn can_add_subcategory(&self) -> bool;
    fn line_color(&self) -> LineColor;
    fn line_weight(&self, style: GraphicsStyleType) -> Option<u32>;
    fn line_pattern_id(&self, style: GraphicsStyleType) -> Option<LinePatternId>;
    fn material_name(&self) -> Option<&str>;
}

/// The category collection of a document plus the lookups it needs.
pub trait CategoryGraph {
    type Node: CategoryNode;

    /// Top-level categories in host enumeration order.
    ///
    /// Fails only when the collection itself is unavailable.
    fn categories(&self) -> Result<Vec<&Self::Node>, GraphError>;

    /// Subcategories of `parent` in host enumeration order.
    fn subcategories<'a>(&'a self, parent: &'a Self::Node) -> Vec<&'a Self::Node>;

    /// Name of the pattern element behind `id`, if there is one.
    ///
    /// The solid sentinel has no element and resolves to `None`.
    fn line_pattern_name(&self, id: LinePatternId) -> Option<&str>;
}

impl CategoryNode for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn category_type(&self) -> CategoryType {
        self.category_type
    }

    fn is_visible_in_ui(&self) -> bool {
        self.visible_in_ui
    }

    fn can_add_subcategory(&self) -> bool {
        self.can_add_subcategory
    }

    fn line_color(&self) -> LineColor {
        self.line_color
    }

    fn line_weight(&self, style: GraphicsStyleType) -> Option<u32> {
        self.line_weights.get(style)
    }

    fn line_pattern_id(&self, style: GraphicsStyleType) -> Option<LinePatternId> {
        self.line_patterns.get(style)
    }

    fn material_name(&self) -> Option<&str> {
        self.material.as_ref().map(|m| m.name.as_str())
    }
}
