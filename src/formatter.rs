//! Category record formatting.
//!
//! Maps one category node to a [`CategoryRecord`]. Absent attributes become
//! empty fields; nothing here fails.

use crate::graph::{CategoryGraph, CategoryNode};
use crate::model::GraphicsStyleType;
use crate::record::{CategoryRecord, SOLID_PATTERN_NAME, SUBCATEGORY_MARKER};

/// Position of a node in the two-level category tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRole {
    /// Top-level category. Its own name is written as the parent label.
    Parent,
    /// Subcategory. The parent label is always [`SUBCATEGORY_MARKER`].
    Child,
}

/// Formats a top-level category row.
pub fn format_parent<G: CategoryGraph>(graph: &G, category: &G::Node) -> CategoryRecord {
    format_record(graph, category, RecordRole::Parent)
}

/// Formats a subcategory row.
pub fn format_child<G: CategoryGraph>(graph: &G, category: &G::Node) -> CategoryRecord {
    format_record(graph, category, RecordRole::Child)
}

pub fn format_record<G: CategoryGraph>(
    graph: &G,
    category: &G::Node,
    role: RecordRole,
) -> CategoryRecord {
    let parent_label = match role {
        RecordRole::Parent => category.name().to_string(),
        RecordRole::Child => SUBCATEGORY_MARKER.to_string(),
    };

    CategoryRecord {
        parent_label,
        name: category.name().to_string(),
        cut_line_weight: line_weight_field(category, GraphicsStyleType::Cut),
        projection_line_weight: line_weight_field(category, GraphicsStyleType::Projection),
        line_color: category.line_color().to_string(),
        line_pattern: resolve_line_pattern(graph, category),
        material: category.material_name().unwrap_or_default().to_string(),
    }
}

fn line_weight_field<N: CategoryNode>(category: &N, style: GraphicsStyleType) -> String {
    category
        .line_weight(style)
        .map(|weight| weight.to_string())
        .unwrap_or_default()
}

/// Cut pattern name, then projection pattern name, then `Solid`.
///
/// An id that resolves to no pattern element counts as absent.
pub fn resolve_line_pattern<G: CategoryGraph>(graph: &G, category: &G::Node) -> String {
    [GraphicsStyleType::Cut, GraphicsStyleType::Projection]
        .into_iter()
        .filter_map(|style| category.line_pattern_id(style))
        .find_map(|id| graph.line_pattern_name(id))
        .unwrap_or(SOLID_PATTERN_NAME)
        .to_string()
}
