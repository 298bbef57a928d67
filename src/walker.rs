//! Category tree traversal.

use crate::error::GraphError;
use crate::formatter::{format_child, format_parent};
use crate::graph::{CategoryGraph, CategoryNode};
use crate::model::CategoryType;
use crate::record::CategoryRecord;

/// Why a top-level category produced no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotModel,
    CannotOwnSubcategories,
    Hidden,
}

/// Checks whether a top-level category and its subtree are exported.
///
/// Only visible model categories that can own subcategories qualify. A hidden
/// parent hides its subcategories regardless of their own visibility.
pub fn eligibility<N: CategoryNode>(category: &N) -> Result<(), SkipReason> {
    if category.category_type() != CategoryType::Model {
        return Err(SkipReason::NotModel);
    }
    if !category.can_add_subcategory() {
        return Err(SkipReason::CannotOwnSubcategories);
    }
    if !category.is_visible_in_ui() {
        return Err(SkipReason::Hidden);
    }
    Ok(())
}

/// Walks the graph and returns the report body in traversal order.
///
/// Each eligible top-level category yields its own row followed by one row
/// per subcategory. Subcategories are not filtered.
///
/// # Errors
///
/// Returns [`GraphError`] if the category collection is unavailable.
pub fn collect_records<G: CategoryGraph>(graph: &G) -> Result<Vec<CategoryRecord>, GraphError> {
    let mut records = Vec::new();

    for category in graph.categories()? {
        if let Err(reason) = eligibility(category) {
            tracing::debug!(category = category.name(), ?reason, "skipping category");
            continue;
        }

        let record = format_parent(graph, category);
        tracing::debug!("{record}");
        records.push(record);

        for subcategory in graph.subcategories(category) {
            let record = format_child(graph, subcategory);
            tracing::debug!("{record}");
            records.push(record);
        }
    }

    Ok(records)
}
