pub mod category;
pub mod document;

pub use category::{
    Category, CategoryType, GraphicsStyleType, LineColor, LinePatternId, Material, StyleValues,
};
pub use document::{Document, LinePattern};
