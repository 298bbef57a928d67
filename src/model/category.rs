use serde::{Deserialize, Serialize};
use std::fmt;

/// Host classification of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Model,
    Annotation,
    AnalyticalModel,
    Internal,
}

/// Drawing context a line weight or line pattern applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsStyleType {
    Projection,
    Cut,
}

/// A value set per drawing context. Either side may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleValues<T> {
    pub projection: Option<T>,
    pub cut: Option<T>,
}

impl<T> Default for StyleValues<T> {
    fn default() -> Self {
        Self {
            projection: None,
            cut: None,
        }
    }
}

impl<T: Copy> StyleValues<T> {
    #[must_use]
    pub fn get(&self, style: GraphicsStyleType) -> Option<T> {
        match style {
            GraphicsStyleType::Projection => self.projection,
            GraphicsStyleType::Cut => self.cut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LineColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Renders as `R-G-B`, e.g. `128-64-0`.
impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.red, self.green, self.blue)
    }
}

/// Element id of a line pattern in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinePatternId(pub i64);

impl LinePatternId {
    /// Built-in solid pattern. It has no pattern element behind it.
    pub const SOLID: Self = Self(-3_000_010);

    #[must_use]
    pub fn is_solid(self) -> bool {
        self == Self::SOLID
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
}

/// A top-level category or one of its subcategories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub category_type: CategoryType,
    #[serde(default = "default_visible")]
    pub visible_in_ui: bool,
    #[serde(default)]
    pub can_add_subcategory: bool,
    #[serde(default)]
    pub line_color: LineColor,
    #[serde(default)]
    pub line_weights: StyleValues<u32>,
    #[serde(default)]
    pub line_patterns: StyleValues<LinePatternId>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

fn default_visible() -> bool {
    true
}

impl Category {
    /// A visible category with no style set. Model categories may own subcategories.
    #[must_use]
    pub fn new(name: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            name: name.into(),
            category_type,
            visible_in_ui: true,
            can_add_subcategory: category_type == CategoryType::Model,
            line_color: LineColor::default(),
            line_weights: StyleValues::default(),
            line_patterns: StyleValues::default(),
            material: None,
            subcategories: Vec::new(),
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_ui = false;
        self
    }

    #[must_use]
    pub fn with_subcategory_support(mut self, can_add_subcategory: bool) -> Self {
        self.can_add_subcategory = can_add_subcategory;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: LineColor) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_line_weight(mut self, style: GraphicsStyleType, weight: u32) -> Self {
        match style {
            GraphicsStyleType::Projection => self.line_weights.projection = Some(weight),
            GraphicsStyleType::Cut => self.line_weights.cut = Some(weight),
        }
        self
    }

    #[must_use]
    pub fn with_line_pattern(mut self, style: GraphicsStyleType, id: LinePatternId) -> Self {
        match style {
            GraphicsStyleType::Projection => self.line_patterns.projection = Some(id),
            GraphicsStyleType::Cut => self.line_patterns.cut = Some(id),
        }
        self
    }

    #[must_use]
    pub fn with_material(mut self, name: impl Into<String>) -> Self {
        self.material = Some(Material { name: name.into() });
        self
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: Category) -> Self {
        self.subcategories.push(subcategory);
        self
    }
}
