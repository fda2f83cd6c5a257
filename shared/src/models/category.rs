//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "category_name")]
    pub name: String,
    #[serde(rename = "category_icon", default)]
    pub icon: CategoryIcon,
}

/// Category icon: one of the built-in glyphs or an image URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryIcon {
    /// Main Course
    #[default]
    Utensils,
    /// Beverages
    Coffee,
    /// Appetizers
    Soup,
    /// Desserts
    IceCream,
    /// Anything else, usually an image URL
    Custom(String),
}

impl CategoryIcon {
    /// All built-in icons, in display order
    pub const BUILT_IN: [CategoryIcon; 4] = [
        CategoryIcon::Utensils,
        CategoryIcon::Coffee,
        CategoryIcon::Soup,
        CategoryIcon::IceCream,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CategoryIcon::Utensils => "utensils",
            CategoryIcon::Coffee => "coffee",
            CategoryIcon::Soup => "soup",
            CategoryIcon::IceCream => "icecream",
            CategoryIcon::Custom(value) => value,
        }
    }

    /// Label shown next to the icon picker
    pub fn label(&self) -> &str {
        match self {
            CategoryIcon::Utensils => "Main Course",
            CategoryIcon::Coffee => "Beverages",
            CategoryIcon::Soup => "Appetizers",
            CategoryIcon::IceCream => "Desserts",
            CategoryIcon::Custom(_) => "Custom",
        }
    }
}

impl From<String> for CategoryIcon {
    fn from(value: String) -> Self {
        match value.as_str() {
            "utensils" => CategoryIcon::Utensils,
            "coffee" => CategoryIcon::Coffee,
            "soup" => CategoryIcon::Soup,
            "icecream" => CategoryIcon::IceCream,
            _ => CategoryIcon::Custom(value),
        }
    }
}

impl From<&str> for CategoryIcon {
    fn from(value: &str) -> Self {
        CategoryIcon::from(value.to_string())
    }
}

impl From<CategoryIcon> for String {
    fn from(icon: CategoryIcon) -> Self {
        match icon {
            CategoryIcon::Custom(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create category payload, also used for updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "category_name")]
    pub name: String,
    #[serde(rename = "category_icon", default)]
    pub icon: CategoryIcon,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: CategoryIcon::default(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<CategoryIcon>) -> Self {
        self.icon = icon.into();
        self
    }
}
