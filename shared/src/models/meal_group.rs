//! Meal Group Model

use serde::{Deserialize, Serialize};

/// Meal group: a sub-grouping of meals within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealGroup {
    pub id: i64,
    pub category_id: i64,
    #[serde(rename = "meal_group_name")]
    pub name: String,
    /// Denormalized by some backend listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Create meal group payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealGroupCreate {
    pub category_id: i64,
    #[serde(rename = "meal_group_name")]
    pub name: String,
}

/// Update meal group payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealGroupUpdate {
    #[serde(rename = "meal_group_name")]
    pub name: String,
}
