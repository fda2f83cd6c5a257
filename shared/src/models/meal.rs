//! Meal Model
//!
//! A meal arrives from the backend without its children; sizes, pairings and
//! ingredients are separate flat collections keyed by `meal_id` and are joined
//! back on by [`crate::join::assemble_meals`].

use serde::{Deserialize, Serialize};

/// Meal entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub meal_group_id: i64,
    #[serde(rename = "meal_name")]
    pub name: String,
    #[serde(rename = "meal_description", default)]
    pub description: String,
    #[serde(rename = "meal_image", default)]
    pub image: Option<String>,
    /// Denormalized by some backend listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_group_name: Option<String>,

    // -- Relations (populated by the join, absent on the wire) --
    #[serde(default)]
    pub sizes: Vec<MealSize>,
    #[serde(default)]
    pub pairings: Vec<MealPairing>,
    #[serde(default)]
    pub ingredients: Vec<MealIngredient>,
}

/// Meal size with its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSize {
    pub id: i64,
    pub meal_id: i64,
    #[serde(rename = "size_name")]
    pub name: String,
    #[serde(rename = "size_price")]
    pub price: f64,
}

/// Optional add-on sold with a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPairing {
    pub id: i64,
    pub meal_id: i64,
    #[serde(rename = "pairing_name")]
    pub name: String,
    #[serde(rename = "pairing_image", default)]
    pub image: Option<String>,
    #[serde(rename = "pairing_price")]
    pub price: f64,
}

/// Ingredient listed on a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub id: i64,
    pub meal_id: i64,
    #[serde(rename = "ingredient_name")]
    pub name: String,
    #[serde(rename = "ingredient_image", default)]
    pub image: Option<String>,
}

/// Create meal payload, children included
///
/// Not sent as-is: the meal is created first, then each child is created
/// against the returned meal id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealCreate {
    pub meal_group_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub sizes: Vec<MealSizeCreate>,
    #[serde(default)]
    pub pairings: Vec<MealPairingCreate>,
    #[serde(default)]
    pub ingredients: Vec<MealIngredientCreate>,
}

/// Pending size, not yet persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSizeCreate {
    pub name: String,
    pub price: f64,
}

/// Pending pairing, not yet persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPairingCreate {
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

/// Pending ingredient, not yet persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredientCreate {
    pub name: String,
    pub image: Option<String>,
}

/// Update meal payload (`PUT /menu/update-meal/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealUpdate {
    #[serde(rename = "meal_name")]
    pub name: String,
    #[serde(rename = "meal_description")]
    pub description: String,
    #[serde(rename = "meal_image")]
    pub image: Option<String>,
}

impl MealCreate {
    pub fn new(meal_group_id: i64, name: impl Into<String>) -> Self {
        Self {
            meal_group_id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_size(mut self, name: impl Into<String>, price: f64) -> Self {
        self.sizes.push(MealSizeCreate {
            name: name.into(),
            price,
        });
        self
    }

    pub fn with_pairing(mut self, name: impl Into<String>, price: f64, image: Option<String>) -> Self {
        self.pairings.push(MealPairingCreate {
            name: name.into(),
            image,
            price,
        });
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, image: Option<String>) -> Self {
        self.ingredients.push(MealIngredientCreate {
            name: name.into(),
            image,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_from_wire_has_no_children() {
        let meal: Meal = serde_json::from_str(
            r#"{"id":5,"meal_group_id":2,"meal_name":"Pasta Rotini",
                "meal_description":"Sweet pasta rotini with special sauce",
                "meal_image":null}"#,
        )
        .unwrap();
        assert_eq!(meal.id, 5);
        assert_eq!(meal.meal_group_id, 2);
        assert!(meal.image.is_none());
        assert!(meal.sizes.is_empty());
        assert!(meal.pairings.is_empty());
        assert!(meal.ingredients.is_empty());
    }

    #[test]
    fn test_size_from_wire() {
        let size: MealSize =
            serde_json::from_str(r#"{"id":1,"meal_id":5,"size_name":"Large","size_price":850.5}"#)
                .unwrap();
        assert_eq!(size.name, "Large");
        assert_eq!(size.price, 850.5);
    }

    #[test]
    fn test_meal_create_builder() {
        let draft = MealCreate::new(2, "Pilau")
            .with_description("Spiced rice")
            .with_size("Regular", 450.0)
            .with_pairing("Kachumbari", 100.0, None)
            .with_ingredient("Rice", None);
        assert_eq!(draft.sizes.len(), 1);
        assert_eq!(draft.pairings.len(), 1);
        assert_eq!(draft.ingredients.len(), 1);
        assert!(draft.image.is_none());
    }
}
