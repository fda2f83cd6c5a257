//! Request payloads sent by the menu client
//!
//! Entity payloads that map one-to-one onto a model (`CategoryCreate`,
//! `MealGroupCreate`, `MealUpdate`, `RestaurantDetails`) live with the model.
//! The ones here are wire-only.

use serde::{Deserialize, Serialize};

use crate::models::MenuState;

// =============================================================================
// Meal API DTOs
// =============================================================================

/// `POST /menu/create-meal`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealRequest {
    pub meal_group_id: i64,
    pub meal_name: String,
    pub meal_description: String,
    pub meal_image: Option<String>,
}

/// `POST /menu/create-meal-size`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealSizeRequest {
    pub meal_id: i64,
    pub size_name: String,
    pub size_price: f64,
}

/// `POST /menu/create-meal-pairing`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealPairingRequest {
    pub meal_id: i64,
    pub pairing_name: String,
    pub pairing_image: Option<String>,
    pub pairing_price: f64,
}

/// `POST /menu/create-meal-ingredient`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealIngredientRequest {
    pub meal_id: i64,
    pub ingredient_name: String,
    pub ingredient_image: Option<String>,
}

// =============================================================================
// Auth API DTOs
// =============================================================================

/// `POST /auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    /// Snapshot of the menu being published
    #[serde(rename = "menuData")]
    pub menu_data: Option<MenuState>,
}
