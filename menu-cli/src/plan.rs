//! Menu plan file
//!
//! A whole menu written down up front, replayed through the wizard by
//! `menu-cli build`.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use shared::models::{CategoryCreate, MealCreate, RestaurantDetails};

#[derive(Debug, Clone, Deserialize)]
pub struct MenuPlan {
    pub restaurant: PlanRestaurant,
    #[serde(default)]
    pub categories: Vec<PlanCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRestaurant {
    pub name: String,
    pub country: String,
    pub city: String,
    pub subdomain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanCategory {
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub groups: Vec<PlanGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanGroup {
    pub name: String,
    #[serde(default)]
    pub meals: Vec<PlanMeal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanMeal {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub sizes: Vec<PlanSize>,
    #[serde(default)]
    pub pairings: Vec<PlanPairing>,
    #[serde(default)]
    pub ingredients: Vec<PlanIngredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanSize {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanPairing {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanIngredient {
    pub name: String,
    pub image: Option<String>,
}

impl MenuPlan {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid menu plan {}", path.display()))
    }
}

impl PlanRestaurant {
    pub fn to_details(&self) -> RestaurantDetails {
        RestaurantDetails {
            name: self.name.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            subdomain: self.subdomain.clone(),
        }
    }
}

impl PlanCategory {
    pub fn to_create(&self) -> CategoryCreate {
        let form = CategoryCreate::new(self.name.clone());
        match &self.icon {
            Some(icon) => form.with_icon(icon.as_str()),
            None => form,
        }
    }
}

impl PlanMeal {
    pub fn to_create(&self, meal_group_id: i64) -> MealCreate {
        let mut draft =
            MealCreate::new(meal_group_id, self.name.clone()).with_description(self.description.clone());
        if let Some(image) = &self.image {
            draft = draft.with_image(image.clone());
        }
        for size in &self.sizes {
            draft = draft.with_size(size.name.clone(), size.price);
        }
        for pairing in &self.pairings {
            draft = draft.with_pairing(pairing.name.clone(), pairing.price, pairing.image.clone());
        }
        for ingredient in &self.ingredients {
            draft = draft.with_ingredient(ingredient.name.clone(), ingredient.image.clone());
        }
        draft
    }
}
