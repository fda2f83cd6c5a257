//! Meal join
//!
//! The backend returns meals and their children as independent flat
//! collections. This module puts the children back under their meal.

use std::collections::HashSet;

use crate::models::{Meal, MealIngredient, MealPairing, MealSize};

/// Flat child collections as returned by the session-restore endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealChildren {
    pub sizes: Vec<MealSize>,
    pub pairings: Vec<MealPairing>,
    pub ingredients: Vec<MealIngredient>,
}

/// Result of [`assemble_meals`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembled {
    pub meals: Vec<Meal>,
    /// Children whose `meal_id` matched no meal
    pub orphaned: usize,
}

/// Rebuild every meal's `sizes`, `pairings` and `ingredients`.
///
/// Each meal ends up with exactly the children whose `meal_id` equals its id,
/// in the order the flat lists carried them. Whatever the meals held before is
/// replaced.
pub fn assemble_meals(meals: Vec<Meal>, children: MealChildren) -> Assembled {
    let known: HashSet<i64> = meals.iter().map(|m| m.id).collect();
    let orphaned = children
        .sizes
        .iter()
        .map(|s| s.meal_id)
        .chain(children.pairings.iter().map(|p| p.meal_id))
        .chain(children.ingredients.iter().map(|i| i.meal_id))
        .filter(|meal_id| !known.contains(meal_id))
        .count();

    if orphaned > 0 {
        tracing::debug!(orphaned, "Dropping meal children without a meal");
    }

    let meals = meals
        .into_iter()
        .map(|mut meal| {
            meal.sizes = children
                .sizes
                .iter()
                .filter(|s| s.meal_id == meal.id)
                .cloned()
                .collect();
            meal.pairings = children
                .pairings
                .iter()
                .filter(|p| p.meal_id == meal.id)
                .cloned()
                .collect();
            meal.ingredients = children
                .ingredients
                .iter()
                .filter(|i| i.meal_id == meal.id)
                .cloned()
                .collect();
            meal
        })
        .collect();

    Assembled { meals, orphaned }
}
