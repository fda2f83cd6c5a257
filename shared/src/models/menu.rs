//! Menu State
//!
//! Everything the wizard has assembled so far. Serialized in camelCase because
//! the backend stores it verbatim as `menuData` on signup.

use serde::{Deserialize, Serialize};

use super::{Category, Meal, MealGroup, RestaurantDetails};

/// Local mirror of the menu under construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuState {
    pub restaurant_details: Option<RestaurantDetails>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub meal_groups: Vec<MealGroup>,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn meal_group(&self, id: i64) -> Option<&MealGroup> {
        self.meal_groups.iter().find(|g| g.id == id)
    }

    pub fn meal(&self, id: i64) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Meal groups of a category, in local order
    pub fn groups_in_category(&self, category_id: i64) -> impl Iterator<Item = &MealGroup> {
        self.meal_groups
            .iter()
            .filter(move |g| g.category_id == category_id)
    }

    /// Meals of a meal group, in local order
    pub fn meals_in_group(&self, meal_group_id: i64) -> impl Iterator<Item = &Meal> {
        self.meals
            .iter()
            .filter(move |m| m.meal_group_id == meal_group_id)
    }

    /// Category name for display, `"Unknown"` if the id is dangling
    pub fn category_name(&self, id: i64) -> &str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or("Unknown")
    }

    /// Meal group name for display, `"Unknown"` if the id is dangling
    pub fn meal_group_name(&self, id: i64) -> &str {
        self.meal_group(id)
            .map(|g| g.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Remove a category together with its meal groups and their meals.
    ///
    /// Returns `false` if the category was not present.
    pub fn remove_category(&mut self, id: i64) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return false;
        }

        let orphaned: Vec<i64> = self.groups_in_category(id).map(|g| g.id).collect();
        for group_id in orphaned {
            self.remove_meal_group(group_id);
        }
        true
    }

    /// Remove a meal group together with its meals.
    ///
    /// Returns `false` if the meal group was not present.
    pub fn remove_meal_group(&mut self, id: i64) -> bool {
        let before = self.meal_groups.len();
        self.meal_groups.retain(|g| g.id != id);
        if self.meal_groups.len() == before {
            return false;
        }
        self.meals.retain(|m| m.meal_group_id != id);
        true
    }

    /// Returns `false` if the meal was not present.
    pub fn remove_meal(&mut self, id: i64) -> bool {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        self.meals.len() != before
    }

    /// Drop meal groups whose category is unknown and meals whose meal group is unknown.
    ///
    /// Returns the number of entities removed. Used after a session restore,
    /// where the collections come from independent requests.
    pub fn prune_dangling(&mut self) -> usize {
        let before = self.meal_groups.len() + self.meals.len();

        let categories = &self.categories;
        self.meal_groups
            .retain(|g| categories.iter().any(|c| c.id == g.category_id));
        let groups = &self.meal_groups;
        self.meals
            .retain(|m| groups.iter().any(|g| g.id == m.meal_group_id));

        before - (self.meal_groups.len() + self.meals.len())
    }
}
