//! Menu preview
//!
//! Read-only tree of the finished menu, as shown to diners, plus a plain text
//! rendering for the CLI.

use std::fmt;

use serde::Serialize;
use shared::models::{Category, Meal, MealGroup, MenuState, RestaurantDetails};

/// Currency prefix used on every price
pub const CURRENCY: &str = "KSH";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuPreview {
    pub restaurant: Option<RestaurantDetails>,
    pub categories: Vec<PreviewCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewCategory {
    pub category: Category,
    pub meal_groups: Vec<PreviewGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewGroup {
    pub meal_group: MealGroup,
    pub meals: Vec<Meal>,
}

impl MenuPreview {
    /// Group meals under meal groups under categories, keeping local order.
    ///
    /// Meal groups without meals and categories without such groups are left out.
    pub fn build(state: &MenuState) -> Self {
        let categories = state
            .categories
            .iter()
            .filter_map(|category| {
                let meal_groups: Vec<PreviewGroup> = state
                    .groups_in_category(category.id)
                    .filter_map(|group| {
                        let meals: Vec<Meal> = state.meals_in_group(group.id).cloned().collect();
                        (!meals.is_empty()).then(|| PreviewGroup {
                            meal_group: group.clone(),
                            meals,
                        })
                    })
                    .collect();
                (!meal_groups.is_empty()).then(|| PreviewCategory {
                    category: category.clone(),
                    meal_groups,
                })
            })
            .collect();

        Self {
            restaurant: state.restaurant_details.clone(),
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn meal_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.meal_groups)
            .map(|g| g.meals.len())
            .sum()
    }
}

impl fmt::Display for MenuPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.restaurant {
            Some(r) => {
                writeln!(f, "{}", r.name)?;
                writeln!(f, "{}, {}", r.city, r.country)?;
            }
            None => writeln!(f, "Our Menu")?,
        }

        if self.categories.is_empty() {
            return writeln!(f, "\nNo meals yet.");
        }

        for entry in &self.categories {
            writeln!(f)?;
            writeln!(f, "== {} ==", entry.category.name)?;
            for group in &entry.meal_groups {
                writeln!(f, "-- {} --", group.meal_group.name)?;
                for meal in &group.meals {
                    write_meal(f, meal)?;
                }
            }
        }
        Ok(())
    }
}

fn write_meal(f: &mut fmt::Formatter<'_>, meal: &Meal) -> fmt::Result {
    writeln!(f, "* {}", meal.name)?;
    if !meal.description.trim().is_empty() {
        writeln!(f, "    {}", meal.description.trim())?;
    }
    for size in &meal.sizes {
        writeln!(f, "    {} - {CURRENCY} {}", size.name, size.price)?;
    }
    if !meal.pairings.is_empty() {
        writeln!(f, "    Pairs well with:")?;
        for pairing in &meal.pairings {
            writeln!(f, "      {} +{CURRENCY} {}", pairing.name, pairing.price)?;
        }
    }
    if !meal.ingredients.is_empty() {
        let names: Vec<&str> = meal.ingredients.iter().map(|i| i.name.as_str()).collect();
        writeln!(f, "    Ingredients: {}", names.join(", "))?;
    }
    Ok(())
}
