//! Session restore
//!
//! Re-hydrates the wizard from server-held, cookie-scoped progress: the
//! restaurant first, then every menu collection in parallel, then the meal
//! join.

use std::fmt;

use shared::join::{Assembled, MealChildren, assemble_meals};
use shared::models::{MenuState, RestaurantDetails};

use crate::api::MenuApi;
use crate::{ClientError, ClientResult, HttpClient};

/// Collections fetched during a restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Categories,
    MealGroups,
    Meals,
    MealSizes,
    MealPairings,
    MealIngredients,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Categories => "categories",
            Resource::MealGroups => "meal groups",
            Resource::Meals => "meals",
            Resource::MealSizes => "meal sizes",
            Resource::MealPairings => "meal pairings",
            Resource::MealIngredients => "meal ingredients",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a restore besides the state itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Collections whose fetch failed and were restored as empty
    pub degraded: Vec<Resource>,
    /// Sizes, pairings and ingredients whose meal was not returned
    pub orphaned_children: usize,
    /// Meal groups and meals dropped for referencing a missing parent
    pub dangling: usize,
}

impl RestoreReport {
    /// Whether every collection was fetched
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Fetch the restaurant attached to the session cookie.
///
/// Fails with [`ClientError::NoSession`] when the server has none.
pub async fn restore_restaurant<C: HttpClient>(api: &MenuApi<C>) -> ClientResult<RestaurantDetails> {
    match api.restore_restaurant().await {
        Ok(session) => session.into_details().ok_or(ClientError::NoSession),
        Err(e) if e.is_missing_session() => Err(ClientError::NoSession),
        Err(e) => Err(e),
    }
}

fn degrade<T>(
    result: ClientResult<Vec<T>>,
    resource: Resource,
    report: &mut RestoreReport,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(%resource, error = %e, "Restore failed, continuing with an empty list");
            report.degraded.push(resource);
            Vec::new()
        }
    }
}

/// Restore the whole menu from the server.
///
/// Halts with [`ClientError::NoSession`] if no restaurant is attached to the
/// session. Any other collection that fails to load degrades to an empty list
/// and is named in the report.
pub async fn restore_menu<C: HttpClient>(api: &MenuApi<C>) -> ClientResult<(MenuState, RestoreReport)> {
    let restaurant = restore_restaurant(api).await?;
    tracing::info!(subdomain = %restaurant.subdomain, "Restaurant session found");

    let (categories, meal_groups, meals, sizes, pairings, ingredients) = tokio::join!(
        api.list_categories(),
        api.list_meal_groups(),
        api.list_meals(),
        api.list_meal_sizes(),
        api.list_meal_pairings(),
        api.list_meal_ingredients(),
    );

    let mut report = RestoreReport::default();
    let categories = degrade(categories, Resource::Categories, &mut report);
    let meal_groups = degrade(meal_groups, Resource::MealGroups, &mut report);
    let meals = degrade(meals, Resource::Meals, &mut report);
    let children = MealChildren {
        sizes: degrade(sizes, Resource::MealSizes, &mut report),
        pairings: degrade(pairings, Resource::MealPairings, &mut report),
        ingredients: degrade(ingredients, Resource::MealIngredients, &mut report),
    };

    let Assembled { meals, orphaned } = assemble_meals(meals, children);
    report.orphaned_children = orphaned;

    let mut state = MenuState {
        restaurant_details: Some(restaurant),
        categories,
        meal_groups,
        meals,
    };
    // A failed parent fetch would make every child look dangling.
    if report.is_complete() {
        report.dangling = state.prune_dangling();
    }

    tracing::info!(
        categories = state.categories.len(),
        meal_groups = state.meal_groups.len(),
        meals = state.meals.len(),
        degraded = report.degraded.len(),
        "Session restored"
    );

    Ok((state, report))
}
