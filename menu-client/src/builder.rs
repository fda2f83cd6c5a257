//! Menu builder
//!
//! Owns the menu under construction and every write to it. Forms hand their
//! input here; the builder validates, submits, and appends the server's
//! answer to the shared state. Only one submission runs at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use shared::client::{
    CreateMealIngredientRequest, CreateMealPairingRequest, CreateMealRequest,
    CreateMealSizeRequest,
};
use shared::models::{
    Category, CategoryCreate, Meal, MealCreate, MealGroup, MealGroupCreate, MealGroupUpdate,
    MealUpdate, MenuState, RestaurantDetails,
};
use shared::validate;
use tokio::sync::RwLock;

use crate::api::MenuApi;
use crate::preview::MenuPreview;
use crate::session::{self, RestoreReport};
use crate::signup::SignupForm;
use crate::{ClientError, ClientResult, HttpClient};

/// Clears the in-flight flag when the submission ends, however it ends
struct SubmitGuard {
    flag: Arc<AtomicBool>,
}

impl SubmitGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> ClientResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::Busy)?;
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn not_found(kind: &str, id: i64) -> ClientError {
    ClientError::NotFound(format!("{kind} {id}"))
}

/// Stateful front of the wizard
///
/// Cloning is cheap; clones share state and the in-flight flag.
#[derive(Debug)]
pub struct MenuBuilder<C> {
    api: MenuApi<C>,
    state: Arc<RwLock<MenuState>>,
    submitting: Arc<AtomicBool>,
}

impl<C> Clone for MenuBuilder<C> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Arc::clone(&self.state),
            submitting: Arc::clone(&self.submitting),
        }
    }
}

impl<C: HttpClient> MenuBuilder<C> {
    pub fn new(api: MenuApi<C>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(MenuState::default())),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_http(http: C) -> Self {
        Self::new(MenuApi::new(http))
    }

    pub fn api(&self) -> &MenuApi<C> {
        &self.api
    }

    /// Snapshot of the current menu
    pub async fn state(&self) -> MenuState {
        self.state.read().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn preview(&self) -> MenuPreview {
        MenuPreview::build(&*self.state.read().await)
    }

    /// Replace local state with what the server holds for this session.
    pub async fn restore_session(&self) -> ClientResult<RestoreReport> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        let (restored, report) = session::restore_menu(&self.api).await?;
        *self.state.write().await = restored;
        Ok(report)
    }

    // ========== Restaurant ==========

    /// Create the restaurant. Once created it cannot change.
    pub async fn create_restaurant(
        &self,
        form: &RestaurantDetails,
    ) -> ClientResult<RestaurantDetails> {
        let details = validate::restaurant(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.restaurant_details.is_some() {
            return Err(ClientError::AlreadyCreated);
        }

        self.api.create_restaurant(&details).await?;
        tracing::info!(subdomain = %details.subdomain, "Restaurant created");

        self.state.write().await.restaurant_details = Some(details.clone());
        Ok(details)
    }

    // ========== Categories ==========

    pub async fn add_category(&self, form: &CategoryCreate) -> ClientResult<Category> {
        let payload = validate::category(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;

        let category = self.api.create_category(&payload).await?;
        tracing::info!(id = category.id, name = %category.name, "Category created");

        self.state.write().await.categories.push(category.clone());
        Ok(category)
    }

    pub async fn update_category(&self, id: i64, form: &CategoryCreate) -> ClientResult<Category> {
        let payload = validate::category(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.category(id).is_none() {
            return Err(not_found("category", id));
        }

        let updated = self.api.update_category(id, &payload).await?;
        let mut state = self.state.write().await;
        if let Some(slot) = state.categories.iter_mut().find(|c| c.id == id) {
            slot.name = updated.name.clone();
            slot.icon = updated.icon.clone();
        }
        Ok(updated)
    }

    /// Delete a category; its meal groups and their meals go with it.
    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.category(id).is_none() {
            return Err(not_found("category", id));
        }

        self.api.delete_category(id).await?;
        self.state.write().await.remove_category(id);
        tracing::info!(id, "Category deleted");
        Ok(())
    }

    // ========== Meal Groups ==========

    pub async fn add_meal_group(&self, form: &MealGroupCreate) -> ClientResult<MealGroup> {
        let payload = validate::meal_group(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        let category_name = self
            .state
            .read()
            .await
            .category(payload.category_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| not_found("category", payload.category_id))?;

        let mut group = self.api.create_meal_group(&payload).await?;
        group.category_name.get_or_insert(category_name);
        tracing::info!(id = group.id, name = %group.name, "Meal group created");

        self.state.write().await.meal_groups.push(group.clone());
        Ok(group)
    }

    pub async fn update_meal_group(
        &self,
        id: i64,
        form: &MealGroupUpdate,
    ) -> ClientResult<MealGroup> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        let category_id = self
            .state
            .read()
            .await
            .meal_group(id)
            .map(|g| g.category_id)
            .ok_or_else(|| not_found("meal group", id))?;
        let checked = validate::meal_group(&MealGroupCreate {
            category_id,
            name: form.name.clone(),
        })?;

        let updated = self
            .api
            .update_meal_group(id, &MealGroupUpdate { name: checked.name })
            .await?;
        let mut state = self.state.write().await;
        if let Some(slot) = state.meal_groups.iter_mut().find(|g| g.id == id) {
            slot.name = updated.name.clone();
        }
        Ok(updated)
    }

    /// Delete a meal group together with its meals.
    pub async fn delete_meal_group(&self, id: i64) -> ClientResult<()> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.meal_group(id).is_none() {
            return Err(not_found("meal group", id));
        }

        self.api.delete_meal_group(id).await?;
        self.state.write().await.remove_meal_group(id);
        tracing::info!(id, "Meal group deleted");
        Ok(())
    }

    // ========== Meals ==========

    /// Create a meal, then each of its sizes, pairings and ingredients.
    ///
    /// The meal reaches local state only when every child was accepted. If a
    /// child fails, the meal already exists on the server without it; the error
    /// is returned and the meal id is logged.
    pub async fn add_meal(&self, form: &MealCreate) -> ClientResult<Meal> {
        validate::meal(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        let group_name = self
            .state
            .read()
            .await
            .meal_group(form.meal_group_id)
            .map(|g| g.name.clone())
            .ok_or_else(|| not_found("meal group", form.meal_group_id))?;

        let request = CreateMealRequest {
            meal_group_id: form.meal_group_id,
            meal_name: form.name.trim().to_string(),
            meal_description: form.description.trim().to_string(),
            meal_image: form.image.clone(),
        };
        let mut meal = self.api.create_meal(&request).await?;

        if let Err(e) = self.create_children(&mut meal, form).await {
            tracing::warn!(meal_id = meal.id, error = %e, "Meal created but its options were not; left orphaned");
            return Err(e);
        }

        meal.meal_group_name.get_or_insert(group_name);
        tracing::info!(
            id = meal.id,
            name = %meal.name,
            sizes = meal.sizes.len(),
            pairings = meal.pairings.len(),
            ingredients = meal.ingredients.len(),
            "Meal created"
        );

        self.state.write().await.meals.push(meal.clone());
        Ok(meal)
    }

    async fn create_children(&self, meal: &mut Meal, form: &MealCreate) -> ClientResult<()> {
        meal.sizes.clear();
        meal.pairings.clear();
        meal.ingredients.clear();

        for size in &form.sizes {
            let created = self
                .api
                .create_meal_size(&CreateMealSizeRequest {
                    meal_id: meal.id,
                    size_name: size.name.trim().to_string(),
                    size_price: size.price,
                })
                .await?;
            meal.sizes.push(created);
        }
        for pairing in &form.pairings {
            let created = self
                .api
                .create_meal_pairing(&CreateMealPairingRequest {
                    meal_id: meal.id,
                    pairing_name: pairing.name.trim().to_string(),
                    pairing_image: pairing.image.clone(),
                    pairing_price: pairing.price,
                })
                .await?;
            meal.pairings.push(created);
        }
        for ingredient in &form.ingredients {
            let created = self
                .api
                .create_meal_ingredient(&CreateMealIngredientRequest {
                    meal_id: meal.id,
                    ingredient_name: ingredient.name.trim().to_string(),
                    ingredient_image: ingredient.image.clone(),
                })
                .await?;
            meal.ingredients.push(created);
        }
        Ok(())
    }

    /// Update a meal's own fields. Sizes, pairings and ingredients are kept.
    pub async fn update_meal(&self, id: i64, form: &MealUpdate) -> ClientResult<Meal> {
        validate::meal_update(form)?;
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.meal(id).is_none() {
            return Err(not_found("meal", id));
        }

        let payload = MealUpdate {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            image: form.image.clone(),
        };
        let updated = self.api.update_meal(id, &payload).await?;

        let mut state = self.state.write().await;
        let slot = state
            .meals
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("meal", id))?;
        slot.name = updated.name;
        slot.description = updated.description;
        slot.image = updated.image;
        Ok(slot.clone())
    }

    pub async fn delete_meal(&self, id: i64) -> ClientResult<()> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        if self.state.read().await.meal(id).is_none() {
            return Err(not_found("meal", id));
        }

        self.api.delete_meal(id).await?;
        self.state.write().await.remove_meal(id);
        tracing::info!(id, "Meal deleted");
        Ok(())
    }

    // ========== Publish ==========

    /// Sign up and hand the finished menu to the backend.
    pub async fn publish(&self, form: SignupForm) -> ClientResult<()> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;
        let snapshot = self.state().await;
        let request = form.into_request(&snapshot)?;

        self.api.signup(&request).await?;
        tracing::info!(email = %request.email, meals = snapshot.meals.len(), "Menu published");
        Ok(())
    }
}
