//! Typed menu API
//!
//! One method per backend endpoint. No local state and no validation here;
//! [`crate::MenuBuilder`] layers both on top.

use std::sync::Arc;

use serde::de::IgnoredAny;
use shared::client::{
    CreateMealIngredientRequest, CreateMealPairingRequest, CreateMealRequest,
    CreateMealSizeRequest, SignupRequest,
};
use shared::models::{
    Category, CategoryCreate, Meal, MealGroup, MealGroupCreate, MealGroupUpdate, MealIngredient,
    MealPairing, MealSize, MealUpdate, RestaurantDetails, RestaurantSession,
};

use crate::{ClientResult, HttpClient};

/// Endpoint paths
pub mod paths {
    pub const RESTORE_RESTAURANT: &str = "/restaurant/restore-restaurant-session";
    pub const CREATE_RESTAURANT: &str = "/restaurant/create-restaurant";

    pub const RESTORE_CATEGORIES: &str = "/menu/restore-category-session";
    pub const CREATE_CATEGORY: &str = "/menu/create-category";
    pub const UPDATE_CATEGORY: &str = "/menu/update-category";
    pub const DELETE_CATEGORY: &str = "/menu/delete-category";

    pub const RESTORE_MEAL_GROUPS: &str = "/menu/restore-meal-group-session";
    pub const CREATE_MEAL_GROUP: &str = "/menu/create-meal-group";
    pub const UPDATE_MEAL_GROUP: &str = "/menu/update-meal-group";
    pub const DELETE_MEAL_GROUP: &str = "/menu/delete-meal-group";

    pub const RESTORE_MEALS: &str = "/menu/restore-meal-session";
    pub const CREATE_MEAL: &str = "/menu/create-meal";
    pub const UPDATE_MEAL: &str = "/menu/update-meal";
    pub const DELETE_MEAL: &str = "/menu/delete-meal";

    pub const RESTORE_MEAL_SIZES: &str = "/menu/restore-meal-size-session";
    pub const CREATE_MEAL_SIZE: &str = "/menu/create-meal-size";
    pub const RESTORE_MEAL_PAIRINGS: &str = "/menu/restore-meal-pairing-session";
    pub const CREATE_MEAL_PAIRING: &str = "/menu/create-meal-pairing";
    pub const RESTORE_MEAL_INGREDIENTS: &str = "/menu/restore-meal-ingredient-session";
    pub const CREATE_MEAL_INGREDIENT: &str = "/menu/create-meal-ingredient";

    pub const SIGNUP: &str = "/auth/signup";
}

/// Typed wrapper over an [`HttpClient`]
#[derive(Debug)]
pub struct MenuApi<C> {
    http: Arc<C>,
}

impl<C> Clone for MenuApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> MenuApi<C> {
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    // ========== Restaurant ==========

    /// An empty body means no restaurant is attached to the session
    pub async fn restore_restaurant(&self) -> ClientResult<RestaurantSession> {
        let session: Option<RestaurantSession> = self.http.get(paths::RESTORE_RESTAURANT).await?;
        Ok(session.unwrap_or_default())
    }

    pub async fn create_restaurant(&self, details: &RestaurantDetails) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post(paths::CREATE_RESTAURANT, details).await?;
        Ok(())
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get(paths::RESTORE_CATEGORIES).await
    }

    pub async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        self.http.post(paths::CREATE_CATEGORY, payload).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryCreate) -> ClientResult<Category> {
        self.http
            .put(&format!("{}/{id}", paths::UPDATE_CATEGORY), payload)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .delete(&format!("{}/{id}", paths::DELETE_CATEGORY))
            .await?;
        Ok(())
    }

    // ========== Meal Groups ==========

    pub async fn list_meal_groups(&self) -> ClientResult<Vec<MealGroup>> {
        self.http.get(paths::RESTORE_MEAL_GROUPS).await
    }

    pub async fn create_meal_group(&self, payload: &MealGroupCreate) -> ClientResult<MealGroup> {
        self.http.post(paths::CREATE_MEAL_GROUP, payload).await
    }

    pub async fn update_meal_group(
        &self,
        id: i64,
        payload: &MealGroupUpdate,
    ) -> ClientResult<MealGroup> {
        self.http
            .put(&format!("{}/{id}", paths::UPDATE_MEAL_GROUP), payload)
            .await
    }

    pub async fn delete_meal_group(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .delete(&format!("{}/{id}", paths::DELETE_MEAL_GROUP))
            .await?;
        Ok(())
    }

    // ========== Meals ==========

    pub async fn list_meals(&self) -> ClientResult<Vec<Meal>> {
        self.http.get(paths::RESTORE_MEALS).await
    }

    pub async fn create_meal(&self, payload: &CreateMealRequest) -> ClientResult<Meal> {
        self.http.post(paths::CREATE_MEAL, payload).await
    }

    pub async fn update_meal(&self, id: i64, payload: &MealUpdate) -> ClientResult<Meal> {
        self.http
            .put(&format!("{}/{id}", paths::UPDATE_MEAL), payload)
            .await
    }

    pub async fn delete_meal(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .delete(&format!("{}/{id}", paths::DELETE_MEAL))
            .await?;
        Ok(())
    }

    // ========== Meal children ==========

    pub async fn list_meal_sizes(&self) -> ClientResult<Vec<MealSize>> {
        self.http.get(paths::RESTORE_MEAL_SIZES).await
    }

    pub async fn create_meal_size(&self, payload: &CreateMealSizeRequest) -> ClientResult<MealSize> {
        self.http.post(paths::CREATE_MEAL_SIZE, payload).await
    }

    pub async fn list_meal_pairings(&self) -> ClientResult<Vec<MealPairing>> {
        self.http.get(paths::RESTORE_MEAL_PAIRINGS).await
    }

    pub async fn create_meal_pairing(
        &self,
        payload: &CreateMealPairingRequest,
    ) -> ClientResult<MealPairing> {
        self.http.post(paths::CREATE_MEAL_PAIRING, payload).await
    }

    pub async fn list_meal_ingredients(&self) -> ClientResult<Vec<MealIngredient>> {
        self.http.get(paths::RESTORE_MEAL_INGREDIENTS).await
    }

    pub async fn create_meal_ingredient(
        &self,
        payload: &CreateMealIngredientRequest,
    ) -> ClientResult<MealIngredient> {
        self.http.post(paths::CREATE_MEAL_INGREDIENT, payload).await
    }

    // ========== Auth ==========

    pub async fn signup(&self, payload: &SignupRequest) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post(paths::SIGNUP, payload).await?;
        Ok(())
    }
}
