//! In-process mock of the menu backend
//!
//! Routes mirror the real API. The restaurant restore endpoint requires the
//! session cookie set by create-restaurant. Any route can be made to fail or
//! slow down.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use menu_client::{MenuBuilder, OneshotHttpClient};
use serde_json::{Value, json};
use shared::client::{
    CreateMealIngredientRequest, CreateMealPairingRequest, CreateMealRequest,
    CreateMealSizeRequest,
};
use shared::models::{
    Category, CategoryCreate, Meal, MealGroup, MealGroupCreate, MealGroupUpdate, MealIngredient,
    MealPairing, MealSize, MealUpdate, RestaurantDetails,
};

pub const SESSION_COOKIE: &str = "menu_session";

#[derive(Debug, Default)]
pub struct Backend {
    pub restaurant: Option<RestaurantDetails>,
    pub categories: Vec<Category>,
    pub meal_groups: Vec<MealGroup>,
    pub meals: Vec<Meal>,
    pub sizes: Vec<MealSize>,
    pub pairings: Vec<MealPairing>,
    pub ingredients: Vec<MealIngredient>,
    pub signups: Vec<Value>,
    /// Every request seen, as "METHOD /path"
    pub requests: Vec<String>,
    /// Routes ("METHOD /path" without ids) answering 500
    pub failing: HashSet<String>,
    pub delay: Option<Duration>,
    next_id: i64,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn count(&self, route: &str) -> usize {
        self.requests.iter().filter(|r| r.as_str() == route).count()
    }

    pub fn fail(&mut self, route: &str) {
        self.failing.insert(route.to_string());
    }

    pub fn seed_category(&mut self, name: &str) -> i64 {
        let id = self.next_id();
        self.categories.push(Category {
            id,
            name: name.into(),
            icon: Default::default(),
        });
        id
    }

    pub fn seed_meal_group(&mut self, category_id: i64, name: &str) -> i64 {
        let id = self.next_id();
        self.meal_groups.push(MealGroup {
            id,
            category_id,
            name: name.into(),
            category_name: None,
        });
        id
    }

    pub fn seed_meal(&mut self, meal_group_id: i64, name: &str) -> i64 {
        let id = self.next_id();
        self.meals.push(Meal {
            id,
            meal_group_id,
            name: name.into(),
            description: String::new(),
            image: None,
            meal_group_name: None,
            sizes: vec![],
            pairings: vec![],
            ingredients: vec![],
        });
        id
    }

    pub fn seed_size(&mut self, meal_id: i64, name: &str, price: f64) -> i64 {
        let id = self.next_id();
        self.sizes.push(MealSize {
            id,
            meal_id,
            name: name.into(),
            price,
        });
        id
    }
}

pub type SharedBackend = Arc<Mutex<Backend>>;

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

/// Record the request, then apply injected failure and delay.
async fn enter(state: &SharedBackend, route: &str) -> Result<(), ApiError> {
    let delay = {
        let mut backend = state.lock().unwrap();
        backend.requests.push(route.to_string());
        if backend.failing.contains(route) {
            return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"));
        }
        backend.delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(&format!("{SESSION_COOKIE}=")))
}

// ========== Restaurant ==========

async fn restore_restaurant(
    State(state): State<SharedBackend>,
    headers: HeaderMap,
) -> ApiResult<RestaurantDetails> {
    enter(&state, "GET /restaurant/restore-restaurant-session").await?;
    if !has_session(&headers) {
        return Err(error(StatusCode::UNAUTHORIZED, "Not authenticated"));
    }
    let backend = state.lock().unwrap();
    backend
        .restaurant
        .clone()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "No restaurant for this session"))
}

async fn create_restaurant(
    State(state): State<SharedBackend>,
    Json(details): Json<RestaurantDetails>,
) -> Result<impl IntoResponse, ApiError> {
    enter(&state, "POST /restaurant/create-restaurant").await?;
    state.lock().unwrap().restaurant = Some(details);
    let cookie = format!("{SESSION_COOKIE}=s-1; Path=/; HttpOnly");
    Ok((
        [(SET_COOKIE, cookie)],
        Json(json!({ "message": "Restaurant created" })),
    ))
}

// ========== Categories ==========

async fn list_categories(State(state): State<SharedBackend>) -> ApiResult<Vec<Category>> {
    enter(&state, "GET /menu/restore-category-session").await?;
    Ok(Json(state.lock().unwrap().categories.clone()))
}

async fn create_category(
    State(state): State<SharedBackend>,
    Json(payload): Json<CategoryCreate>,
) -> ApiResult<Category> {
    enter(&state, "POST /menu/create-category").await?;
    let mut backend = state.lock().unwrap();
    let category = Category {
        id: backend.next_id(),
        name: payload.name,
        icon: payload.icon,
    };
    backend.categories.push(category.clone());
    Ok(Json(category))
}

async fn update_category(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryCreate>,
) -> ApiResult<Category> {
    enter(&state, "PUT /menu/update-category").await?;
    let mut backend = state.lock().unwrap();
    let category = backend
        .categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Category not found"))?;
    category.name = payload.name;
    category.icon = payload.icon;
    Ok(Json(category.clone()))
}

async fn delete_category(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
) -> ApiResult<Value> {
    enter(&state, "DELETE /menu/delete-category").await?;
    state.lock().unwrap().categories.retain(|c| c.id != id);
    Ok(Json(json!({ "message": "Category deleted" })))
}

// ========== Meal Groups ==========

async fn list_meal_groups(State(state): State<SharedBackend>) -> ApiResult<Vec<MealGroup>> {
    enter(&state, "GET /menu/restore-meal-group-session").await?;
    Ok(Json(state.lock().unwrap().meal_groups.clone()))
}

async fn create_meal_group(
    State(state): State<SharedBackend>,
    Json(payload): Json<MealGroupCreate>,
) -> ApiResult<MealGroup> {
    enter(&state, "POST /menu/create-meal-group").await?;
    let mut backend = state.lock().unwrap();
    let group = MealGroup {
        id: backend.next_id(),
        category_id: payload.category_id,
        name: payload.name,
        category_name: None,
    };
    backend.meal_groups.push(group.clone());
    Ok(Json(group))
}

async fn update_meal_group(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
    Json(payload): Json<MealGroupUpdate>,
) -> ApiResult<MealGroup> {
    enter(&state, "PUT /menu/update-meal-group").await?;
    let mut backend = state.lock().unwrap();
    let group = backend
        .meal_groups
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Meal group not found"))?;
    group.name = payload.name;
    Ok(Json(group.clone()))
}

async fn delete_meal_group(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
) -> ApiResult<Value> {
    enter(&state, "DELETE /menu/delete-meal-group").await?;
    state.lock().unwrap().meal_groups.retain(|g| g.id != id);
    Ok(Json(json!({ "message": "Meal group deleted" })))
}

// ========== Meals ==========

async fn list_meals(State(state): State<SharedBackend>) -> ApiResult<Vec<Meal>> {
    enter(&state, "GET /menu/restore-meal-session").await?;
    Ok(Json(state.lock().unwrap().meals.clone()))
}

async fn create_meal(
    State(state): State<SharedBackend>,
    Json(payload): Json<CreateMealRequest>,
) -> ApiResult<Meal> {
    enter(&state, "POST /menu/create-meal").await?;
    let mut backend = state.lock().unwrap();
    let meal = Meal {
        id: backend.next_id(),
        meal_group_id: payload.meal_group_id,
        name: payload.meal_name,
        description: payload.meal_description,
        image: payload.meal_image,
        meal_group_name: None,
        sizes: vec![],
        pairings: vec![],
        ingredients: vec![],
    };
    backend.meals.push(meal.clone());
    Ok(Json(meal))
}

async fn update_meal(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
    Json(payload): Json<MealUpdate>,
) -> ApiResult<Meal> {
    enter(&state, "PUT /menu/update-meal").await?;
    let mut backend = state.lock().unwrap();
    let meal = backend
        .meals
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Meal not found"))?;
    meal.name = payload.name;
    meal.description = payload.description;
    meal.image = payload.image;
    Ok(Json(meal.clone()))
}

async fn delete_meal(State(state): State<SharedBackend>, Path(id): Path<i64>) -> ApiResult<Value> {
    enter(&state, "DELETE /menu/delete-meal").await?;
    state.lock().unwrap().meals.retain(|m| m.id != id);
    Ok(Json(json!({ "message": "Meal deleted" })))
}

// ========== Meal children ==========

async fn list_sizes(State(state): State<SharedBackend>) -> ApiResult<Vec<MealSize>> {
    enter(&state, "GET /menu/restore-meal-size-session").await?;
    Ok(Json(state.lock().unwrap().sizes.clone()))
}

async fn create_size(
    State(state): State<SharedBackend>,
    Json(payload): Json<CreateMealSizeRequest>,
) -> ApiResult<MealSize> {
    enter(&state, "POST /menu/create-meal-size").await?;
    let mut backend = state.lock().unwrap();
    let size = MealSize {
        id: backend.next_id(),
        meal_id: payload.meal_id,
        name: payload.size_name,
        price: payload.size_price,
    };
    backend.sizes.push(size.clone());
    Ok(Json(size))
}

async fn list_pairings(State(state): State<SharedBackend>) -> ApiResult<Vec<MealPairing>> {
    enter(&state, "GET /menu/restore-meal-pairing-session").await?;
    Ok(Json(state.lock().unwrap().pairings.clone()))
}

async fn create_pairing(
    State(state): State<SharedBackend>,
    Json(payload): Json<CreateMealPairingRequest>,
) -> ApiResult<MealPairing> {
    enter(&state, "POST /menu/create-meal-pairing").await?;
    let mut backend = state.lock().unwrap();
    let pairing = MealPairing {
        id: backend.next_id(),
        meal_id: payload.meal_id,
        name: payload.pairing_name,
        image: payload.pairing_image,
        price: payload.pairing_price,
    };
    backend.pairings.push(pairing.clone());
    Ok(Json(pairing))
}

async fn list_ingredients(State(state): State<SharedBackend>) -> ApiResult<Vec<MealIngredient>> {
    enter(&state, "GET /menu/restore-meal-ingredient-session").await?;
    Ok(Json(state.lock().unwrap().ingredients.clone()))
}

async fn create_ingredient(
    State(state): State<SharedBackend>,
    Json(payload): Json<CreateMealIngredientRequest>,
) -> ApiResult<MealIngredient> {
    enter(&state, "POST /menu/create-meal-ingredient").await?;
    let mut backend = state.lock().unwrap();
    let ingredient = MealIngredient {
        id: backend.next_id(),
        meal_id: payload.meal_id,
        name: payload.ingredient_name,
        image: payload.ingredient_image,
    };
    backend.ingredients.push(ingredient.clone());
    Ok(Json(ingredient))
}

// ========== Auth ==========

async fn signup(State(state): State<SharedBackend>, Json(payload): Json<Value>) -> ApiResult<Value> {
    enter(&state, "POST /auth/signup").await?;
    let mut backend = state.lock().unwrap();
    let email = payload["email"].as_str().unwrap_or_default().to_string();
    if backend.signups.iter().any(|s| s["email"] == email.as_str()) {
        return Err(error(StatusCode::CONFLICT, "Email already registered"));
    }
    backend.signups.push(payload);
    Ok(Json(json!({ "message": "Account created" })))
}

pub fn router(state: SharedBackend) -> Router {
    Router::new()
        .route("/restaurant/restore-restaurant-session", get(restore_restaurant))
        .route("/restaurant/create-restaurant", post(create_restaurant))
        .route("/menu/restore-category-session", get(list_categories))
        .route("/menu/create-category", post(create_category))
        .route("/menu/update-category/{id}", put(update_category))
        .route("/menu/delete-category/{id}", delete(delete_category))
        .route("/menu/restore-meal-group-session", get(list_meal_groups))
        .route("/menu/create-meal-group", post(create_meal_group))
        .route("/menu/update-meal-group/{id}", put(update_meal_group))
        .route("/menu/delete-meal-group/{id}", delete(delete_meal_group))
        .route("/menu/restore-meal-session", get(list_meals))
        .route("/menu/create-meal", post(create_meal))
        .route("/menu/update-meal/{id}", put(update_meal))
        .route("/menu/delete-meal/{id}", delete(delete_meal))
        .route("/menu/restore-meal-size-session", get(list_sizes))
        .route("/menu/create-meal-size", post(create_size))
        .route("/menu/restore-meal-pairing-session", get(list_pairings))
        .route("/menu/create-meal-pairing", post(create_pairing))
        .route("/menu/restore-meal-ingredient-session", get(list_ingredients))
        .route("/menu/create-meal-ingredient", post(create_ingredient))
        .route("/auth/signup", post(signup))
        .with_state(state)
}

/// Fresh backend plus a client wired to it
pub fn setup() -> (SharedBackend, OneshotHttpClient) {
    let backend = SharedBackend::default();
    let client = OneshotHttpClient::new(router(backend.clone()));
    (backend, client)
}

pub fn golden_fork() -> RestaurantDetails {
    RestaurantDetails {
        name: "The Golden Fork".into(),
        country: "Kenya".into(),
        city: "Nairobi".into(),
        subdomain: "goldenfork".into(),
    }
}

/// Builder with the restaurant already created
pub async fn builder_with_restaurant() -> (SharedBackend, OneshotHttpClient, MenuBuilder<OneshotHttpClient>) {
    let (backend, client) = setup();
    let builder = MenuBuilder::from_http(client.clone());
    builder.create_restaurant(&golden_fork()).await.unwrap();
    (backend, client, builder)
}
