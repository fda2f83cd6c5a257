//! Shared types for the menu builder
//!
//! Wire and domain models for restaurants, categories, meal groups and meals,
//! the request payloads the backend accepts, and the pure helpers the client
//! builds on (subdomain normalization, form validation, the meal join).

pub mod client;
pub mod join;
pub mod models;
pub mod response;
pub mod util;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use join::{MealChildren, assemble_meals};
pub use models::*;
pub use response::ApiErrorBody;
pub use validate::ValidationError;
