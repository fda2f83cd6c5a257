//! Menu Client - menu builder client for the restaurant menu backend
//!
//! Walks a restaurant owner through restaurant details, categories, meal
//! groups and meals, keeping a local mirror of everything the server accepted.

pub mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod preview;
pub mod session;
pub mod signup;
pub mod wizard;

pub use api::MenuApi;
pub use builder::MenuBuilder;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use images::{StockImage, search_stock};
pub use preview::MenuPreview;
pub use session::{Resource, RestoreReport};
pub use signup::SignupForm;
pub use wizard::{Step, Wizard, WizardError};

// Re-export shared types for convenience
pub use shared::models::{
    Category, CategoryCreate, CategoryIcon, Meal, MealCreate, MealGroup, MealGroupCreate,
    MealGroupUpdate, MealUpdate, MenuState, RestaurantDetails,
};
