//! Form validation
//!
//! Local checks run before anything is sent to the backend.

use thiserror::Error;

use crate::models::{CategoryCreate, MealCreate, MealGroupCreate, MealUpdate, RestaurantDetails};
use crate::util::{is_blank, normalize_subdomain};

/// Minimum password length accepted on signup
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a positive amount")]
    InvalidPrice(&'static str),

    #[error("A meal needs at least one size")]
    NoSizes,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn price(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidPrice(field));
    }
    Ok(())
}

/// Trim every field and normalize the subdomain.
pub fn restaurant(input: &RestaurantDetails) -> Result<RestaurantDetails, ValidationError> {
    let details = RestaurantDetails {
        name: input.name.trim().to_string(),
        country: input.country.trim().to_string(),
        city: input.city.trim().to_string(),
        subdomain: normalize_subdomain(&input.subdomain),
    };
    required(&details.name, "Restaurant name")?;
    required(&details.country, "Country")?;
    required(&details.city, "City")?;
    required(&details.subdomain, "Subdomain")?;
    Ok(details)
}

pub fn category(input: &CategoryCreate) -> Result<CategoryCreate, ValidationError> {
    required(&input.name, "Category name")?;
    Ok(CategoryCreate {
        name: input.name.trim().to_string(),
        icon: input.icon.clone(),
    })
}

pub fn meal_group(input: &MealGroupCreate) -> Result<MealGroupCreate, ValidationError> {
    required(&input.name, "Meal group name")?;
    Ok(MealGroupCreate {
        category_id: input.category_id,
        name: input.name.trim().to_string(),
    })
}

/// Check a meal draft: name, at least one size, positive prices, named children.
pub fn meal(input: &MealCreate) -> Result<(), ValidationError> {
    required(&input.name, "Meal name")?;
    if input.sizes.is_empty() {
        return Err(ValidationError::NoSizes);
    }
    for size in &input.sizes {
        required(&size.name, "Size name")?;
        price(size.price, "Size price")?;
    }
    for pairing in &input.pairings {
        required(&pairing.name, "Pairing name")?;
        price(pairing.price, "Pairing price")?;
    }
    for ingredient in &input.ingredients {
        required(&ingredient.name, "Ingredient name")?;
    }
    Ok(())
}

pub fn meal_update(input: &MealUpdate) -> Result<(), ValidationError> {
    required(&input.name, "Meal name")
}

/// Signup form check.
///
/// The password is compared and measured as typed; the returned email and
/// password are trimmed for sending.
pub fn signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(String, String), ValidationError> {
    required(email, "Email")?;
    required(password, "Password")?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok((email.trim().to_string(), password.trim().to_string()))
}
