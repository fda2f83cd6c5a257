//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant profile, created once per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    #[serde(rename = "restaurant_name")]
    pub name: String,
    #[serde(rename = "restaurant_country")]
    pub country: String,
    #[serde(rename = "restaurant_city")]
    pub city: String,
    /// Lower-case alphanumeric slug, unique across restaurants
    #[serde(rename = "restaurant_subdomain")]
    pub subdomain: String,
}

/// Body of `GET /restaurant/restore-restaurant-session`
///
/// The backend answers with an empty object when no restaurant is attached to
/// the session cookie, so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantSession {
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub restaurant_country: Option<String>,
    #[serde(default)]
    pub restaurant_city: Option<String>,
    #[serde(default)]
    pub restaurant_subdomain: Option<String>,
}

impl RestaurantSession {
    /// The restored restaurant, if the session carries one
    pub fn into_details(self) -> Option<RestaurantDetails> {
        let name = self.restaurant_name.filter(|n| !n.trim().is_empty())?;
        Some(RestaurantDetails {
            name,
            country: self.restaurant_country.unwrap_or_default(),
            city: self.restaurant_city.unwrap_or_default(),
            subdomain: self.restaurant_subdomain.unwrap_or_default(),
        })
    }
}
