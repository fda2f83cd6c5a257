//! Data models
//!
//! Mirrors of the backend's menu entities. Field names follow the wire format
//! (`category_name`, `meal_group_id`, ...) through serde renames; Rust-side
//! names stay short. All ids are server-assigned `i64`.

pub mod category;
pub mod meal;
pub mod meal_group;
pub mod menu;
pub mod restaurant;

// Re-exports
pub use category::*;
pub use meal::*;
pub use meal_group::*;
pub use menu::*;
pub use restaurant::*;
