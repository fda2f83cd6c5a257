//! Stock images
//!
//! Built-in catalog offered by the image picker. Upload and generation are not
//! available; the picker only hands back a URL.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockImage {
    pub url: &'static str,
    pub tags: &'static [&'static str],
}

impl StockImage {
    /// Whether any tag contains `needle` (already lower-cased)
    fn matches(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.contains(needle))
    }
}

pub const STOCK_IMAGES: &[StockImage] = &[
    StockImage {
        url: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400&h=300&fit=crop",
        tags: &["food", "meal", "dish"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=300&fit=crop",
        tags: &["pizza", "italian", "food"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400&h=300&fit=crop",
        tags: &["pancakes", "breakfast", "food"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?w=400&h=300&fit=crop",
        tags: &["salad", "healthy", "food"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=400&h=300&fit=crop",
        tags: &["burger", "fast food", "meal"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1563379926898-05f4575a45d8?w=400&h=300&fit=crop",
        tags: &["coffee", "drink", "beverage"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=400&h=300&fit=crop",
        tags: &["dessert", "cake", "sweet"],
    },
    StockImage {
        url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400&h=300&fit=crop",
        tags: &["salad", "vegetables", "healthy"],
    },
];

/// Stock images whose tags contain `query`, ignoring case. A blank query returns everything.
pub fn search_stock(query: &str) -> Vec<&'static StockImage> {
    let needle = query.trim().to_lowercase();
    STOCK_IMAGES
        .iter()
        .filter(|image| needle.is_empty() || image.matches(&needle))
        .collect()
}
