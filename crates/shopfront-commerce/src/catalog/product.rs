//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average rating, 0.0 to 5.0.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u32,
}

impl Rating {
    /// Create a new rating.
    pub fn new(rate: f64, count: u32) -> Self {
        Self { rate, count }
    }

    /// Number of full stars to render, clamped to 0..=5.
    pub fn stars(&self) -> u8 {
        self.rate.floor().clamp(0.0, 5.0) as u8
    }

    /// Display string like "4.1 (259 reviews)".
    pub fn summary(&self) -> String {
        format!("{} ({} reviews)", self.rate, self.count)
    }
}

/// A product in the catalog.
///
/// Immutable once fetched; the core never mutates products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category name.
    pub category: String,
    /// Customer rating.
    pub rating: Rating,
}

impl Product {
    /// Title truncated for card display, with "..." appended when cut.
    pub fn short_title(&self, max: usize) -> String {
        if self.title.chars().count() > max {
            let cut: String = self.title.chars().take(max).collect();
            format!("{cut}...")
        } else {
            self.title.clone()
        }
    }
}

/// Pick related products for a detail page: the current product is
/// excluded and the list is capped at `limit`. Callers pass products
/// already narrowed to the relevant category.
pub fn related_products<'a>(
    candidates: &'a [Product],
    current: ProductId,
    limit: usize,
) -> Vec<&'a Product> {
    candidates
        .iter()
        .filter(|p| p.id != current)
        .take(limit)
        .collect()
}
