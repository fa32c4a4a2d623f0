//! Wire-format records for the catalog service.
//!
//! The service sends prices as decimal numbers; conversion to the domain
//! happens here so everything past this boundary works in exact cents.

use serde::{Deserialize, Serialize};
use shopfront_commerce::catalog::{Product, Rating};
use shopfront_commerce::money::{Currency, Money};
use shopfront_commerce::ProductId;

/// A product as the catalog service sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: RatingRecord,
}

/// Rating as the catalog service sends it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct RatingRecord {
    pub rate: f64,
    pub count: u32,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: ProductId::new(record.id),
            title: record.title,
            description: record.description,
            price: Money::from_decimal(record.price, Currency::USD),
            image: record.image,
            category: record.category,
            rating: Rating::new(record.rating.rate, record.rating.count),
        }
    }
}
