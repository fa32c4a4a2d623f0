//! Storefront domain types and logic for Shopfront.
//!
//! This crate provides the state core of a storefront:
//!
//! - **Catalog**: products and ratings
//! - **Cart**: quantity-merging cart with a durable-persistence hook and
//!   order totals
//! - **Search**: the pure filter / sort / paginate query pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//! use shopfront_commerce::cart::StoredCart;
//!
//! // Rehydrate the cart from local storage.
//! let mut cart = CartStore::open(StoredCart::open("./data")?);
//!
//! // Add items; every mutation persists before returning.
//! cart.add_item(&product);
//! cart.add_item(&product);
//! println!("{} items, {}", cart.item_count(), cart.subtotal());
//!
//! // Derive a page of catalog results.
//! let query = CatalogQuery::new()
//!     .with_search_term("backpack")
//!     .with_sort(SortKey::PriceAsc);
//! let page = compute_page(&products, &query, DEFAULT_PAGE_SIZE);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{related_products, Product, Rating};

    // Cart
    pub use crate::cart::{
        Cart, CartPersistence, CartStore, CartTotals, LineItem, NoPersistence,
    };

    // Search
    pub use crate::search::{
        compute_page, CatalogPage, CatalogQuery, Pagination, SortKey, DEFAULT_PAGE_SIZE,
    };
}
