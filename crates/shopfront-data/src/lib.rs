//! HTTP client for the remote product catalog service.
//!
//! Provides the Product Catalog Source the storefront core consumes: the
//! full product collection and the category list, plus the detail-page
//! lookups the listing core doesn't use directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{CatalogClient, CatalogSource};
//!
//! let client = CatalogClient::new()?;
//!
//! let products = client.fetch_products().await?;
//! let categories = client.fetch_categories().await?;
//! ```

mod client;
mod error;
mod record;

pub use client::{CatalogClient, CatalogSource, SortDirection, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use record::{ProductRecord, RatingRecord};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogClient, CatalogSource, FetchError, SortDirection};
}
