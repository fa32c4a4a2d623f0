//! Durable local key-value storage for Shopfront.
//!
//! Provides a simple, ergonomic API for persisting state to local disk
//! with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_store::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct LineItem {
//!     quantity: i64,
//! }
//!
//! let store = Store::open("./data")?;
//!
//! // Store a value
//! store.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<LineItem>> = store.get("cart")?;
//!
//! // Delete a value
//! store.delete("cart")?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
