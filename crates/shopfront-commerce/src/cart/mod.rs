//! Shopping cart module.
//!
//! Contains the cart state, the persisting cart store, and order totals.

mod cart;
mod persist;
mod store;
mod totals;

pub use cart::{Cart, LineItem};
pub use persist::{StoredCart, CART_KEY};
pub use store::{CartPersistence, CartStore, NoPersistence};
pub use totals::{CartTotals, FREE_SHIPPING_THRESHOLD_CENTS, TAX_RATE_PERCENT};
