//! Durable cart persistence over the local key-value store.

use crate::cart::{CartPersistence, LineItem};
use crate::error::CommerceError;
use shopfront_store::Store;

/// The single fixed key the cart lives under.
pub const CART_KEY: &str = "cart";

/// Cart persistence backed by a [`Store`].
///
/// The full line item sequence is serialized under [`CART_KEY`] on every
/// save, overwriting any prior value.
pub struct StoredCart {
    store: Store,
}

impl StoredCart {
    /// Wrap an already-open store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Open a store rooted at the given directory.
    pub fn open(root: impl Into<std::path::PathBuf>) -> Result<Self, CommerceError> {
        Ok(Self::new(Store::open(root)?))
    }
}

impl CartPersistence for StoredCart {
    fn load(&self) -> Result<Option<Vec<LineItem>>, CommerceError> {
        Ok(self.store.get(CART_KEY)?)
    }

    fn save(&self, items: &[LineItem]) -> Result<(), CommerceError> {
        Ok(self.store.set(CART_KEY, items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::{Product, Rating};
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_root() -> std::path::PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "shopfront-cart-test-{}-{}",
            std::process::id(),
            n
        ))
    }

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price: Money::new(price_cents, Currency::USD),
            image: String::new(),
            category: "misc".to_string(),
            rating: Rating::new(3.9, 120),
        }
    }

    #[test]
    fn test_round_trip_through_disk() {
        let root = temp_root();
        {
            let mut store = CartStore::open(StoredCart::open(&root).unwrap());
            store.add_item(&product(1, 2999));
            store.add_item(&product(2, 1599));
            store.add_item(&product(1, 2999));
        }

        let revived = CartStore::open(StoredCart::open(&root).unwrap());
        assert_eq!(revived.items().len(), 2);
        assert_eq!(revived.items()[0].id, ProductId::new(1));
        assert_eq!(revived.items()[0].quantity, 2);
        assert_eq!(revived.item_count(), 3);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = CartStore::open(StoredCart::open(temp_root()).unwrap());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let root = temp_root();
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(format!("{CART_KEY}.json")), b"{ not json").unwrap();

        let store = CartStore::open(StoredCart::open(&root).unwrap());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let root = temp_root();
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(format!("{CART_KEY}.json")), b"").unwrap();

        let store = CartStore::open(StoredCart::open(&root).unwrap());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_clear_overwrites_persisted_value() {
        let root = temp_root();
        {
            let mut store = CartStore::open(StoredCart::open(&root).unwrap());
            store.add_item(&product(1, 2999));
            store.clear();
        }

        let revived = CartStore::open(StoredCart::open(&root).unwrap());
        assert!(revived.cart().is_empty());
    }
}
