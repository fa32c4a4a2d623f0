//! Cart store: owned cart state with a persistence hook.

use crate::cart::{Cart, CartTotals, LineItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Persistence hook for cart state.
///
/// The store invokes `save` after every mutation and `load` once at
/// startup. Implementations can be swapped or disabled without touching
/// the mutation logic.
pub trait CartPersistence {
    /// Load previously persisted line items, `None` if nothing is stored.
    fn load(&self) -> Result<Option<Vec<LineItem>>, CommerceError>;

    /// Persist the full line item sequence, replacing any prior value.
    fn save(&self, items: &[LineItem]) -> Result<(), CommerceError>;
}

/// Persistence disabled: loads nothing, saves nowhere.
pub struct NoPersistence;

impl CartPersistence for NoPersistence {
    fn load(&self) -> Result<Option<Vec<LineItem>>, CommerceError> {
        Ok(None)
    }

    fn save(&self, _items: &[LineItem]) -> Result<(), CommerceError> {
        Ok(())
    }
}

/// The authoritative cart, wired to a persistence hook.
///
/// Every mutation fully applies to the in-memory cart and is then handed
/// to the hook before the call returns. A failing hook is logged and
/// swallowed: cart correctness never depends on persistence succeeding.
/// Readers only ever observe fully-applied states.
pub struct CartStore<P: CartPersistence> {
    cart: Cart,
    persistence: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Open the store, rehydrating from persisted state.
    ///
    /// Missing or unreadable state resolves to an empty cart.
    pub fn open(persistence: P) -> Self {
        let cart = match persistence.load() {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable persisted cart");
                Cart::new()
            }
        };
        Self { cart, persistence }
    }

    /// Add one unit of a product and persist.
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
        self.persist();
    }

    /// Remove a line item and persist. No-op for absent products.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove_item(id);
        self.persist();
        removed
    }

    /// Set a line item's quantity and persist. A quantity <= 0 removes
    /// the item; absent products are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(id, quantity);
        self.persist();
        changed
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The line items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Order summary totals for the current contents.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(self.cart.items()) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use crate::money::Currency;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price: Money::new(price_cents, Currency::USD),
            image: String::new(),
            category: "misc".to_string(),
            rating: Rating::new(4.5, 20),
        }
    }

    /// Records every save into shared memory.
    #[derive(Clone, Default)]
    struct RecordingPersistence {
        stored: Rc<RefCell<Option<Vec<LineItem>>>>,
        saves: Rc<RefCell<usize>>,
    }

    impl CartPersistence for RecordingPersistence {
        fn load(&self) -> Result<Option<Vec<LineItem>>, CommerceError> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, items: &[LineItem]) -> Result<(), CommerceError> {
            *self.stored.borrow_mut() = Some(items.to_vec());
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    /// Always fails to save.
    struct BrokenPersistence;

    impl CartPersistence for BrokenPersistence {
        fn load(&self) -> Result<Option<Vec<LineItem>>, CommerceError> {
            Err(CommerceError::StorageError("disk on fire".to_string()))
        }

        fn save(&self, _items: &[LineItem]) -> Result<(), CommerceError> {
            Err(CommerceError::StorageError("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_open_with_nothing_stored_starts_empty() {
        let store = CartStore::open(NoPersistence);
        assert!(store.cart().is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_every_mutation_persists() {
        let persistence = RecordingPersistence::default();
        let mut store = CartStore::open(persistence.clone());

        store.add_item(&product(1, 2999));
        store.update_quantity(ProductId::new(1), 3);
        store.remove_item(ProductId::new(1));
        store.clear();

        assert_eq!(*persistence.saves.borrow(), 4);
        assert_eq!(persistence.stored.borrow().as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_persisted_state_matches_cart() {
        let persistence = RecordingPersistence::default();
        let mut store = CartStore::open(persistence.clone());

        store.add_item(&product(1, 2999));
        store.add_item(&product(2, 1599));
        store.add_item(&product(1, 2999));

        let stored = persistence.stored.borrow().clone().unwrap();
        assert_eq!(stored, store.items());
        assert_eq!(stored[0].quantity, 2);
    }

    #[test]
    fn test_rehydration_round_trip() {
        let persistence = RecordingPersistence::default();
        {
            let mut store = CartStore::open(persistence.clone());
            store.add_item(&product(1, 2999));
            store.add_item(&product(2, 1599));
            store.update_quantity(ProductId::new(2), 4);
        }

        let revived = CartStore::open(persistence);
        assert_eq!(revived.item_count(), 5);
        assert_eq!(revived.items()[0].id, ProductId::new(1));
        assert_eq!(revived.items()[1].quantity, 4);
        assert_eq!(revived.subtotal().amount_cents, 2999 + 4 * 1599);
    }

    #[test]
    fn test_unreadable_state_resolves_to_empty_cart() {
        let store = CartStore::open(BrokenPersistence);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_failed_save_does_not_affect_memory() {
        let mut store = CartStore::open(BrokenPersistence);

        store.add_item(&product(1, 2999));
        store.add_item(&product(1, 2999));

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.subtotal().amount_cents, 5998);
    }

    #[test]
    fn test_aggregates_after_clear() {
        let mut store = CartStore::open(NoPersistence);
        store.add_item(&product(1, 2999));
        store.clear();

        assert_eq!(store.subtotal().amount_cents, 0);
        assert_eq!(store.item_count(), 0);
    }
}
