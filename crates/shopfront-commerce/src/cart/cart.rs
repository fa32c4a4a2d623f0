//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::{Product, Rating};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart: one distinct product and its quantity.
///
/// Product fields are copied in when the product is first added, so the
/// cart stays renderable without the catalog in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
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
    /// Customer rating at the time the product was added.
    pub rating: Rating,
    /// Quantity, always >= 1 while the item is in the cart.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item for a product with quantity 1.
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            rating: product.rating,
            quantity: 1,
        }
    }

    /// Total for this line (unit price x quantity).
    pub fn line_total(&self) -> Money {
        Money::new(
            self.price.amount_cents.saturating_mul(self.quantity),
            self.price.currency,
        )
    }
}

/// A shopping cart.
///
/// Holds at most one line item per distinct product id, in the order each
/// product was first added. Re-adding an existing product increments its
/// quantity without moving it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Add one unit of a product.
    ///
    /// If a line item for the product already exists its quantity goes up
    /// by 1; otherwise a new line item is appended. Adding N units means
    /// N calls.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem::new(product));
    }

    /// Remove a line item. Removing an absent product is a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Set a line item's quantity.
    ///
    /// A quantity <= 0 removes the item. Updating an absent product is a
    /// no-op. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get_item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The line items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The cart's currency: the first line item's, or the default when
    /// the cart is empty.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or_default()
    }

    /// Sum of all line totals, in exact cents.
    pub fn subtotal(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total().amount_cents));
        Money::new(cents, self.currency())
    }

    /// Order summary totals for the current contents.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal())
    }
}
