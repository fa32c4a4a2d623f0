//! Order summary totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax rate applied at the order summary, as a percentage.
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// Subtotal at or above this qualifies for the free-shipping banner,
/// in cents.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 5000;

/// Totals breakdown for a cart's order summary.
///
/// Computed on demand from the cart contents; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Shipping cost. Shipping is free, so always zero.
    pub shipping_total: Money,
    /// Final total (subtotal + tax + shipping).
    pub grand_total: Money,
}

impl CartTotals {
    /// Build the summary from a subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let tax_total = subtotal.percentage(TAX_RATE_PERCENT);
        let shipping_total = Money::zero(subtotal.currency);
        let grand_total = Money::new(
            subtotal
                .amount_cents
                .saturating_add(tax_total.amount_cents),
            subtotal.currency,
        );
        Self {
            subtotal,
            tax_total,
            shipping_total,
            grand_total,
        }
    }

    /// Whether the subtotal clears the free-shipping threshold.
    pub fn qualifies_free_shipping(&self) -> bool {
        self.subtotal.amount_cents >= FREE_SHIPPING_THRESHOLD_CENTS
    }
}
