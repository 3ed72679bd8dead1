use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::product::Product;

/// One cart entry: a product snapshot plus its quantity.
///
/// Invariant: quantity is always ≥ 1. Entries whose computed quantity would
/// drop to zero or below are removed from the ledger, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// In-memory shopping cart, keyed by product id: at most one line per id.
///
/// Session-scoped only — the cart is lost when the session ends. There are
/// no stock or availability checks; quantities are unbounded above. Every
/// operation is total: removing an absent line or adjusting an unknown id
/// is a no-op.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// Adds one unit of `product`: increments the existing line, or inserts
    /// a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Deletes the line for `id` unconditionally; absent ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Sets the quantity for `id` to exactly `quantity`.
    ///
    /// A quantity of zero or below removes the line instead, preserving the
    /// ≥ 1 invariant. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: u64, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
        }
    }

    /// Exact cart total: `Σ price × quantity`, unrounded.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.product.price * Decimal::from(l.quantity))
            .sum()
    }

    /// Total rounded to the nearest whole currency unit, for display only.
    ///
    /// Rounds half away from zero, matching how the storefront formats the
    /// figure; [`total`](Self::total) stays exact.
    #[must_use]
    pub fn display_total(&self) -> Decimal {
        self.total()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of all line quantities, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
