use serde::Serialize;

use crate::product::Product;

/// Membership set over product identity, with a snapshot of each product
/// taken at insertion time.
///
/// Membership by id drives wishlist annotation in the derivation engine;
/// the stored snapshots only render the wishlist view and are not re-synced
/// with later catalog updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WishlistSet {
    items: Vec<Product>,
}

impl WishlistSet {
    /// Toggles membership for `product`: removes it when present (by id),
    /// otherwise inserts a snapshot with its wishlist flag set.
    ///
    /// Toggling twice restores the original membership state.
    pub fn toggle(&mut self, product: &Product) {
        if let Some(pos) = self.items.iter().position(|p| p.id == product.id) {
            self.items.remove(pos);
        } else {
            let mut snapshot = product.clone();
            snapshot.in_wishlist = true;
            self.items.push(snapshot);
        }
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Stored snapshots in insertion order, for rendering the wishlist view.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
