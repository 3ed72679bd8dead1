//! The application-state owner for one storefront session.
//!
//! All mutation funnels through [`Session`]'s command methods; every derived
//! view (visible list, page slice, page count, categories) is recomputed from
//! the owned state on each read, never cached or patched incrementally.
//!
//! Page-reset asymmetry: editing filter criteria resets the current page to
//! 1, while wishlist toggles and catalog arrival leave the page untouched.

use crate::cart::CartLedger;
use crate::criteria::{CriteriaUpdate, FilterCriteria};
use crate::engine;
use crate::product::Product;
use crate::wishlist::WishlistSet;

/// Lifecycle of the one-shot catalog load.
///
/// The session starts in `Loading`, then transitions exactly once to either
/// `Ready` or `Errored`. There is no automatic retry: `Errored` is terminal
/// and recovery is a full session reload.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Ready(Vec<Product>),
    Errored(String),
}

/// Owns all session-scoped storefront state and exposes the command API
/// consumed by the presentation layer.
///
/// Every command is total: while the catalog is loading or errored, the
/// catalog reads as empty and all commands still apply cleanly.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: CatalogState,
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
    cart: CartLedger,
    wishlist: WishlistSet,
    selected: Option<Product>,
}

impl Session {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: CatalogState::Loading,
            criteria: FilterCriteria::default(),
            page: 1,
            page_size,
            cart: CartLedger::default(),
            wishlist: WishlistSet::default(),
            selected: None,
        }
    }

    // -- catalog lifecycle --------------------------------------------------

    /// Transitions to `Ready` with the normalized catalog.
    ///
    /// Does not touch the current page: catalog arrival re-derives the
    /// visible list but is not a criteria edit.
    pub fn catalog_ready(&mut self, products: Vec<Product>) {
        self.catalog = CatalogState::Ready(products);
    }

    /// Transitions to the terminal `Errored` state with a user-visible
    /// message.
    pub fn catalog_failed(&mut self, message: String) {
        self.catalog = CatalogState::Errored(message);
    }

    #[must_use]
    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    /// The full catalog, or an empty slice while loading/errored.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        match &self.catalog {
            CatalogState::Ready(products) => products,
            CatalogState::Loading | CatalogState::Errored(_) => &[],
        }
    }

    /// Looks a product up in the loaded catalog by id.
    #[must_use]
    pub fn find_product(&self, id: u64) -> Option<&Product> {
        self.catalog().iter().find(|p| p.id == id)
    }

    /// Catalog product annotated with current wishlist membership, for the
    /// detail view. Annotation here mirrors the derivation pass so a
    /// filtered-out product still renders correctly.
    #[must_use]
    pub fn product_detail(&self, id: u64) -> Option<Product> {
        self.find_product(id).map(|p| {
            let mut product = p.clone();
            product.in_wishlist = self.wishlist.contains(id);
            product
        })
    }

    // -- filter / pagination commands ---------------------------------------

    /// Merges a partial criteria update and resets the current page to 1.
    pub fn set_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.apply(update);
        self.page = 1;
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Goes to page `page` (1-based). Page 0 is absorbed to 1; pages past
    /// the end are kept as-is and simply render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // -- derived views -------------------------------------------------------

    /// The full derived visible list for the current filter state.
    #[must_use]
    pub fn visible(&self) -> Vec<Product> {
        engine::derive(self.catalog(), &self.criteria, &self.wishlist)
    }

    /// The current page slice of the visible list.
    #[must_use]
    pub fn page_slice(&self) -> Vec<Product> {
        let visible = self.visible();
        engine::page_slice(&visible, self.page, self.page_size).to_vec()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        engine::page_count(self.visible().len(), self.page_size)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        engine::categories(self.catalog())
    }

    // -- cart commands -------------------------------------------------------

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    pub fn remove_from_cart(&mut self, id: u64) {
        self.cart.remove(id);
    }

    pub fn set_cart_quantity(&mut self, id: u64, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    // -- wishlist commands ---------------------------------------------------

    /// Toggles wishlist membership. Does not reset the current page.
    pub fn toggle_wishlist(&mut self, product: &Product) {
        self.wishlist.toggle(product);
    }

    #[must_use]
    pub fn wishlist(&self) -> &WishlistSet {
        &self.wishlist
    }

    // -- detail selection ----------------------------------------------------

    /// Selects a product snapshot for the detail modal, or clears it.
    pub fn select_product(&mut self, product: Option<Product>) {
        self.selected = product;
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
