//! Derivation of the visible product list from catalog + criteria + wishlist.
//!
//! Everything here is a pure function over its inputs: the visible list is
//! always recomputed in full, never patched incrementally, which rules out
//! stale-derivation bugs at the cost of recomputation (catalogs are small).
//!
//! Filters compose as a strict conjunction and are independent per product,
//! so application order does not affect the result. Sorting is stable: ties
//! keep the relative order the surviving products had in the catalog.

use crate::criteria::{FilterCriteria, SortBy, ALL_CATEGORIES};
use crate::product::Product;
use crate::wishlist::WishlistSet;

/// Page size used by the product grid.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Derives the ordered visible list for the given filter state.
///
/// Applies, in order: category filter (skipped for
/// [`ALL_CATEGORIES`]), inclusive price bounds, case-insensitive substring
/// search over title OR description (empty query keeps all), the stable
/// sort for `criteria.sort_by`, and finally wishlist annotation by id.
/// Annotation never affects filtering or order.
///
/// Out-of-order price bounds yield an empty list rather than an error.
#[must_use]
pub fn derive(
    catalog: &[Product],
    criteria: &FilterCriteria,
    wishlist: &WishlistSet,
) -> Vec<Product> {
    let query_lower = criteria.search_query.to_lowercase();

    let mut result: Vec<Product> = catalog
        .iter()
        .filter(|p| criteria.category == ALL_CATEGORIES || p.category == criteria.category)
        .filter(|p| p.price >= criteria.min_price && p.price <= criteria.max_price)
        .filter(|p| query_lower.is_empty() || p.matches_query(&query_lower))
        .cloned()
        .collect();

    match criteria.sort_by {
        SortBy::Default => result.sort_by_key(|p| p.id),
        SortBy::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Rating => result.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
        SortBy::Popularity => result.sort_by(|a, b| b.rating.count.cmp(&a.rating.count)),
    }

    for product in &mut result {
        product.in_wishlist = wishlist.contains(product.id);
    }

    result
}

/// Returns the 1-based contiguous page `[(page-1)*size, page*size)`.
///
/// Out-of-range pages (including page 0) yield an empty slice, never an
/// error, and are never auto-clamped to the last valid page.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `item_count` items: `ceil(count / size)`.
///
/// Zero items means zero pages (no pagination controls); the presentation
/// layer shows controls only when the count exceeds one.
#[must_use]
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Category choices for the filter sidebar: [`ALL_CATEGORIES`] followed by
/// each distinct catalog category in first-seen order.
#[must_use]
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in catalog {
        if !out.contains(&product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
