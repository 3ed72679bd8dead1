//! Normalization from raw catalog records to [`shopfront_core::Product`].
//!
//! Conversion is all-or-nothing per load attempt: one bad record fails the
//! whole catalog, so the session never sees a partially normalized list.

use rust_decimal::Decimal;
use shopfront_core::{Product, Rating};

use crate::error::CatalogError;
use crate::types::RawProduct;

/// Normalizes a full raw catalog, preserving record order.
///
/// # Errors
///
/// Returns the first [`CatalogError::Normalization`] encountered; the
/// partial output is discarded.
pub fn normalize_catalog(
    raw: Vec<RawProduct>,
    currency_rate: Decimal,
) -> Result<Vec<Product>, CatalogError> {
    raw.into_iter()
        .map(|record| normalize_product(record, currency_rate))
        .collect()
}

/// Normalizes one raw record into a [`Product`].
///
/// The source price is converted into the display currency by multiplying
/// with the fixed per-session `currency_rate`. The single source image is
/// stored twice in the gallery so the detail view can exercise its carousel
/// even with single-image data — intentional demo behavior carried over
/// from the storefront this engine serves, not a bug.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the price is negative or not
/// representable as a decimal.
pub fn normalize_product(
    raw: RawProduct,
    currency_rate: Decimal,
) -> Result<Product, CatalogError> {
    let source_price = Decimal::try_from(raw.price).map_err(|e| CatalogError::Normalization {
        id: raw.id,
        reason: format!("price {} is not representable: {e}", raw.price),
    })?;

    if source_price.is_sign_negative() {
        return Err(CatalogError::Normalization {
            id: raw.id,
            reason: format!("negative price {source_price}"),
        });
    }

    let image = raw.image;
    Ok(Product {
        id: raw.id,
        title: raw.title,
        price: source_price * currency_rate,
        description: raw.description,
        category: raw.category,
        images: vec![image.clone(), image],
        rating: Rating {
            rate: raw.rating.rate,
            count: raw.rating.count,
        },
        in_wishlist: false,
    })
}
