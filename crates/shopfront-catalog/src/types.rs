//! Raw response types for the remote catalog endpoint.
//!
//! ## Observed shape (fakestoreapi.com `/products`)
//!
//! The endpoint returns a bare JSON array (no envelope object) of product
//! records. All fields below are present on every record in observed
//! responses, so none are optional here — a record missing one is treated
//! as a malformed response and fails the whole load (normalization is
//! all-or-nothing per attempt).
//!
//! ### `price`
//! A plain JSON number in USD, e.g. `109.95`. Conversion into the display
//! currency happens in `normalize.rs`, not here.
//!
//! ### `image`
//! Exactly one image URL per record. The normalizer expands it into the
//! internal multi-image gallery.
//!
//! ### `rating`
//! Nested object `{"rate": 3.9, "count": 120}`; `rate` stays within 0–5 in
//! observed data but is not clamped here.

use serde::Deserialize;

/// A single raw product record from the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    /// Numeric product ID; stable and unique within one response.
    pub id: u64,
    pub title: String,
    /// Price in the source currency (USD), as a JSON number.
    pub price: f64,
    pub description: String,
    /// Category string, e.g. `"electronics"` or `"men's clothing"`.
    pub category: String,
    /// Single product image URL.
    pub image: String,
    pub rating: RawRating,
}

/// Aggregate rating object nested in each record.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawRating {
    /// Average rating, 0–5.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u64,
}
