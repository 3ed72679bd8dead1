use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product, normalized into the display currency.
///
/// Products are immutable after normalization except for the derived
/// [`in_wishlist`](Product::in_wishlist) flag, which is recomputed on every
/// derivation pass and is never authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID; stable and unique within one catalog fetch.
    pub id: u64,
    pub title: String,
    /// Price in the display currency, non-negative. Converted from the
    /// source currency once, at catalog load.
    pub price: Decimal,
    pub description: String,
    /// Category string from a small open set (e.g. `"electronics"`).
    pub category: String,
    /// Ordered image gallery; never empty after normalization.
    pub images: Vec<String>,
    pub rating: Rating,
    /// Derived wishlist-membership flag. Set by the derivation engine from
    /// wishlist membership by id; defaults to `false` when absent.
    #[serde(default)]
    pub in_wishlist: bool,
}

/// Aggregate customer rating for a [`Product`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating, 0–5.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u64,
}

impl Product {
    /// Returns `true` if the lowercase `query` is a substring of the
    /// lowercase title or description.
    ///
    /// Callers are expected to lowercase the query once; the product's own
    /// fields are lowercased here per call (catalogs are small).
    #[must_use]
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }

    /// First image of the gallery, used as the card thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: 1,
            title: "Fjallraven Foldsack Backpack".to_string(),
            price: Decimal::new(9_180, 2),
            description: "Your perfect pack for everyday use.".to_string(),
            category: "men's clothing".to_string(),
            images: vec![
                "https://img.example.com/81fPKd-2AYL.jpg".to_string(),
                "https://img.example.com/81fPKd-2AYL.jpg".to_string(),
            ],
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
            in_wishlist: false,
        }
    }

    #[test]
    fn matches_query_on_title_case_insensitive() {
        let product = make_product();
        assert!(product.matches_query("backpack"));
        assert!(product.matches_query("fjallraven"));
    }

    #[test]
    fn matches_query_on_description() {
        let product = make_product();
        assert!(product.matches_query("everyday"));
    }

    #[test]
    fn matches_query_rejects_non_substring() {
        let product = make_product();
        assert!(!product.matches_query("handbag"));
    }

    #[test]
    fn primary_image_is_first_gallery_entry() {
        let product = make_product();
        assert_eq!(
            product.primary_image(),
            Some("https://img.example.com/81fPKd-2AYL.jpg")
        );
    }

    #[test]
    fn in_wishlist_defaults_to_false_when_absent_from_json() {
        let json = r#"{
            "id": 7,
            "title": "White Gold Ring",
            "price": "835.00",
            "description": "Classic created ring.",
            "category": "jewelery",
            "images": ["https://img.example.com/ring.jpg"],
            "rating": {"rate": 4.1, "count": 70}
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize product");
        assert!(!product.in_wishlist);
        assert_eq!(product.price, Decimal::new(83_500, 2));
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let product = make_product();
        let json = serde_json::to_string(&product).expect("serialize");
        let decoded: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.price, product.price);
        assert_eq!(decoded.images.len(), 2);
        assert_eq!(decoded.rating.count, 120);
    }
}
