use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel category matching every product.
pub const ALL_CATEGORIES: &str = "all";

/// Sort order applied to the filtered product set.
///
/// Serialized in kebab-case to match the values the presentation layer
/// submits (`"price-asc"`, `"price-desc"`, ...). All orders are applied
/// with a stable sort, so ties keep their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Ascending by product id.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Descending by rating rate; no tie-break beyond stability.
    Rating,
    /// Descending by rating count; no tie-break beyond stability.
    Popularity,
}

/// Current filter state driving the derived visible list.
///
/// The engine never validates the bounds against each other: out-of-order
/// bounds (`min_price > max_price`) simply yield an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// `"all"` or an exact category name.
    pub category: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// Case-insensitive substring match target over title and description.
    /// Empty string disables the search filter.
    pub search_query: String,
    pub sort_by: SortBy,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            min_price: Decimal::ZERO,
            max_price: Decimal::from(1_000),
            search_query: String::new(),
            sort_by: SortBy::Default,
        }
    }
}

impl FilterCriteria {
    /// Merges the set fields of `update` into `self`; unset fields keep
    /// their prior value.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(min_price) = update.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(search_query) = update.search_query {
            self.search_query = search_query;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Partial mirror of [`FilterCriteria`] for merge-style updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaUpdate {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start_state() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.category, ALL_CATEGORIES);
        assert_eq!(criteria.min_price, Decimal::ZERO);
        assert_eq!(criteria.max_price, Decimal::from(1_000));
        assert!(criteria.search_query.is_empty());
        assert_eq!(criteria.sort_by, SortBy::Default);
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaUpdate {
            category: Some("jewelery".to_string()),
            min_price: Some(Decimal::from(25)),
            ..CriteriaUpdate::default()
        });
        assert_eq!(criteria.category, "jewelery");
        assert_eq!(criteria.min_price, Decimal::from(25));
        // untouched fields keep their prior value
        assert_eq!(criteria.max_price, Decimal::from(1_000));
        assert_eq!(criteria.sort_by, SortBy::Default);
    }

    #[test]
    fn apply_with_empty_update_is_a_no_op() {
        let mut criteria = FilterCriteria::default();
        let before = criteria.clone();
        criteria.apply(CriteriaUpdate::default());
        assert_eq!(criteria, before);
    }

    #[test]
    fn sort_by_deserializes_from_kebab_case() {
        assert_eq!(
            serde_json::from_str::<SortBy>("\"price-asc\"").unwrap(),
            SortBy::PriceAsc
        );
        assert_eq!(
            serde_json::from_str::<SortBy>("\"price-desc\"").unwrap(),
            SortBy::PriceDesc
        );
        assert_eq!(
            serde_json::from_str::<SortBy>("\"default\"").unwrap(),
            SortBy::Default
        );
        assert_eq!(
            serde_json::from_str::<SortBy>("\"popularity\"").unwrap(),
            SortBy::Popularity
        );
    }

    #[test]
    fn criteria_update_deserializes_partial_body() {
        let update: CriteriaUpdate =
            serde_json::from_str(r#"{"search_query": "shirt", "sort_by": "rating"}"#)
                .expect("deserialize update");
        assert_eq!(update.search_query.as_deref(), Some("shirt"));
        assert_eq!(update.sort_by, Some(SortBy::Rating));
        assert!(update.category.is_none());
        assert!(update.min_price.is_none());
    }
}
