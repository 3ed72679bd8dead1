use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use shopfront_core::Product;

use crate::error::CatalogError;
use crate::normalize::normalize_catalog;
use crate::types::RawProduct;

/// HTTP client for the remote catalog endpoint.
///
/// The catalog is fetched exactly once per session. Failures are not
/// retried here: the load boundary converts any error into the session's
/// terminal errored state, and the only recovery path is a manual full
/// reload.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the configured timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw product list from `url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] — network or TLS failure.
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Deserialize`] — body is not a valid product array.
    pub async fn fetch_catalog(&self, url: &str) -> Result<Vec<RawProduct>, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<RawProduct>>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("catalog from {url}"),
            source: e,
        })
    }

    /// Fetches and normalizes the catalog in one step.
    ///
    /// All-or-nothing: any fetch or normalization failure yields an error
    /// and no catalog, never a partially normalized list.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_catalog`] or
    /// [`normalize_catalog`].
    pub async fn load_catalog(
        &self,
        url: &str,
        currency_rate: Decimal,
    ) -> Result<Vec<Product>, CatalogError> {
        let raw = self.fetch_catalog(url).await?;
        tracing::debug!(count = raw.len(), url, "fetched raw catalog");
        normalize_catalog(raw, currency_rate)
    }
}
