//! One-shot catalog load driving the session's Loading → Ready | Errored
//! transition.
//!
//! This is the single place a [`CatalogError`] is handled: it is converted
//! into the session's terminal errored state with a user-visible message.
//! There is no automatic retry or backoff — recovery is a manual full
//! reload of the session.

use std::sync::Arc;

use shopfront_catalog::{CatalogClient, CatalogError};
use shopfront_core::{AppConfig, Product};

use crate::api::AppState;
use crate::scheduler::refresh_recommended;

/// Fetches, normalizes, and installs the catalog exactly once.
pub async fn load_catalog(state: AppState, config: Arc<AppConfig>) {
    match fetch_catalog(&config).await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            state.session.lock().await.catalog_ready(products);
            // Seed the recommended view right away rather than waiting for
            // the first scheduler tick.
            refresh_recommended(&state, config.recommended_count).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            state.session.lock().await.catalog_failed(e.to_string());
        }
    }
}

async fn fetch_catalog(config: &AppConfig) -> Result<Vec<Product>, CatalogError> {
    let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)?;
    client
        .load_catalog(&config.catalog_url, config.currency_rate)
        .await
}
