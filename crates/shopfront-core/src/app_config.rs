use std::net::SocketAddr;

use rust_decimal::Decimal;

/// Runtime configuration, sourced from `SHOPFRONT_*` environment variables.
///
/// Every field has a default; configuration never requires any variable to
/// be set for local use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote catalog endpoint returning the raw product list.
    pub catalog_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Products per grid page.
    pub page_size: usize,
    /// Fixed source→display currency conversion rate for the session.
    pub currency_rate: Decimal,
    /// How many products the recommended sampler picks per tick.
    pub recommended_count: usize,
    /// Interval between recommended-sampler ticks.
    pub recommended_interval_secs: u64,
}
