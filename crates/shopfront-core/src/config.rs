use thiserror::Error;

use crate::app_config::AppConfig;

/// Configuration failure raised at startup only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparsable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparsable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    use rust_decimal::Decimal;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_decimal = |var: &str, default: &str| -> Result<Decimal, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let catalog_url = or_default("SHOPFRONT_CATALOG_URL", "https://fakestoreapi.com/products");
    let bind_addr = parse_addr("SHOPFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHOPFRONT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPFRONT_USER_AGENT", "shopfront/0.1 (storefront-session)");
    let page_size = parse_usize("SHOPFRONT_PAGE_SIZE", "8")?;
    // USD → INR, fixed for the session.
    let currency_rate = parse_decimal("SHOPFRONT_CURRENCY_RATE", "83.5")?;
    let recommended_count = parse_usize("SHOPFRONT_RECOMMENDED_COUNT", "4")?;
    let recommended_interval_secs = parse_u64("SHOPFRONT_RECOMMENDED_INTERVAL_SECS", "60")?;

    Ok(AppConfig {
        catalog_url,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        page_size,
        currency_rate,
        recommended_count,
        recommended_interval_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use rust_decimal::Decimal;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_all_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults");
        assert_eq!(cfg.catalog_url, "https://fakestoreapi.com/products");
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "shopfront/0.1 (storefront-session)");
        assert_eq!(cfg.page_size, 8);
        assert_eq!(cfg.currency_rate, Decimal::new(835, 1));
        assert_eq!(cfg.recommended_count, 4);
        assert_eq!(cfg.recommended_interval_secs, 60);
    }

    #[test]
    fn overrides_are_honored() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_CATALOG_URL", "http://localhost:9999/products");
        map.insert("SHOPFRONT_PAGE_SIZE", "12");
        map.insert("SHOPFRONT_CURRENCY_RATE", "1.0");
        map.insert("SHOPFRONT_RECOMMENDED_COUNT", "6");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.catalog_url, "http://localhost:9999/products");
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.currency_rate, Decimal::ONE);
        assert_eq!(cfg.recommended_count, 6);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_BIND_ADDR"),
            "expected InvalidEnvVar(SHOPFRONT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_PAGE_SIZE", "eight");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_PAGE_SIZE"),
            "expected InvalidEnvVar(SHOPFRONT_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn invalid_currency_rate_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_CURRENCY_RATE", "cheap");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_CURRENCY_RATE"),
            "expected InvalidEnvVar(SHOPFRONT_CURRENCY_RATE), got: {result:?}"
        );
    }

    #[test]
    fn invalid_recommended_interval_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_RECOMMENDED_INTERVAL_SECS", "-60");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_RECOMMENDED_INTERVAL_SECS"),
            "expected InvalidEnvVar(SHOPFRONT_RECOMMENDED_INTERVAL_SECS), got: {result:?}"
        );
    }
}
