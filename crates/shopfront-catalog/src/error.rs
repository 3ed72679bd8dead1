use thiserror::Error;

/// The single failure kind of the storefront: the catalog load.
///
/// Every variant is surfaced once at the load boundary and turns the
/// session into its errored state; nothing downstream of a successful load
/// can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("normalization error for product {id}: {reason}")]
    Normalization { id: u64, reason: String },
}
