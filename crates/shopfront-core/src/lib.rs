pub mod app_config;
pub mod cart;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod product;
pub mod session;
pub mod wishlist;

pub use app_config::AppConfig;
pub use cart::{CartLedger, CartLine};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use criteria::{CriteriaUpdate, FilterCriteria, SortBy, ALL_CATEGORIES};
pub use engine::{derive, page_count, page_slice, DEFAULT_PAGE_SIZE};
pub use product::{Product, Rating};
pub use session::{CatalogState, Session};
pub use wishlist::WishlistSet;
