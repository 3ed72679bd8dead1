mod cart;
mod filters;
mod products;
mod recommended;
mod wishlist;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use shopfront_core::{CatalogState, Product, Session};

use crate::middleware::{request_id, RequestId};

/// Shared server state: the session state owner plus the recommended
/// sampler's latest pick.
///
/// The session sits behind one mutex so every command fully applies before
/// the next is processed — the single logical mutation stream the
/// storefront assumes.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub recommended: Arc<Mutex<Vec<Product>>>,
}

impl AppState {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            recommended: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    catalog: &'static str,
    error: Option<String>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{id}", get(products::get_product))
        .route("/api/v1/categories", get(products::list_categories))
        .route(
            "/api/v1/selection",
            get(products::get_selection).put(products::set_selection),
        )
        .route(
            "/api/v1/filters",
            get(filters::get_filters).put(filters::update_filters),
        )
        .route("/api/v1/page", put(filters::set_page))
        .route("/api/v1/cart", get(cart::get_cart))
        .route(
            "/api/v1/cart/{id}",
            axum::routing::post(cart::add_to_cart)
                .put(cart::set_quantity)
                .delete(cart::remove_from_cart),
        )
        .route("/api/v1/wishlist", get(wishlist::list_wishlist))
        .route(
            "/api/v1/wishlist/{id}",
            axum::routing::post(wishlist::toggle_wishlist),
        )
        .route("/api/v1/recommended", get(recommended::list_recommended))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

/// Reports the catalog load state: the server itself has no other failure
/// mode.
async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let session = state.session.lock().await;

    let (status_code, data) = match session.catalog_state() {
        CatalogState::Loading => (
            StatusCode::OK,
            HealthData {
                status: "ok",
                catalog: "loading",
                error: None,
            },
        ),
        CatalogState::Ready(_) => (
            StatusCode::OK,
            HealthData {
                status: "ok",
                catalog: "ready",
                error: None,
            },
        ),
        CatalogState::Errored(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthData {
                status: "degraded",
                catalog: "errored",
                error: Some(message.clone()),
            },
        ),
    };
    drop(session);

    (status_code, Json(ApiResponse { data, meta }))
}
