//! Shopping-cart command handlers.
//!
//! Adding requires the product to exist in the loaded catalog; removal and
//! quantity adjustment are total commands that succeed whether or not the
//! line exists, mirroring the ledger's own semantics.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::{CartLine, Session};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Cart snapshot with both the exact total and the rounded display figure.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub display_total: Decimal,
    pub item_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct QuantityBody {
    pub quantity: i64,
}

fn view_of(session: &Session) -> CartView {
    let cart = session.cart();
    CartView {
        lines: cart.lines().to_vec(),
        total: cart.total(),
        display_total: cart.display_total(),
        item_count: cart.item_count(),
    }
}

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Adds one unit of the catalog product to the cart.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let mut session = state.session.lock().await;
    let product = session
        .find_product(id)
        .cloned()
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", format!("no product with id {id}")))?;

    session.add_to_cart(&product);
    Ok(Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Sets the line quantity exactly; zero or below removes the line.
pub async fn set_quantity(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
    Json(body): Json<QuantityBody>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.set_cart_quantity(id, body.quantity);
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.remove_from_cart(id);
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}
