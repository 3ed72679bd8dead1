//! Wishlist command handlers.
//!
//! Toggling membership is the only mutation; it deliberately leaves the
//! session's current page alone, unlike criteria edits.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};

use shopfront_core::Product;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

pub async fn list_wishlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(ApiResponse {
        data: session.wishlist().items().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Toggles wishlist membership for a catalog product and returns the
/// resulting wishlist.
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let mut session = state.session.lock().await;
    let product = session
        .find_product(id)
        .cloned()
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", format!("no product with id {id}")))?;

    session.toggle_wishlist(&product);
    Ok(Json(ApiResponse {
        data: session.wishlist().items().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    }))
}
