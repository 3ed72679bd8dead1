//! Serves the latest recommended-products sample.
//!
//! The sample itself is produced by the scheduler job; this handler only
//! reads the shared slot, so it stays empty until the catalog has loaded
//! and the first refresh has run.

use axum::{extract::State, response::IntoResponse, Extension, Json};

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

pub async fn list_recommended(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let recommended = state.recommended.lock().await;
    Json(ApiResponse {
        data: recommended.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
