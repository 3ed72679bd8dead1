//! Filter-criteria and pagination command handlers.
//!
//! Criteria edits reset the page to 1; the page command itself does not
//! touch the criteria. Both respond with the same view summary so the
//! presentation layer can re-render without a second round trip.

use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};

use shopfront_core::{CriteriaUpdate, FilterCriteria, Session};

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Filter state plus the pager numbers it implies.
#[derive(Debug, Serialize)]
pub struct FilterView {
    pub criteria: FilterCriteria,
    pub page: usize,
    pub page_count: usize,
    pub total_items: usize,
}

#[derive(Debug, Deserialize)]
pub struct PageBody {
    pub page: usize,
}

fn view_of(session: &Session) -> FilterView {
    let total_items = session.visible().len();
    FilterView {
        criteria: session.criteria().clone(),
        page: session.page(),
        page_count: session.page_count(),
        total_items,
    }
}

pub async fn get_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Merges a partial criteria update into the session, resetting the page.
pub async fn update_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(update): Json<CriteriaUpdate>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.set_criteria(update);
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Moves the session to another page of the current visible list.
pub async fn set_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<PageBody>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.set_page(body.page);
    Json(ApiResponse {
        data: view_of(&session),
        meta: ResponseMeta::new(req_id.0),
    })
}
