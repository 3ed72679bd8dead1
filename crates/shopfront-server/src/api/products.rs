//! Product listing, detail, category, and selection handlers.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use shopfront_core::{FilterCriteria, Product};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// One page of the derived visible list plus the numbers the presentation
/// layer needs to render the pager.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page: usize,
    pub page_count: usize,
    pub total_items: usize,
    /// Echo of the criteria the page was derived under.
    pub criteria: FilterCriteria,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Read-only view of another page; does not move the session's page.
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionBody {
    pub id: Option<u64>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    let visible = session.visible();
    let page = query.page.unwrap_or_else(|| session.page());
    let items =
        shopfront_core::page_slice(&visible, page, session.page_size()).to_vec();

    Json(ApiResponse {
        data: ProductPage {
            items,
            page,
            page_count: shopfront_core::page_count(visible.len(), session.page_size()),
            total_items: visible.len(),
            criteria: session.criteria().clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let session = state.session.lock().await;
    let product = session
        .product_detail(id)
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", format!("no product with id {id}")))?;

    Ok(Json(ApiResponse {
        data: product,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(ApiResponse {
        data: session.categories(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub async fn get_selection(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(ApiResponse {
        data: session.selected_product().cloned(),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Sets or clears the detail-view selection. The selected product is stored
/// as a snapshot annotated with its wishlist membership at selection time.
pub async fn set_selection(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SelectionBody>,
) -> Result<Json<ApiResponse<Option<Product>>>, ApiError> {
    let mut session = state.session.lock().await;

    let selection = match body.id {
        Some(id) => {
            let product = session.product_detail(id).ok_or_else(|| {
                ApiError::new(
                    req_id.0.clone(),
                    "not_found",
                    format!("no product with id {id}"),
                )
            })?;
            Some(product)
        }
        None => None,
    };

    session.select_product(selection.clone());
    Ok(Json(ApiResponse {
        data: selection,
        meta: ResponseMeta::new(req_id.0),
    }))
}
