use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use service::{Item, ItemInput, ItemStore, ServiceError};

use crate::errors::ApiError;

type Store = Arc<dyn ItemStore>;

/// POST /add — create an item from a `{name, brand, price}` body.
///
/// The body is decoded by hand so that a syntactically bad payload always
/// yields the contract's `invalid JSON` 400 rather than an extractor
/// rejection with a different shape.
pub async fn add_item(
    State(store): State<Store>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input: ItemInput =
        serde_json::from_slice(&body).map_err(|_| ApiError::invalid_json())?;
    input.validate().map_err(|_| ApiError::invalid_item_data())?;
    let item = store.add(input).await.map_err(|e| {
        error!(error = %e, "add item failed");
        ApiError::internal("cannot create item")
    })?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /list — all stored items, possibly empty.
pub async fn list_items(State(store): State<Store>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store.list().await.map_err(|e| {
        error!(error = %e, "list items failed");
        ApiError::internal("cannot list items")
    })?;
    Ok(Json(items))
}

/// GET /item/{id}
pub async fn get_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id: u64 = id.parse().map_err(|_| ApiError::invalid_id())?;
    match store.get(id).await {
        Ok(item) => Ok(Json(item)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::item_not_found()),
        Err(e) => {
            error!(error = %e, id, "get item failed");
            Err(ApiError::internal("cannot read item"))
        }
    }
}

/// DELETE /delete/{id}
pub async fn delete_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: u64 = id.parse().map_err(|_| ApiError::invalid_id())?;
    match store.delete(id).await {
        Ok(()) => Ok(Json(serde_json::json!({"status": "deleted"}))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::item_not_found()),
        Err(e) => {
            error!(error = %e, id, "delete item failed");
            Err(ApiError::internal("cannot delete item"))
        }
    }
}
