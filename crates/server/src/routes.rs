use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::ItemStore;

pub mod items;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router over an injected store.
///
/// Wrong-method requests on a known path get 405 from axum's method
/// dispatch, which matches the per-endpoint verb checks of the contract.
pub fn build_router(store: Arc<dyn ItemStore>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/add", post(items::add_item))
        .route("/list", get(items::list_items))
        .route("/item/:id", get(items::get_item))
        .route("/delete/:id", delete(items::delete_item))
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
