use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// API error with a fixed status code and message, rendered as a
/// `{"error": "<message>"}` JSON body. Messages are part of the wire
/// contract, so they are fixed strings rather than propagated causes.
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn invalid_json() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "invalid JSON" }
    }

    pub fn invalid_item_data() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "invalid item data" }
    }

    pub fn invalid_id() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "invalid id" }
    }

    pub fn item_not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, message: "item not found" }
    }

    pub fn internal(message: &'static str) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
