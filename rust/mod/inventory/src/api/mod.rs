pub mod entries;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use seedstock_core::ServiceError;

use crate::service::InventoryService;

/// Shared application state.
pub type AppState = Arc<InventoryService>;

/// Build the inventory API router. The server nests this under the module
/// name, so paths here are relative ("/inward", not "/api/inward").
pub fn router(state: AppState) -> Router {
    entries::routes().with_state(state)
}

/// API error responses. Two shapes only: a not-found message and a generic
/// database failure that carries the underlying error text.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Database(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Entry not found" })),
            )
                .into_response(),
            ApiError::Database(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Database operation failed",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Database(other.to_string()),
        }
    }
}
