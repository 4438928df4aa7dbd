//! Unified server error type.
//!
//! Handlers return `Result<T, ServerError>`. Store failures are logged with
//! full detail, but callers only ever see a generic message so SQL and file
//! paths never leak.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paddock_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the listing store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::Store(StoreError::Init(e)) => {
                error!(error = %e, "store not initialised");
                (StatusCode::SERVICE_UNAVAILABLE, "service not ready")
            }
            ServerError::Store(e) => {
                error!(error = %e, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
