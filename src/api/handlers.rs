//! Shared server state and error translation for the API layer

use axum::{http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::correlator::{CorrelationQuery, Correlator, CorrelatorError};
use crate::neo4j::GraphStore;

/// Shared server state
pub struct ServerState {
    pub correlator: Correlator,
    pub query: CorrelationQuery,
}

/// Shared correlator state
pub type CorrelatorState = Arc<ServerState>;

impl ServerState {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            correlator: Correlator::new(store.clone()),
            query: CorrelationQuery::new(store),
        }
    }
}

/// Health check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Application error type translated to transport-level responses
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<CorrelatorError> for AppError {
    fn from(err: CorrelatorError) -> Self {
        match err {
            CorrelatorError::Validation(msg) => AppError::BadRequest(msg),
            CorrelatorError::NotFound(entry) => {
                AppError::NotFound(format!("no protein found with entry '{}'", entry))
            }
            CorrelatorError::Store(e) => AppError::Internal(e),
        }
    }
}
