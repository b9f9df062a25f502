//! Error types for the devotionals HTTP API
//!
//! Every handler returns [`ApiResult`]; errors become a status code plus a
//! JSON `{"error": "..."}` body at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

/// Operation during which a store call failed
///
/// The display text is the message sent to the client, which never carries
/// database details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StoreAction::List => "Failed to retrieve devotionals.",
            StoreAction::Get => "Failed to retrieve devotional.",
            StoreAction::Create => "Failed to create devotional.",
            StoreAction::Update => "Failed to update devotional.",
            StoreAction::Delete => "Failed to delete devotional.",
        };
        f.write_str(message)
    }
}

/// Request body failed validation; carries every failed reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .reasons.join("; "))]
pub struct ValidationError {
    pub reasons: Vec<String>,
}

impl ValidationError {
    pub fn new(reasons: Vec<String>) -> Self {
        Self { reasons }
    }

    pub fn single(reason: impl Into<String>) -> Self {
        Self {
            reasons: vec![reason.into()],
        }
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field, or unreadable body (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No live record matches the id (404)
    #[error("Devotional not found.")]
    NotFound,

    /// Statement execution failed (500)
    #[error("{action}")]
    Store {
        action: StoreAction,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    /// Adapter for `map_err` on store calls
    pub fn store(action: StoreAction) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Store { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store { action, source } => error!("{:?} failed: {}", action, source),
            other => debug!("Request rejected: {}", other),
        }

        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
