use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::models::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No user profile provided")]
    MissingInput,

    #[error("{0}")]
    InvalidProfile(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::InvalidProfile(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput | AppError::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::debug!("Rejected request ({status}): {}", self),
        }

        // Server errors carry their description so callers can report it verbatim.
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
