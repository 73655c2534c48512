//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"detail": "<message>"}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::models::ValidationError;
use crate::repository::DbError;

/// Error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    /// Malformed or out-of-range input. Raised before the database is touched.
    #[error("{0}")]
    Validation(String),

    /// A write statement failed; carries the database message.
    #[error("{0}")]
    WriteFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// `action` reads like "creating resource".
    pub fn write_failed(action: &str, e: DbError) -> Self {
        warn!("Error {}: {}", action, e);
        Self::WriteFailed(format!("Error {}: {}", action, e))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::WriteFailed(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Database(e) => error!("Database error: {}", e),
            Self::Internal(msg) => error!("{}", msg),
            Self::Validation(msg) => warn!("Rejected request: {}", msg),
            _ => {}
        }

        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
