use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domain::errors::{DirectoryError, LedgerError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Retryable: the caller may resend the same request.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount(_)
            | LedgerError::InvalidIdentifier { .. }
            | LedgerError::BalanceOverflow => AppError::BadRequest(err.to_string()),
            LedgerError::UnknownPair => AppError::NotFound(err.to_string()),
            LedgerError::Conflict => AppError::Conflict(err.to_string()),
            LedgerError::Cancelled => AppError::RequestTimeout,
            LedgerError::Store(source) => AppError::Internal(source),
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::InvalidName | DirectoryError::InvalidIdentifier(_) => {
                AppError::BadRequest(err.to_string())
            }
            DirectoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            DirectoryError::Internal(source) => AppError::Internal(source),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::RequestTimeout => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
            AppError::Internal(ref source) => {
                error!(error = ?source, "http: internal error");
                // Don't leak internal error detail to client
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}
