//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup-fatal: the books table could not be created. The process must not
/// begin serving when this is returned.
#[derive(Error, Debug)]
#[error("schema setup: {0}")]
pub struct SchemaError(#[from] pub sqlx::Error);

/// Request-scoped failures. The store never produces `NotFound` itself; it
/// reports an absent row or zero rows affected and handlers translate that
/// here. Engine errors split by operation: mutations that fail are treated
/// as malformed input (`Rejected`, 400), read/delete-path failures as engine
/// faults (`Storage`, 500).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book not found")]
    NotFound,
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn rejected(e: sqlx::Error) -> Self {
        AppError::Rejected(e.to_string())
    }

    pub fn storage(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
