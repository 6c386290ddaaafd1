//! Book CRUD handlers: create, list, read, replace, delete.
//!
//! Each handler is one store call mapped to one response. Fields are never
//! validated here; any string or null value is persisted as given. The
//! status mapping distinguishes malformed-input failures (400, on insert and
//! replace) from engine faults (500) and zero-result lookups (404).

use crate::error::AppError;
use crate::state::AppState;
use crate::store::BookFields;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// Decode the request body. An empty body means "no fields supplied" and is
/// accepted; only non-empty malformed JSON is rejected.
fn parse_fields(body: &Bytes) -> Result<BookFields, AppError> {
    if body.is_empty() {
        return Ok(BookFields::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Rejected(e.to_string()))
}

/// POST /books — insert one book, respond with the assigned id.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let fields = parse_fields(&body)?;
    let id = state.store.insert(&fields).await.map_err(AppError::rejected)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /books — the whole catalog, possibly empty.
pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let books = state.store.list_all().await.map_err(AppError::storage)?;
    Ok((StatusCode::OK, Json(books)))
}

/// GET /books/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let book = state
        .store
        .get_by_id(id)
        .await
        .map_err(AppError::storage)?
        .ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(book)))
}

/// PUT /books/:id — full replace, all three fields overwritten.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let fields = parse_fields(&body)?;
    let affected = state
        .store
        .replace(id, &fields)
        .await
        .map_err(AppError::rejected)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok((StatusCode::OK, format!("Book with ID {} updated", id)))
}

/// DELETE /books/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let affected = state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::storage)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok((StatusCode::OK, format!("Book with ID {} deleted", id)))
}
