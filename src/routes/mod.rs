//! Router assembly.

pub mod books;
pub mod common;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application router: book resource plus operational routes, with a
/// request body cap.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
}

pub use books::book_routes;
pub use common::common_routes;
