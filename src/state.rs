//! Shared application state for all routes.

use crate::store::BookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: BookStore,
}
