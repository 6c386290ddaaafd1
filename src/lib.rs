//! Bookshelf: REST book catalog backed by SQLite.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use error::{AppError, SchemaError};
pub use routes::{app, book_routes, common_routes};
pub use seed::seed_baseline;
pub use state::AppState;
pub use store::{Book, BookFields, BookStore};
