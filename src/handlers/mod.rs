//! Request handlers.

pub mod books;
