//! Server binary: ensures the schema, seeds baseline data, then serves.
//! No request is accepted until schema and seed complete.

use bookshelf::{app, seed_baseline, AppState, BookStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bookshelf=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://books.db".into());
    let store = BookStore::connect(&database_url).await?;
    tracing::info!(%database_url, "connected to database");

    store.ensure_schema().await?;
    seed_baseline(&store).await?;

    let app = app(AppState { store });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
