//! HTTP service owning the `Post` resource.
//!
//! `app()` builds the full router (API namespace plus client-shell fallback)
//! over a fresh in-memory store; `run()` serves it on an already bound
//! listener so tests can pick an ephemeral port.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use config::Config;
pub use error::ApiError;
pub use models::{CreatePost, Post, UpdatePost};
pub use store::PostStore;

/// Router with default configuration and an empty store.
pub fn app() -> Router {
    app_with(&Config::default())
}

pub fn app_with(config: &Config) -> Router {
    routes::build(config, PostStore::new())
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}
