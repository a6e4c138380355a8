//! Router construction.
//!
//! Two route tables evaluated in order: the versioned API namespace first,
//! then the client-shell catch-all. Any path inside `/api/v1` that the API
//! does not match gets a JSON 404 and never reaches the shell.

mod posts;
mod shell;

use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::store::PostStore;

pub const API_PREFIX: &str = "/api/v1";

pub fn build(config: &Config, store: PostStore) -> Router {
    let api = posts::router().fallback(api_not_found);
    let app = Router::new().nest(API_PREFIX, api);

    let guard = ServiceBuilder::new().layer(middleware::from_fn(keep_api_out_of_shell));
    let app = match config.public_dir.as_deref() {
        Some(dir) => app.fallback_service(guard.service(shell::serve_dir(dir))),
        None => app.fallback_service(guard.service(shell::embedded.into_service())),
    };

    app.layer(TraceLayer::new_for_http()).with_state(store)
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound("route")
}

// `nest` does not claim every spelling of the prefix (e.g. `/api/v1/`).
async fn keep_api_out_of_shell(request: Request, next: Next) -> Response {
    if is_api_path(request.uri().path()) {
        return api_not_found().await.into_response();
    }
    next.run(request).await
}

fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_paths_are_recognised() {
        assert!(is_api_path("/api/v1"));
        assert!(is_api_path("/api/v1/"));
        assert!(is_api_path("/api/v1//posts"));
        assert!(!is_api_path("/api/v10"));
        assert!(!is_api_path("/api"));
        assert!(!is_api_path("/posts/1"));
    }
}
