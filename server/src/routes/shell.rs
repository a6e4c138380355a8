//! Catch-all that serves the client application shell.
//!
//! With a public directory configured, existing files are served as-is and
//! every other path gets that directory's `index.html`, so client-side routes
//! survive a reload. Without one, the embedded page is returned for every path.

use std::path::Path;

use axum::response::Html;
use tower_http::services::{ServeDir, ServeFile};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn embedded() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn serve_dir(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
