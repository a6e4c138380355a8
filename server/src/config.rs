//! Server configuration, loaded from environment variables at startup.

use std::path::PathBuf;

const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind. `POSTS_BIND`, or `127.0.0.1:$PORT` when only
    /// `PORT` is set.
    pub bind_address: String,

    /// Directory holding the client shell (`index.html` plus assets). When
    /// unset the embedded shell page is served instead.
    pub public_dir: Option<PathBuf>,

    /// `tracing` filter string used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_owned(),
            public_dir: None,
            log_level: "info".to_owned(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let bind_address = match (lookup("POSTS_BIND"), lookup("PORT")) {
            (Some(bind), _) => bind,
            (None, Some(port)) => format!("127.0.0.1:{port}"),
            (None, None) => defaults.bind_address,
        };
        Self {
            bind_address,
            public_dir: lookup("POSTS_PUBLIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            log_level: lookup("POSTS_LOG").unwrap_or(defaults.log_level),
            log_json: lookup("POSTS_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
