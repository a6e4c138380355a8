//! Client configuration.

/// Base URL used when `POSTS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the versioned API namespace, e.g. `http://host:3000/api/v1`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `POSTS_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("POSTS_API_URL")
            .filter(|url| !url.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}
