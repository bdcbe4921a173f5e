//! Client configuration

/// Address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Environment variable read by [`ClientConfig::from_env`]
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Where the remote task store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base address
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base address from `TODO_API_URL`, falling back to the default
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
