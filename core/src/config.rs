//! Base-URL configuration for the API client.
//!
//! # Design
//! Built once at startup and injected into `HttpClient::new`, never read
//! from ambient global state afterwards. `from_env` honors the
//! `OBRA_API_BASE` environment variable and falls back to the local dev
//! backend.

/// Default backend address when `OBRA_API_BASE` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const BASE_URL_ENV: &str = "OBRA_API_BASE";

/// Immutable client configuration: the base URL all request paths are
/// appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config around `base_url`, stripping any trailing `/` so path
    /// concatenation stays unambiguous.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `OBRA_API_BASE`, defaulting to
    /// `http://localhost:3000`.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:3000");
    }

    // Set and unset paths live in one test: the variable is process-global
    // and tests run in parallel.
    #[test]
    fn from_env_reads_var_and_falls_back_when_unset() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ApiConfig::from_env().base_url(), DEFAULT_BASE_URL);

        std::env::set_var(BASE_URL_ENV, "http://obra.example.com:8080/");
        assert_eq!(ApiConfig::from_env().base_url(), "http://obra.example.com:8080");
        std::env::remove_var(BASE_URL_ENV);
    }

    #[test]
    fn plain_url_kept_verbatim() {
        let config = ApiConfig::new("https://obra.example.com");
        assert_eq!(config.base_url(), "https://obra.example.com");
    }
}
