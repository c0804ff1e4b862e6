//! Client configuration

/// Configuration for connecting to the marketplace API
///
/// The bearer token is injected here by the caller (login flow is a
/// separate concern); the client never reads ambient storage.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl CatalogConfig {
    /// Create a new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }

    /// Create a catalog client from this configuration
    pub fn build_catalog(&self) -> super::NetworkCatalog {
        super::NetworkCatalog::new(self.build_http_client())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}
