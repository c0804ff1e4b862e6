//! HTTP client for network-based API calls

use crate::{CatalogConfig, CatalogError, CatalogResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for making network requests to the marketplace API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> CatalogResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: serde::Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> CatalogResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.get(&url).query(query);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> CatalogResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.post(&url).multipart(form);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> CatalogResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(CatalogError::Unauthorized),
                StatusCode::FORBIDDEN => Err(CatalogError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(CatalogError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(CatalogError::Validation(text)),
                _ => Err(CatalogError::Internal(text)),
            };
        }

        // A success status with a non-JSON body (proxy error page, HTML
        // login redirect) is reported distinctly from transport errors.
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|err| CatalogError::InvalidResponse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Brand;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body)
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn success_body_that_is_not_json_is_an_invalid_response() {
        let result: CatalogResult<Vec<Brand>> =
            HttpClient::handle_response(response(200, "<html>bad gateway</html>")).await;
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn error_statuses_map_to_their_variants() {
        let unauthorized: CatalogResult<Vec<Brand>> =
            HttpClient::handle_response(response(401, "")).await;
        assert!(matches!(unauthorized, Err(CatalogError::Unauthorized)));

        let validation: CatalogResult<Vec<Brand>> =
            HttpClient::handle_response(response(400, "price out of range")).await;
        assert!(
            matches!(validation, Err(CatalogError::Validation(msg)) if msg == "price out of range")
        );
    }
}
