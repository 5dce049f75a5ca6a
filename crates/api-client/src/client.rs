//! The generic HTTP client.
//!
//! [`ApiClient`] wraps a pooled [`reqwest::Client`] pointed at the
//! backend base URL. [`ApiClient::request`] is the single typed entry
//! point: it issues one attempt, normalizes every failure into
//! [`ApiError`], and parses successful payloads into the caller's type.
//!
//! Concurrent calls are independent; nothing here guarantees that
//! responses arrive in request order.

use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, RequestConfig};
use crate::error::ApiError;

/// Typed success envelope returned by [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code of the successful response.
    pub status: u16,
    /// Parsed response payload.
    pub data: T,
}

/// HTTP client for the hostal backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with a pooled connection and the configured
    /// default timeout.
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Build a client reusing an existing [`reqwest::Client`] (useful
    /// for sharing one connection pool across consoles).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single request and parse the response payload.
    ///
    /// One attempt only. Failure shapes:
    /// - no response at all -> [`ApiError::Connectivity`]
    /// - non-2xx status -> [`ApiError::Status`] with the backend's
    ///   error message when it sent one
    /// - unparseable 2xx payload -> [`ApiError::Decode`]
    pub async fn request<T: DeserializeOwned>(
        &self,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(config).await?;
        let status = response.status().as_u16();

        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, data })
    }

    /// Issue a request where the response body is irrelevant.
    ///
    /// Used for deletes, where the backend replies `204 No Content`.
    pub async fn request_empty(&self, config: RequestConfig) -> Result<u16, ApiError> {
        let response = self.send(config).await?;
        Ok(response.status().as_u16())
    }

    /// `GET` a path and parse the payload, discarding the status code.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.request(RequestConfig::get(path)).await?.data)
    }

    /// `POST` a JSON body and parse the payload.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        Ok(self
            .request(RequestConfig::post(path).json_body(body))
            .await?
            .data)
    }

    /// `PUT` a JSON body and parse the payload.
    pub async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        Ok(self
            .request(RequestConfig::put(path).json_body(body))
            .await?
            .data)
    }

    /// `DELETE` a path, ignoring any response body.
    pub async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        self.request_empty(RequestConfig::delete(path)).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Send the request and surface non-2xx responses as
    /// [`ApiError::Status`].
    async fn send(&self, config: RequestConfig) -> Result<reqwest::Response, ApiError> {
        let url = join_url(&self.base_url, &config.path);
        tracing::debug!(method = %config.method, %url, "Issuing backend request");

        let mut request = self.http.request(config.method.clone(), &url);

        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        for (name, value) in &config.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &config.body {
            request = request.json(body);
        }
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let err = ApiError::from_status(status.as_u16(), &body);
            tracing::debug!(%url, status = status.as_u16(), "Backend reported failure");
            return Err(err);
        }

        Ok(response)
    }
}

/// Join the base URL and a request path with exactly one slash.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_refused_connection_maps_to_connectivity() {
        // Port 1 on loopback refuses immediately; the request produces
        // no response, so the failure must surface as Connectivity.
        let client = ApiClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1");
        let result: Result<ApiResponse<serde_json::Value>, ApiError> =
            client.request(RequestConfig::get("tables")).await;

        assert_matches!(result, Err(ApiError::Connectivity(_)));
    }

    #[tokio::test]
    async fn test_timed_out_request_maps_to_connectivity() {
        // A non-routable address with a tight per-request timeout.
        let client = ApiClient::with_client(reqwest::Client::new(), "http://10.255.255.1");
        let config =
            RequestConfig::get("tables").timeout(std::time::Duration::from_millis(50));
        let result: Result<ApiResponse<serde_json::Value>, ApiError> =
            client.request(config).await;

        assert_matches!(result, Err(ApiError::Connectivity(_)));
    }

    #[test]
    fn test_join_url_inserts_single_slash() {
        assert_eq!(
            join_url("http://backend:3000", "tables"),
            "http://backend:3000/tables"
        );
    }

    #[test]
    fn test_join_url_collapses_duplicate_slashes() {
        assert_eq!(
            join_url("http://backend:3000/", "/tables/5"),
            "http://backend:3000/tables/5"
        );
    }

    #[test]
    fn test_with_client_strips_trailing_slash() {
        let client = ApiClient::with_client(reqwest::Client::new(), "http://backend:3000/");
        assert_eq!(client.base_url(), "http://backend:3000");
    }
}
