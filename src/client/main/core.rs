use std::time::Duration;

use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::client::errors::ApiError;
use crate::client::types::{CsrfTokenResponse, ErrorBody};
use crate::config::{API_PREFIX, SECOPS_API_BASE_URL};

use super::csrf::{CSRF_HEADER, CsrfCell, is_csrf_exempt, is_state_changing, refreshed_token};

/// Creates the HTTP client shared by all requests:
///
/// - `timeout`: 30 seconds, so a hung backend never blocks a caller forever.
///
/// - `cookie_store`: enabled. The HttpOnly session cookie set by the login
///   response flows automatically on every subsequent request; this crate
///   never reads or writes it.
///
/// - `pool_idle_timeout` / `pool_max_idle_per_host`: defaults (90 seconds,
///   32 connections), a good balance for a dashboard-sized request volume.
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client")
}

/// Authenticated request client for the SecOps backend.
///
/// Owns the single CSRF token cell; every endpoint wrapper in
/// [`crate::api`] goes through [`ApiClient::request`] (or the multipart /
/// binary variants) and inherits the token lifecycle:
///
/// - state-changing requests outside the exclusion set pre-fetch a token
///   when none is held, attach it as `X-CSRF-Token`, and consume it once
///   the request has been sent, regardless of outcome;
/// - any response may rotate the token (header wins over the body's
///   `csrf_token` field);
/// - a 401 discards the token, since the session it belonged to is gone.
pub struct ApiClient {
    pub(super) http: reqwest::Client,
    api_base: String,
    pub(super) csrf: CsrfCell,
}

impl ApiClient {
    /// Client against the environment-configured backend
    /// (`SECOPS_API_BASE_URL`, default `http://localhost:8080`).
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(SECOPS_API_BASE_URL.as_str())
    }

    /// Client against an explicit backend, bypassing the environment.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::BaseUrl(format!(
                "Unsupported scheme: {}",
                parsed.scheme()
            )));
        }
        let api_base = format!("{}{API_PREFIX}", base_url.trim_end_matches('/'));
        Ok(Self {
            http: http_client(),
            api_base,
            csrf: CsrfCell::default(),
        })
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Issue a JSON API request and deserialize the response body.
    ///
    /// `path` is relative to the API prefix, e.g. `"blocklist"` or
    /// `"alerts/42/acknowledge"`, and may carry a query string.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(path);
        let mutating = is_state_changing(&method);

        if mutating && !is_csrf_exempt(path) {
            // The lock is held across pre-fetch, send and consume so that
            // concurrent mutations serialize instead of racing on the cell.
            let mut slot = self.csrf.lock().await;
            if slot.is_none() {
                *slot = Some(self.fetch_csrf_token().await?);
            }
            // Consumed here: the server rotates it on every mutation, so it
            // is spent whether the request succeeds or not.
            let token = slot.take();
            let response = self.send(method, &url, body, token.as_deref()).await?;
            self.finish(response, Some(&mut slot)).await
        } else {
            let response = self.send(method, &url, body, None).await?;
            if mutating {
                // Exempt mutation (login/register): still spends any held
                // token; a fresh one from the response is captured below.
                self.csrf.clear().await;
            }
            self.finish(response, None).await
        }
    }

    /// GET shorthand used by the read-only endpoint wrappers.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Dedicated token fetch: `GET /api/auth/csrf-token`. Cookie goes along,
    /// no CSRF header (the endpoint is itself in the exclusion set).
    pub(crate) async fn fetch_csrf_token(&self) -> Result<String, ApiError> {
        let url = self.endpoint_url("auth/csrf-token");
        tracing::debug!("Fetching fresh CSRF token");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = error_message(status, response.text().await.ok());
            tracing::error!("CSRF token fetch failed: {}", message);
            return Err(status_error(status, message));
        }

        let body_text = response.text().await?;
        let parsed: CsrfTokenResponse = serde_json::from_str(&body_text)
            .map_err(|e| ApiError::Serde(format!("Failed to deserialize token body: {e}")))?;
        Ok(parsed.csrf_token)
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        csrf_token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        if let Some(json) = body {
            request = request.json(json);
        }
        Ok(request.send().await?)
    }

    /// Shared response tail: 401 handling, error normalization, token
    /// rotation capture and JSON deserialization.
    ///
    /// When the caller already holds the cell lock (state-changing path) it
    /// passes the guard in as `slot`, so the rotation/clear goes through the
    /// same critical section as the send.
    pub(crate) async fn finish<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        slot: Option<&mut Option<String>>,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let header_token = response
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if status == StatusCode::UNAUTHORIZED {
            // Session gone; any held token is meaningless.
            match slot {
                Some(slot) => *slot = None,
                None => self.csrf.clear().await,
            }
            let message = error_message(status, response.text().await.ok());
            tracing::debug!("Unauthenticated response: {}", message);
            return Err(ApiError::Unauthenticated(message));
        }

        if !status.is_success() {
            let message = error_message(status, response.text().await.ok());
            tracing::debug!("Request failed: {}", message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body_text = response.text().await?;
        let value: Value = serde_json::from_str(&body_text)
            .map_err(|e| ApiError::Serde(format!("Failed to deserialize response body: {e}")))?;

        if let Some(token) = refreshed_token(header_token, &value) {
            match slot {
                Some(slot) => *slot = Some(token),
                None => self.csrf.store(token).await,
            }
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::Serde(format!("Failed to deserialize response body: {e}")))
    }
}

pub(crate) fn status_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthenticated(message)
    } else {
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Error convention: non-2xx bodies SHOULD be `{ "error": "..." }`, but an
/// empty or non-JSON body falls back to a generic `HTTP <status>` message.
pub(crate) fn error_message(status: StatusCode, body: Option<String>) -> String {
    body.as_deref()
        .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_field() {
        let message = error_message(
            StatusCode::FORBIDDEN,
            Some(r#"{"error":"token mismatch"}"#.to_string()),
        );
        assert_eq!(message, "token mismatch");
    }

    #[test]
    fn test_error_message_falls_back_on_non_json() {
        let message = error_message(StatusCode::BAD_GATEWAY, Some("<html>boom</html>".to_string()));
        assert_eq!(message, "HTTP 502");

        let message = error_message(StatusCode::NOT_FOUND, None);
        assert_eq!(message, "HTTP 404");

        // JSON object without an "error" field also falls back
        let message = error_message(StatusCode::NOT_FOUND, Some("{}".to_string()));
        assert_eq!(message, "HTTP 404");
    }

    #[test]
    fn test_endpoint_url_joins_prefix_and_path() {
        let client = ApiClient::with_base_url("http://localhost:9999/").unwrap();
        assert_eq!(
            client.endpoint_url("blocklist"),
            "http://localhost:9999/api/blocklist"
        );
        assert_eq!(
            client.endpoint_url("/alerts/42"),
            "http://localhost:9999/api/alerts/42"
        );
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(ApiClient::with_base_url("not a url").is_err());
        assert!(ApiClient::with_base_url("ftp://example.com").is_err());
    }
}
