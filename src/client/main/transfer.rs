//! Multipart upload and binary download flows.
//!
//! Both bypass the JSON body/response handling of [`ApiClient::request`]
//! but reproduce the same credential and CSRF discipline.

use http::{Method, StatusCode};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::errors::ApiError;

use super::core::{ApiClient, error_message, status_error};
use super::csrf::{CSRF_HEADER, is_csrf_exempt, is_state_changing};

impl ApiClient {
    /// POST a multipart form. The CSRF token is fetched/attached exactly as
    /// for a JSON mutation, but no `Content-Type: application/json` is set:
    /// reqwest supplies the `multipart/form-data` boundary header.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(path);

        let mut slot = self.csrf.lock().await;
        if slot.is_none() && !is_csrf_exempt(path) {
            *slot = Some(self.fetch_csrf_token().await?);
        }
        let token = slot.take();

        tracing::debug!("POST {} (multipart)", url);
        let mut request = self.http.post(&url).multipart(form);
        if let Some(token) = &token {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request.send().await?;
        self.finish(response, Some(&mut slot)).await
    }

    /// Issue a request whose response body is binary (report generation and
    /// download). Token discipline matches [`ApiClient::request`]; the body
    /// is returned raw, so a rotated token can only arrive via the
    /// `X-CSRF-Token` header.
    pub(crate) async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint_url(path);
        let mutating = is_state_changing(&method);

        if mutating && !is_csrf_exempt(path) {
            let mut slot = self.csrf.lock().await;
            if slot.is_none() {
                *slot = Some(self.fetch_csrf_token().await?);
            }
            let token = slot.take();
            let response = self.send(method, &url, body, token.as_deref()).await?;
            self.finish_bytes(response, Some(&mut slot)).await
        } else {
            let response = self.send(method, &url, body, None).await?;
            self.finish_bytes(response, None).await
        }
    }

    /// Binary counterpart of [`ApiClient::finish`]: same 401 and error
    /// normalization, header-only rotation capture, raw bytes out.
    async fn finish_bytes(
        &self,
        response: reqwest::Response,
        slot: Option<&mut Option<String>>,
    ) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        let header_token = response
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if status == StatusCode::UNAUTHORIZED {
            match slot {
                Some(slot) => *slot = None,
                None => self.csrf.clear().await,
            }
            let message = error_message(status, response.text().await.ok());
            return Err(ApiError::Unauthenticated(message));
        }

        if !status.is_success() {
            let message = error_message(status, response.text().await.ok());
            return Err(status_error(status, message));
        }

        if let Some(token) = header_token {
            match slot {
                Some(slot) => *slot = Some(token),
                None => self.csrf.store(token).await,
            }
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// File part for report uploads; the part carries its own content type so
/// the request itself stays free of a JSON content type.
pub(crate) fn file_part(
    field: &str,
    filename: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<Form, ApiError> {
    let part = Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(content_type)
        .map_err(|e| ApiError::Serde(format!("Invalid content type: {e}")))?;
    Ok(Form::new().part(field.to_string(), part))
}
