use chrono::{DateTime, Utc};
use http::Method;
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError, file_part};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: String,
    pub filename: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET /api/reports`
    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.get("reports").await
    }

    /// `POST /api/reports/generate` — state-changing with a binary response
    /// body (the rendered report). Full CSRF discipline, no JSON parsing;
    /// the caller decides where the bytes go.
    pub async fn generate_report(&self, from: &str, to: &str) -> Result<Vec<u8>, ApiError> {
        self.request_bytes(
            Method::POST,
            "reports/generate",
            Some(&json!({ "from": from, "to": to })),
        )
        .await
    }

    /// `POST /api/reports/upload` — multipart form, CSRF header attached,
    /// no JSON content type.
    pub async fn upload_report(&self, filename: &str, bytes: Vec<u8>) -> Result<Report, ApiError> {
        let form = file_part("file", filename, bytes, "application/pdf")?;
        self.post_multipart("reports/upload", form).await
    }

    /// `GET /api/reports/{id}/download` — read-only binary fetch.
    pub async fn download_report(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.request_bytes(Method::GET, &format!("reports/{id}/download"), None)
            .await
    }

    /// `DELETE /api/reports/{id}`
    pub async fn delete_report(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("reports/{id}")).await
    }
}
