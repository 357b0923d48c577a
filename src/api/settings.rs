use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError};

/// Per-organization dashboard settings; server-owned semantics, the client
/// only round-trips the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub email_alerts: bool,
    pub alert_threshold: u32,
    pub webhook_url: Option<String>,
    pub timezone: String,
}

impl ApiClient {
    /// `GET /api/settings`
    pub async fn get_settings(&self) -> Result<Settings, ApiError> {
        self.get("settings").await
    }

    /// `PUT /api/settings`
    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ApiError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| ApiError::Serde(format!("Failed to serialize request: {e}")))?;
        self.put("settings", &body).await
    }
}
