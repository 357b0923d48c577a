use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct WhitelistEntry {
    pub id: String,
    pub ip_address: String,
    pub note: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET /api/whitelist`
    pub async fn list_whitelist(&self) -> Result<Vec<WhitelistEntry>, ApiError> {
        self.get("whitelist").await
    }

    /// `POST /api/whitelist`
    pub async fn add_whitelist_entry(
        &self,
        ip_address: &str,
        note: Option<&str>,
    ) -> Result<WhitelistEntry, ApiError> {
        self.post("whitelist", &json!({ "ip_address": ip_address, "note": note }))
            .await
    }

    /// `DELETE /api/whitelist/{id}`
    pub async fn remove_whitelist_entry(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("whitelist/{id}")).await
    }
}
