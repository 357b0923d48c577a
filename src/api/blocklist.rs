use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct BlockedIp {
    pub id: String,
    pub ip_address: String,
    pub reason: String,
    pub blocked_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    /// `GET /api/blocklist`
    pub async fn list_blocklist(&self) -> Result<Vec<BlockedIp>, ApiError> {
        self.get("blocklist").await
    }

    /// `POST /api/blocklist`
    pub async fn block_ip(&self, ip_address: &str, reason: &str) -> Result<BlockedIp, ApiError> {
        self.post(
            "blocklist",
            &json!({ "ip_address": ip_address, "reason": reason }),
        )
        .await
    }

    /// `DELETE /api/blocklist/{id}`
    pub async fn unblock_ip(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("blocklist/{id}")).await
    }
}
