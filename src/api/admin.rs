use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformStats {
    pub total_users: u64,
    pub active_alerts: u64,
    pub blocked_ips: u64,
}

impl ApiClient {
    /// `GET /api/admin/users`
    pub async fn list_admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get("admin/users").await
    }

    /// `PUT /api/admin/users/{id}/status`
    pub async fn set_user_active(&self, id: &str, active: bool) -> Result<AdminUser, ApiError> {
        self.put(
            &format!("admin/users/{id}/status"),
            &json!({ "active": active }),
        )
        .await
    }

    /// `GET /api/admin/stats`
    pub async fn platform_stats(&self) -> Result<PlatformStats, ApiError> {
        self.get("admin/stats").await
    }
}
