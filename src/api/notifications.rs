use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

impl ApiClient {
    /// `GET /api/notifications`
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("notifications").await
    }

    /// `GET /api/notifications/unread-count`
    pub async fn unread_notification_count(&self) -> Result<UnreadCount, ApiError> {
        self.get("notifications/unread-count").await
    }

    /// `PUT /api/notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.put(&format!("notifications/{id}/read"), &json!({}))
            .await
    }

    /// `PUT /api/notifications/read-all`
    pub async fn mark_all_notifications_read(&self) -> Result<Ack, ApiError> {
        self.put("notifications/read-all", &json!({})).await
    }

    /// `DELETE /api/notifications/{id}`
    pub async fn delete_notification(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("notifications/{id}")).await
    }
}
