use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET /api/members`
    pub async fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        self.get("members").await
    }

    /// `POST /api/members/invite`
    pub async fn invite_member(&self, email: &str, role: &str) -> Result<Ack, ApiError> {
        self.post("members/invite", &json!({ "email": email, "role": role }))
            .await
    }

    /// `PUT /api/members/{id}`
    pub async fn update_member_role(&self, id: &str, role: &str) -> Result<Member, ApiError> {
        self.put(&format!("members/{id}"), &json!({ "role": role }))
            .await
    }

    /// `DELETE /api/members/{id}`
    pub async fn remove_member(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("members/{id}")).await
    }
}
