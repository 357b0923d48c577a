use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

/// An API token as listed by the backend; the secret itself is only ever
/// returned once, at creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiToken {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedToken {
    #[serde(flatten)]
    pub token: ApiToken,
    /// Full secret, shown once. Not recoverable afterwards.
    pub secret: String,
}

impl ApiClient {
    /// `GET /api/tokens`
    pub async fn list_tokens(&self) -> Result<Vec<ApiToken>, ApiError> {
        self.get("tokens").await
    }

    /// `POST /api/tokens`
    pub async fn create_token(&self, name: &str) -> Result<CreatedToken, ApiError> {
        self.post("tokens", &json!({ "name": name })).await
    }

    /// `DELETE /api/tokens/{id}`
    pub async fn revoke_token(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("tokens/{id}")).await
    }
}
