use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

/// The authenticated account as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Login/registration response. The `csrf_token` the body carries is
/// captured by the request client itself; callers only see the user.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ApiClient {
    /// `POST /api/auth/login`. In the exclusion set (no session exists yet),
    /// so no CSRF pre-fetch happens; the token returned in the response body
    /// becomes current for all subsequent calls.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionInfo, ApiError> {
        self.post(
            "auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    /// `POST /api/auth/register`. Same exclusion as login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionInfo, ApiError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ApiError::Serde(format!("Failed to serialize request: {e}")))?;
        self.post("auth/register", &body).await
    }

    /// `POST /api/auth/logout`. A normal mutation: the held token is
    /// attached and spent, leaving the client back in the no-token state.
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        self.post("auth/logout", &json!({})).await
    }

    /// `GET /api/auth/me`
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("auth/me").await
    }
}
