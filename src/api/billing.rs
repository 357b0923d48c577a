use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub status: String,
    pub seats: u32,
    pub renews_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub brand: String,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub default: bool,
}

impl ApiClient {
    /// `GET /api/subscription`
    pub async fn get_subscription(&self) -> Result<Subscription, ApiError> {
        self.get("subscription").await
    }

    /// `PUT /api/subscription`
    pub async fn update_subscription(&self, plan: &str) -> Result<Subscription, ApiError> {
        self.put("subscription", &json!({ "plan": plan })).await
    }

    /// `POST /api/subscription/cancel`
    pub async fn cancel_subscription(&self) -> Result<Ack, ApiError> {
        self.post("subscription/cancel", &json!({})).await
    }

    /// `GET /api/payment-methods`
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.get("payment-methods").await
    }

    /// `POST /api/payment-methods` — `source_token` is the processor-issued
    /// tokenized card, never raw card data.
    pub async fn add_payment_method(&self, source_token: &str) -> Result<PaymentMethod, ApiError> {
        self.post("payment-methods", &json!({ "source_token": source_token }))
            .await
    }

    /// `PUT /api/payment-methods/{id}/default`
    pub async fn set_default_payment_method(&self, id: &str) -> Result<PaymentMethod, ApiError> {
        self.put(&format!("payment-methods/{id}/default"), &json!({}))
            .await
    }

    /// `DELETE /api/payment-methods/{id}`
    pub async fn remove_payment_method(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("payment-methods/{id}")).await
    }
}
