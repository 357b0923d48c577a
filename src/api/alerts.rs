use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::client::{ApiClient, ApiError};

use super::Ack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Resolved,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Open => "open",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub source_ip: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertPage {
    pub alerts: Vec<Alert>,
    pub total: u64,
}

/// Server-side filters for the alert list.
#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl AlertQuery {
    fn to_query_string(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(severity) = self.severity {
            pairs.append_pair("severity", severity.as_str());
        }
        if let Some(status) = self.status {
            pairs.append_pair("status", status.as_str());
        }
        if let Some(page) = self.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        pairs.finish()
    }
}

impl ApiClient {
    /// `GET /api/alerts` with optional severity/status/paging filters.
    pub async fn list_alerts(&self, query: &AlertQuery) -> Result<AlertPage, ApiError> {
        let qs = query.to_query_string();
        let path = if qs.is_empty() {
            "alerts".to_string()
        } else {
            format!("alerts?{qs}")
        };
        self.get(&path).await
    }

    /// `GET /api/alerts/{id}`
    pub async fn get_alert(&self, id: &str) -> Result<Alert, ApiError> {
        self.get(&format!("alerts/{id}")).await
    }

    /// `POST /api/alerts/{id}/acknowledge`
    pub async fn acknowledge_alert(&self, id: &str) -> Result<Alert, ApiError> {
        self.post(&format!("alerts/{id}/acknowledge"), &serde_json::json!({}))
            .await
    }

    /// `POST /api/alerts/{id}/resolve`
    pub async fn resolve_alert(&self, id: &str) -> Result<Alert, ApiError> {
        self.post(&format!("alerts/{id}/resolve"), &serde_json::json!({}))
            .await
    }

    /// `DELETE /api/alerts/{id}`
    pub async fn delete_alert(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("alerts/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_unset_filters() {
        let query = AlertQuery::default();
        assert_eq!(query.to_query_string(), "");

        let query = AlertQuery {
            severity: Some(AlertSeverity::High),
            status: Some(AlertStatus::Open),
            page: Some(2),
            limit: None,
        };
        assert_eq!(query.to_query_string(), "severity=high&status=open&page=2");
    }

    #[test]
    fn test_alert_deserialization() {
        let alert: Alert = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "title": "Port scan detected",
            "description": null,
            "severity": "critical",
            "status": "open",
            "source_ip": "203.0.113.9",
            "created_at": "2026-01-15T10:00:00Z",
            "updated_at": "2026-01-15T10:05:00Z"
        }))
        .expect("valid alert must deserialize");
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.status, AlertStatus::Open);
    }
}
