//! secops-client - Typed client for the SecOps dashboard backend
//!
//! The crate wraps every call to the backend REST API in an authenticated
//! request client that owns the CSRF token lifecycle: transparent pre-fetch
//! before state-changing calls, single-use consumption after send, rotation
//! capture from responses (header over body), and discard on 401. The
//! HttpOnly session cookie rides along via the HTTP client's cookie store
//! and is never touched directly.
//!
//! ```no_run
//! use secops_client::ApiClient;
//!
//! # async fn run() -> Result<(), secops_client::ApiError> {
//! let client = ApiClient::new()?;
//! client.login("a@b.com", "pw").await?;
//! client.block_ip("203.0.113.9", "port scan").await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;

pub use client::{ApiClient, ApiError};
pub use config::SECOPS_API_BASE_URL;

pub use api::{
    Ack, AdminUser, Alert, AlertPage, AlertQuery, AlertSeverity, AlertStatus, ApiToken, BlockedIp,
    CreatedToken, Member, Notification, PaymentMethod, PlatformStats, RegisterRequest, Report,
    SessionInfo, Settings, Subscription, UnreadCount, User, WhitelistEntry,
};
