//! Typed endpoint wrappers, one file per resource group.
//!
//! Each group is a thin `impl ApiClient` block over the generic request
//! client; the CSRF lifecycle, cookie handling and error normalization all
//! live in [`crate::client`].

mod admin;
mod alerts;
mod auth;
mod billing;
mod blocklist;
mod members;
mod notifications;
mod reports;
mod settings;
mod tokens;
mod whitelist;

pub use admin::{AdminUser, PlatformStats};
pub use alerts::{Alert, AlertPage, AlertQuery, AlertSeverity, AlertStatus};
pub use auth::{RegisterRequest, SessionInfo, User};
pub use billing::{PaymentMethod, Subscription};
pub use blocklist::BlockedIp;
pub use members::Member;
pub use notifications::{Notification, UnreadCount};
pub use reports::Report;
pub use settings::Settings;
pub use tokens::{ApiToken, CreatedToken};
pub use whitelist::WhitelistEntry;

use serde::Deserialize;

/// Generic acknowledgement body returned by endpoints that have nothing
/// more specific to say, e.g. `{ "success": true }` or `{ "message": "ok" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: Option<bool>,
    pub message: Option<String>,
}
