use serde::Deserialize;

/// Body of the dedicated token endpoint, `GET /api/auth/csrf-token`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CsrfTokenResponse {
    pub(crate) csrf_token: String,
}

/// Error convention for non-2xx responses: `{ "error": "..." }`.
/// Tolerated as optional; a missing or unparseable body falls back to a
/// generic `HTTP <status>` message.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: Option<String>,
}
