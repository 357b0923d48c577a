use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself failed before a response arrived (DNS, refused
    /// connection, timeout). Propagated without retry.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 401; the session cookie is gone or invalid.
    /// The held CSRF token has been discarded by the time this is returned.
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// Any other non-2xx response. `message` is the JSON body's `error`
    /// field when present, otherwise a generic `HTTP <status>` string.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// Whether the caller should route the user back through login.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated(_))
    }
}
