use http::Method;
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};

/// Header carrying the CSRF token, both on requests and on token-rotating
/// responses.
pub(crate) const CSRF_HEADER: &str = "x-csrf-token";

/// Endpoints that are callable before any session exists. No CSRF pre-fetch
/// or attachment is ever attempted for them.
const CSRF_EXEMPT_SEGMENTS: [&str; 3] = ["login", "register", "csrf-token"];

/// Methods other than GET/HEAD/OPTIONS are presumed to mutate server state
/// and therefore require a CSRF token.
pub(crate) fn is_state_changing(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Matches on the final path segment so both `auth/login` and `login`
/// (with or without a trailing slash) are recognized.
pub(crate) fn is_csrf_exempt(path: &str) -> bool {
    let last = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path);
    CSRF_EXEMPT_SEGMENTS.contains(&last)
}

/// Two-source lookup for a rotated token in a response: the
/// `X-CSRF-Token` header always wins over a `csrf_token` field in the
/// JSON body.
pub(crate) fn refreshed_token(header: Option<String>, body: &Value) -> Option<String> {
    header.or_else(|| {
        body.get("csrf_token")
            .and_then(Value::as_str)
            .map(str::to_owned)
    })
}

/// The single CSRF token cell.
///
/// States: `None` (no token) and `Some(value)` (current token). At most one
/// value is current at any time. State-changing requests hold the lock
/// across pre-fetch, send and consume, so concurrent mutations serialize
/// instead of racing on the shared cell.
#[derive(Debug, Default)]
pub(crate) struct CsrfCell {
    current: Mutex<Option<String>>,
}

impl CsrfCell {
    pub(crate) async fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.current.lock().await
    }

    /// A fresh token arrived in a response; it replaces whatever was held.
    pub(crate) async fn store(&self, token: String) {
        tracing::debug!("Storing rotated CSRF token");
        *self.current.lock().await = Some(token);
    }

    /// The session is gone (401) or the token was consumed; drop it.
    pub(crate) async fn clear(&self) {
        *self.current.lock().await = None;
    }
}
