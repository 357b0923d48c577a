//! Central configuration for the secops-client crate

use std::sync::LazyLock;

/// Base URL of the SecOps backend
///
/// Read from the `SECOPS_API_BASE_URL` environment variable.
/// Default: "http://localhost:8080"
pub static SECOPS_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SECOPS_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
});

/// Path prefix under which every API endpoint is mounted.
pub(crate) const API_PREFIX: &str = "/api";

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    /// Helper function to set an environment variable for the duration of the test
    /// and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    #[serial]
    fn test_base_url_default() {
        // We can't directly test the LazyLock since it may already be initialized,
        // but we can test the same logic it uses
        with_env_var("SECOPS_API_BASE_URL", None, || {
            let url = env::var("SECOPS_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string());
            assert_eq!(url, "http://localhost:8080");
        });
    }

    #[test]
    #[serial]
    fn test_base_url_custom() {
        with_env_var("SECOPS_API_BASE_URL", Some("https://api.example.com"), || {
            let url = env::var("SECOPS_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string());
            assert_eq!(url, "https://api.example.com");
        });
    }
}
