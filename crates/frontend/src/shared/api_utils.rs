//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading error bodies.

use contracts::system::auth::ApiErrorBody;

use super::config::app_config;

/// Get the base URL for API requests
///
/// Uses `[api] base_url` from the configuration when set; otherwise builds
/// the URL from the current window location and `[api] port`.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let config = app_config();
    if let Some(base_url) = config.api.base_url.as_deref() {
        return base_url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api.port)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error text for a failed response: the server's `message` when the body
/// carries one, otherwise `fallback` with the status code.
pub fn error_message(body: &str, status: u16, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{}: {}", fallback, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_text() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#, 401, "Login failed"),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message("", 500, "Login failed"), "Login failed: 500");
        assert_eq!(error_message(r#"{"message":" "}"#, 400, "Request failed"), "Request failed: 400");
        assert_eq!(error_message("<html>", 502, "Request failed"), "Request failed: 502");
    }
}
