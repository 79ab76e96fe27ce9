//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as an HTTP status plus `{"detail": ...}`.
//! `classify` maps that pair onto a semantic variant per endpoint so callers
//! can match on meaning (`InvalidCredentials`, `Unauthorized`, ...) instead
//! of raw status codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Which backend operation produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    CurrentUser,
    OAuthSession,
    Logout,
    Billing,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Login rejected the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration input was rejected (e.g. email already registered).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The bearer credential is missing, expired, or revoked.
    #[error("unauthorized")]
    Unauthorized,

    /// The OAuth session id is unknown or already consumed.
    #[error("invalid oauth session")]
    InvalidSession,

    /// Any other non-success status.
    #[error("request failed: status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Short message suitable for an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password.".to_owned(),
            Self::Validation(detail) => detail.clone(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::InvalidSession => "Sign-in could not be completed.".to_owned(),
            Self::Transport(_) | Self::Unavailable => "Network error. Please try again.".to_owned(),
            Self::Status { .. } | Self::Parse(_) => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

/// Map a non-success response onto an `ApiError` for `endpoint`.
pub fn classify(endpoint: Endpoint, status: u16, body: &str) -> ApiError {
    let detail = parse_detail(body);
    match (endpoint, status) {
        (Endpoint::Login, 401) => ApiError::InvalidCredentials,
        (Endpoint::Register, 400 | 409 | 422) => {
            ApiError::Validation(detail.unwrap_or_else(|| "Registration failed.".to_owned()))
        }
        (Endpoint::Login, 400 | 422) => {
            ApiError::Validation(detail.unwrap_or_else(|| "Invalid login request.".to_owned()))
        }
        (Endpoint::OAuthSession, 400 | 401 | 404) => ApiError::InvalidSession,
        (_, 401 | 403) => ApiError::Unauthorized,
        _ => ApiError::Status { status, detail: detail.unwrap_or_default() },
    }
}

/// Extract a readable message from a backend error body.
///
/// `detail` is usually a string; request-validation failures carry a list of
/// `{msg, ...}` objects, which are joined.
pub fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
