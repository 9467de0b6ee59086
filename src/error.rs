// ============================================================================
// ERRORS
// ============================================================================
// Display strings of ValidationError are shown to the user as-is.
// ============================================================================

use serde::Deserialize;

/// Failure of a call to the remote API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    /// HTTP 429. `retry_after_ms` is whatever the server sent, unchecked.
    #[error("rate limited (retry after {retry_after_ms:?} ms)")]
    RateLimited { retry_after_ms: Option<f64> },
    #[error("not found")]
    NotFound { message: Option<String> },
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RateLimitBody {
    /// Milliseconds, sent either as a number or as a numeric string.
    #[serde(default)]
    retry_after: Option<serde_json::Value>,
}

impl RateLimitBody {
    fn retry_after_ms(&self) -> Option<f64> {
        match self.retry_after.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl ApiError {
    /// Classifies a non-2xx response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            429 => {
                let parsed: RateLimitBody = serde_json::from_str(body).unwrap_or_default();
                ApiError::RateLimited {
                    retry_after_ms: parsed.retry_after_ms(),
                }
            }
            404 => ApiError::NotFound {
                message: server_message(body),
            },
            _ => ApiError::Server {
                status,
                message: server_message(body),
            },
        }
    }

    /// Message reported by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } | ApiError::NotFound { message } => message.as_deref(),
            _ => None,
        }
    }

    /// The server's message when present, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
}

/// Client-side form validation failure; raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Phone number must be exactly {0} digits long.")]
    PhoneExactLength(usize),
    #[error("Phone number must be between {min} and {max} digits long.")]
    PhoneLengthRange { min: usize, max: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password cannot be empty.")]
    EmptyPassword,
    #[error("Please enter at least one keyword.")]
    NoKeywords,
    #[error("Your account type is still loading. Please try again in a moment.")]
    PostTypeUnknown,
    #[error("Please choose an image file.")]
    NotAnImage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not write localStorage key {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_requests_carries_the_retry_delay() {
        let err = ApiError::from_response(429, r#"{"retryAfter": 90061000}"#);
        assert_eq!(
            err,
            ApiError::RateLimited {
                retry_after_ms: Some(90_061_000.0)
            }
        );
    }

    #[test]
    fn retry_delay_sent_as_a_string_is_still_read() {
        let err = ApiError::from_response(429, r#"{"retryAfter": " 60000 "}"#);
        assert_eq!(err, ApiError::RateLimited { retry_after_ms: Some(60_000.0) });

        let err = ApiError::from_response(429, r#"{"retryAfter": "soon"}"#);
        assert_eq!(err, ApiError::RateLimited { retry_after_ms: None });

        let err = ApiError::from_response(429, r#"{"retryAfter": true}"#);
        assert_eq!(err, ApiError::RateLimited { retry_after_ms: None });
    }

    #[test]
    fn too_many_requests_without_body_has_no_delay() {
        let err = ApiError::from_response(429, "Too Many Requests");
        assert_eq!(err, ApiError::RateLimited { retry_after_ms: None });
    }

    #[test]
    fn server_error_field_is_preferred_over_message() {
        let err = ApiError::from_response(400, r#"{"error": "Email already used", "message": "Bad"}"#);
        assert_eq!(err.user_message("fallback"), "Email already used");
    }

    #[test]
    fn message_field_is_used_when_error_is_missing() {
        let err = ApiError::from_response(500, r#"{"message": "Database down"}"#);
        assert_eq!(err.user_message("fallback"), "Database down");
    }

    #[test]
    fn non_json_or_blank_bodies_fall_back() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message("An error occurred."), "An error occurred.");

        let err = ApiError::from_response(400, r#"{"error": "  "}"#);
        assert_eq!(err.user_message("An error occurred."), "An error occurred.");
    }

    #[test]
    fn transport_errors_never_expose_a_server_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("generic"), "generic");
    }

    #[test]
    fn validation_messages_read_as_sentences() {
        assert_eq!(
            ValidationError::PhoneExactLength(9).to_string(),
            "Phone number must be exactly 9 digits long."
        );
        assert_eq!(
            ValidationError::PhoneLengthRange { min: 9, max: 15 }.to_string(),
            "Phone number must be between 9 and 15 digits long."
        );
    }
}
