//! Error types for the frontdesk MCP server.
//!
//! This module defines `DeskError`, the unified error type used by the
//! configuration loader, the Zendesk client and the ticket submitter.
//!
//! # Security
//!
//! Error messages may embed text from the Zendesk API or from reqwest.
//! Use `sanitized_display()` before logging or returning them so the API
//! token never leaks.

use thiserror::Error;

/// Unified error type for all frontdesk operations.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request error: {}", error_chain(.0))]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {}", error_chain(.0))]
    HttpClient(#[source] reqwest::Error),

    /// Zendesk answered with something other than `201 Created`.
    #[error("Zendesk returned HTTP {} - {body}", .status.as_u16())]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other failure while building the request or reading the response.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Renders an error followed by each of its causes, joined with `": "`.
///
/// reqwest keeps the interesting part (connection refused, DNS, TLS) in the
/// source chain, not in its own message.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// The four failure classes a caller can observe.
///
/// All of them are terminal for the invocation; none is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required configuration value is absent or unusable.
    Configuration,
    /// The helpdesk API rejected the request.
    Remote,
    /// The request never produced an HTTP response.
    Transport,
    /// Anything else.
    Unexpected,
}

impl DeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        DeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DeskError::Config(message.into())
    }

    /// Creates an error for a fault outside the other categories.
    pub fn unexpected(message: impl Into<String>) -> Self {
        DeskError::Unexpected(message.into())
    }

    /// Classifies this error into one of the caller-visible failure classes.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::Config(_) => ErrorKind::Configuration,
            DeskError::HttpStatus { .. } => ErrorKind::Remote,
            DeskError::Http(_) => ErrorKind::Transport,
            DeskError::HttpClient(_) | DeskError::Serialization(_) | DeskError::Unexpected(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Replaces every occurrence of the API token in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_token: &str) -> String {
        if api_token.is_empty() {
            return message.to_string();
        }
        message.replace(api_token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_token: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = DeskError::missing_env("ZENDESK_TOKEN");
        assert!(err.to_string().contains("ZENDESK_TOKEN"));
        assert!(err.to_string().contains("missing"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_http_status_error_includes_code_and_body() {
        let err = DeskError::HttpStatus {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            body: "Invalid email".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("Invalid email"));
        assert_eq!(err.kind(), ErrorKind::Remote);
    }

    #[test]
    fn test_serialization_is_unexpected() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DeskError::from(parse_err);
        assert!(err.to_string().starts_with("JSON serialization error"));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_unexpected_error() {
        let err = DeskError::unexpected("ticket id missing");
        assert_eq!(err.to_string(), "unexpected error: ticket id missing");
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendFailed(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = SendFailed(io);
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = DeskError::unexpected("boom");
        assert_eq!(error_chain(&err), "unexpected error: boom");
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "zd_secret_token_12345";
        let message = format!("Error talking to Zendesk with {}", token);
        let sanitized = DeskError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_token() {
        let message = "Some error message";
        assert_eq!(DeskError::sanitize_message(message, ""), message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = DeskError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "token abc123 rejected".to_string(),
        };
        let msg = err.sanitized_display("abc123");
        assert!(msg.contains("401"));
        assert!(!msg.contains("abc123"));
    }
}
