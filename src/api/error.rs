//! Error types for the Smart Learning System API

use thiserror::Error;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Login was answered but rejected
    #[error("Login rejected: {0}")]
    LoginRejected(String),
}

impl ApiError {
    /// Whether the failure happened before the server produced an answer
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::RequestError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_includes_status() {
        let err = ApiError::ServerError { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "Server error (500): boom");
        assert!(!err.is_network());
    }
}
