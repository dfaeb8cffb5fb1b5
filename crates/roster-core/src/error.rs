//! Error types for roster operations.
//!
//! A single error type with explicit variants for transport, protocol and
//! input validation failures. Protocol errors keep the HTTP status and the
//! optional `message` the backend put in the error body.

use std::fmt;
use thiserror::Error;

/// The unified error type for roster operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or local I/O failures (connection, DNS, TLS, decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success responses from the backend.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, bad identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns the human-readable `message` from the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Protocol(err) => err.message.as_deref(),
            _ => None,
        }
    }

    /// True when the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Local storage failure (file backend).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode {
            message: err.to_string(),
        }
    }
}

/// A non-success response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// A 404 with a `NotFound` code and message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, Some("NotFound".to_string()), Some(message.into()))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid student identifier.
    #[error("invalid student id '{value}': {reason}")]
    StudentId { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_status_and_message() {
        let err = ProtocolError::new(
            400,
            Some("BadRequest".to_string()),
            Some("Name is required".to_string()),
        );
        assert_eq!(err.to_string(), "HTTP 400 [BadRequest]: Name is required");
    }

    #[test]
    fn status_and_server_message_only_for_protocol_errors() {
        let err = Error::from(ProtocolError::new(500, None, Some("boom".to_string())));
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.server_message(), Some("boom"));

        let err = Error::from(TransportError::Timeout);
        assert_eq!(err.status(), None);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn not_found_helper() {
        let err = Error::from(ProtocolError::not_found("Student 3 not found"));
        assert!(err.is_not_found());
    }
}
