//! Error type shared by both API clients.
//!
//! # Design
//! A single taxonomy covers every way a backend interaction can fail:
//! the server answered with a non-2xx status, the request never produced a
//! response, or a 2xx body could not be decoded. Validation (empty names,
//! missing selection) happens in the UI before a request is built and never
//! reaches this layer.

use thiserror::Error;

/// Result type alias used throughout the client crate.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Failure of a single backend request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request could not be completed (DNS, refused connection,
    /// aborted fetch).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered 2xx but the body did not match the expected
    /// shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Status code of the response, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code_and_message() {
        let err = RequestError::Status {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn transport_and_decode_carry_no_status() {
        assert_eq!(RequestError::Transport("refused".into()).status_code(), None);
        assert_eq!(RequestError::Decode("bad json".into()).status_code(), None);
    }
}
