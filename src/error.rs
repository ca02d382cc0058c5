//! Error type shared by the feed library, the CLI and the web UI.

use thiserror::Error;

/// Errors raised while configuring, fetching or decoding feed data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request never produced a response.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not JSON.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Reading a saved response failed.
    #[error("could not read {path}: {reason}")]
    Io { path: String, reason: String },
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = FeedError::Status {
            url: "http://localhost:8001/telegram/@x".into(),
            status: 502,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:8001/telegram/@x returned HTTP 502"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: FeedError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FeedError::Decode(_)));
    }
}
