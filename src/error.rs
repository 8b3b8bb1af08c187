//! Unified error types for the client.

use crate::types::ErrorEnvelope;
use std::fmt;

// ---------------------------------------------------------------------------
// NetworkError
// ---------------------------------------------------------------------------

/// Errors raised while building or sending a wire-level request.
#[derive(Debug)]
pub enum NetworkError {
    /// The auth context base URL is not an absolute URL.
    InvalidBaseUrl(String),
    /// The endpoint path cannot be placed onto the base URL.
    InvalidPath(String),
    /// The request body could not be serialized to JSON.
    BodySerialization(serde_json::Error),
    /// Connectivity failure from the HTTP client (DNS, TLS, timeout, reset).
    Transport(reqwest::Error),
    /// The response could not be read as an HTTP response.
    MalformedResponse(String),
    /// Status code outside `200..300`. `body` holds the raw response bytes.
    UnexpectedStatus { code: u16, body: Vec<u8> },
}

impl NetworkError {
    /// HTTP status code for `UnexpectedStatus`, if that is what this is.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl(url) => write!(f, "invalid base url `{url}`"),
            Self::InvalidPath(path) => write!(f, "invalid endpoint path `{path}`"),
            Self::BodySerialization(e) => write!(f, "body serialization failed: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            Self::UnexpectedStatus { code, .. } => write!(f, "unexpected status {code}"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BodySerialization(e) => Some(e),
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

// ---------------------------------------------------------------------------
// ServiceError
// ---------------------------------------------------------------------------

/// Errors returned by the operation clients.
#[derive(Debug)]
pub enum ServiceError {
    /// Request construction or transport failure.
    Network(NetworkError),
    /// The API answered with its structured error envelope.
    Api(ErrorEnvelope),
    /// The body matched neither the expected shape nor the error envelope.
    ///
    /// Carries the error from the envelope decode attempt.
    Decoding(serde_json::Error),
}

impl ServiceError {
    /// The API error envelope, if the remote service reported one.
    pub fn api_error(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Api(envelope) => Some(envelope),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Api(envelope) => write!(
                f,
                "api error ({}): {}",
                envelope.error.kind, envelope.error.message
            ),
            Self::Decoding(e) => write!(f, "decoding: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Decoding(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<NetworkError> for ServiceError {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
