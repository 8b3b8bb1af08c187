//! Success/error-envelope decoding of response bodies.

use crate::error::ServiceError;
use crate::types::ErrorEnvelope;
use serde::de::DeserializeOwned;

/// The three ways a response body can be read.
#[derive(Debug)]
pub enum Resolved<T> {
    /// The body decoded as the expected shape.
    Success(T),
    /// The body decoded as the API error envelope.
    ApiError(ErrorEnvelope),
    /// Neither decode worked. Holds the error from the envelope attempt.
    Failure(serde_json::Error),
}

impl<T> Resolved<T> {
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::ApiError(envelope) => Err(ServiceError::Api(envelope)),
            Self::Failure(err) => Err(ServiceError::Decoding(err)),
        }
    }
}

/// Decode `bytes` as `T`, falling back to the API error envelope.
///
/// A successful `T` decode always wins, even if the body would also match
/// the envelope. When both fail, only the envelope error is kept.
pub fn resolve<T: DeserializeOwned>(bytes: &[u8]) -> Resolved<T> {
    match serde_json::from_slice::<T>(bytes) {
        Ok(value) => {
            tracing::trace!("decoded expected response shape");
            return Resolved::Success(value);
        }
        Err(err) => tracing::debug!(error = %err, "expected shape did not decode, trying error envelope"),
    }
    match decode_error_envelope(bytes) {
        Ok(envelope) => {
            tracing::debug!(kind = %envelope.error.kind, "decoded api error envelope");
            Resolved::ApiError(envelope)
        }
        Err(err) => {
            tracing::warn!(error = %err, "response matched neither expected shape nor error envelope");
            Resolved::Failure(err)
        }
    }
}

pub(crate) fn decode_error_envelope(bytes: &[u8]) -> Result<ErrorEnvelope, serde_json::Error> {
    serde_json::from_slice(bytes)
}
