//! Operation clients built on one generic request pipeline.
//!
//! [`OpenAiService::perform`] runs build → send → resolve for any endpoint.
//! The per-operation clients (`ChatService`, `CompletionService`,
//! `ModelsService`) each own an `OpenAiService` and carry only the settings
//! their operation needs.

mod chat;
mod completions;
mod models;
mod resolve;

pub use chat::{ChatApi, ChatService};
pub use completions::CompletionService;
pub use models::ModelsService;
pub use resolve::{resolve, Resolved};

use crate::config::{ClientConfig, ErrorBodyPolicy};
use crate::error::{NetworkError, ServiceError};
use crate::network::{AuthContext, Endpoint, Network, RequestBody, Transport, DEFAULT_BASE_URL};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Credential plus transport; performs one request per call.
///
/// Cheap to clone. Concurrent calls share nothing but the transport.
#[derive(Clone)]
pub struct OpenAiService {
    token: String,
    base_url: String,
    transport: Arc<dyn Transport>,
    error_bodies: ErrorBodyPolicy,
}

impl OpenAiService {
    /// Service against the default host using a fresh reqwest transport.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_transport(token, Arc::new(Network::new()))
    }

    pub fn with_transport(token: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
            error_bodies: ErrorBodyPolicy::default(),
        }
    }

    /// Service configured from resolved settings. Fails without an API key.
    pub fn from_config(config: &ClientConfig) -> Result<Self, crate::error::ConfigError> {
        let token = config.require_api_key()?;
        let transport = match config.timeout_secs {
            Some(secs) => Network::with_timeout(Duration::from_secs(secs)),
            None => Network::new(),
        };
        Ok(Self::with_transport(token, Arc::new(transport))
            .base_url(config.base_url.clone())
            .error_body_policy(config.error_bodies))
    }

    /// Point requests at another host (proxy, test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn error_body_policy(mut self, policy: ErrorBodyPolicy) -> Self {
        self.error_bodies = policy;
        self
    }

    /// Run one request against `endpoint` and decode the reply as `T`.
    pub async fn perform<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: Option<&dyn RequestBody>,
    ) -> Result<T, ServiceError> {
        let auth = AuthContext::with_base_url(&self.token, self.base_url.as_str());

        tracing::debug!(path = %endpoint.path(), "preparing request");
        let request = self.transport.prepare_request(&auth, endpoint, body)?;

        tracing::debug!(path = %endpoint.path(), "making request");
        let bytes = match self.transport.send(request).await {
            Ok(bytes) => bytes,
            Err(NetworkError::UnexpectedStatus { code, body }) => {
                return Err(self.status_error(code, body));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(bytes = bytes.len(), "decoding response");
        resolve::<T>(&bytes).into_result()
    }

    /// Map a non-2xx reply according to the configured body policy.
    fn status_error(&self, code: u16, body: Vec<u8>) -> ServiceError {
        match self.error_bodies {
            ErrorBodyPolicy::Surface => match resolve::decode_error_envelope(&body) {
                Ok(envelope) => {
                    tracing::debug!(code, kind = %envelope.error.kind, "api error envelope on error status");
                    ServiceError::Api(envelope)
                }
                Err(_) => NetworkError::UnexpectedStatus { code, body }.into(),
            },
            ErrorBodyPolicy::Discard => NetworkError::UnexpectedStatus {
                code,
                body: Vec::new(),
            }
            .into(),
        }
    }
}

impl fmt::Debug for OpenAiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiService")
            .field("base_url", &self.base_url)
            .field("error_bodies", &self.error_bodies)
            .finish_non_exhaustive()
    }
}
