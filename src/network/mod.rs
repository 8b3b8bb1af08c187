//! Wire-level request construction and dispatch.
//!
//! - `endpoint`: logical operation → path/method
//! - `auth`: credential → base URL + headers
//! - `request`: endpoint + auth + body → [`TransportRequest`]
//! - `transport`: reqwest-backed [`Network`]

mod auth;
mod endpoint;
mod request;
mod transport;

pub use auth::AuthContext;
pub use endpoint::{Endpoint, HttpMethod, DEFAULT_BASE_URL};
pub use request::{build_request, RequestBody, TransportRequest};
pub use transport::Network;

use crate::error::NetworkError;
use async_trait::async_trait;

/// Build-and-send capability used by the service layer.
///
/// `prepare_request` defaults to [`build_request`], so test doubles usually
/// only provide `send`.
#[async_trait]
pub trait Transport: Send + Sync {
    fn prepare_request(
        &self,
        auth: &AuthContext,
        endpoint: &Endpoint,
        body: Option<&dyn RequestBody>,
    ) -> Result<TransportRequest, NetworkError> {
        build_request(auth, endpoint, body)
    }

    /// Send `request` and return the body of a `2xx` response.
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>, NetworkError>;
}
