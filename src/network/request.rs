//! Builds wire-level requests from an auth context, endpoint and body.

use super::auth::{AuthContext, RedactedHeaders};
use super::endpoint::{Endpoint, HttpMethod};
use crate::error::NetworkError;
use reqwest::Url;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Object-safe view of a serializable request body.
///
/// Blanket-implemented for every `Serialize + Sync` type so request bodies can
/// cross the `dyn Transport` boundary.
pub trait RequestBody: Sync {
    fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error>;
}

impl<T: Serialize + Sync> RequestBody for T {
    fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// A fully resolved request ready for the transport.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("url", &self.url.as_str())
            .field("method", &self.method)
            .field("headers", &RedactedHeaders(&self.headers))
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Combine `auth` and `endpoint` (and an optional JSON body) into a request.
///
/// The endpoint path replaces whatever path the base URL carries; it is not
/// appended. A path that would not reach the server verbatim is rejected.
pub fn build_request(
    auth: &AuthContext,
    endpoint: &Endpoint,
    body: Option<&dyn RequestBody>,
) -> Result<TransportRequest, NetworkError> {
    let mut url = Url::parse(auth.base_url())
        .map_err(|_| NetworkError::InvalidBaseUrl(auth.base_url().to_string()))?;

    let path = endpoint.path();
    if url.cannot_be_a_base() {
        return Err(NetworkError::InvalidPath(path.into_owned()));
    }
    url.set_path(&path);
    // A `.` or `..` model id is a dot segment and gets normalized away.
    if url.path() != path {
        return Err(NetworkError::InvalidPath(path.into_owned()));
    }

    let body = body
        .map(|body| body.to_json_bytes())
        .transpose()
        .map_err(NetworkError::BodySerialization)?;

    let request = TransportRequest {
        url,
        method: endpoint.method(),
        headers: auth.headers().clone(),
        body,
    };
    tracing::debug!(
        method = %request.method,
        url = %request.url,
        body_len = request.body.as_ref().map_or(0, Vec::len),
        "request prepared"
    );
    Ok(request)
}
