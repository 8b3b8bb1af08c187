//! Per-credential base URL and header set.

use super::endpoint::DEFAULT_BASE_URL;
use std::collections::BTreeMap;
use std::fmt;

pub(crate) const AUTHORIZATION: &str = "Authorization";
pub(crate) const CONTENT_TYPE: &str = "content-type";

/// Base URL plus the headers every request carries.
///
/// Built fresh for each call and never mutated afterwards. `Debug` output
/// redacts the bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    base_url: String,
    headers: BTreeMap<String, String>,
}

impl AuthContext {
    /// Auth context against the default API host.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Auth context against an alternate host (proxies, local test servers).
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
        Self {
            base_url: base_url.into(),
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("base_url", &self.base_url)
            .field("headers", &RedactedHeaders(&self.headers))
            .finish()
    }
}

/// Debug view of a header map with credentials masked.
pub(crate) struct RedactedHeaders<'a>(pub(crate) &'a BTreeMap<String, String>);

impl fmt::Debug for RedactedHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.0 {
            if key.eq_ignore_ascii_case(AUTHORIZATION) {
                map.entry(key, &"Bearer <redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}
