//! Logical API operations and their fixed paths/methods.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;
use std::fmt;

/// Host every endpoint is served from.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Characters escaped in a model id so it stays a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One logical API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Completions,
    Edits,
    Chat,
    Images,
    Embeddings,
    Models,
    /// Lookup of a single model by id.
    Model(String),
}

impl Endpoint {
    /// URL path for this operation, always starting with `/`.
    pub fn path(&self) -> Cow<'static, str> {
        match self {
            Self::Completions => Cow::Borrowed("/v1/completions"),
            Self::Edits => Cow::Borrowed("/v1/edits"),
            Self::Chat => Cow::Borrowed("/v1/chat/completions"),
            Self::Images => Cow::Borrowed("/v1/images/generations"),
            Self::Embeddings => Cow::Borrowed("/v1/embeddings"),
            Self::Models => Cow::Borrowed("/v1/models"),
            Self::Model(id) => Cow::Owned(format!(
                "/v1/models/{}",
                utf8_percent_encode(id, SEGMENT)
            )),
        }
    }

    /// GET for listing/lookup, POST for generative operations.
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Completions | Self::Edits | Self::Chat | Self::Images | Self::Embeddings => {
                HttpMethod::Post
            }
            Self::Models | Self::Model(_) => HttpMethod::Get,
        }
    }

    pub fn base_url(&self) -> &'static str {
        DEFAULT_BASE_URL
    }
}
