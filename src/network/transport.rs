//! reqwest-backed transport.

use super::request::TransportRequest;
use super::Transport;
use crate::error::NetworkError;
use async_trait::async_trait;
use std::time::Duration;

/// Sends requests with a shared `reqwest::Client`.
///
/// The client's connection pool is the only state shared between calls.
#[derive(Debug, Clone, Default)]
pub struct Network {
    http: reqwest::Client,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_client(build_http_client(timeout))
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[async_trait]
impl Transport for Network {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>, NetworkError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self.http.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(error = %err, "request failed");
            NetworkError::Transport(err)
        })?;
        let status = response.status().as_u16();
        tracing::debug!(status, "response received");

        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) if (200..300).contains(&status) => {
                tracing::warn!(error = %err, "response body read failed");
                return Err(NetworkError::Transport(err));
            }
            // The status is already known to be an error; report it without a body.
            Err(err) => {
                tracing::warn!(status, error = %err, "error body read failed");
                Vec::new()
            }
        };
        check_status(status, body)
    }
}

/// Pass `body` through for `200..300`, otherwise report the status.
pub(crate) fn check_status(code: u16, body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
    if (200..300).contains(&code) {
        tracing::trace!(code, "status validated");
        return Ok(body);
    }
    tracing::warn!(code, "unexpected status");
    Err(NetworkError::UnexpectedStatus { code, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{build_request, AuthContext, Endpoint};
    use crate::testsupport::{spawn_one_shot_server, CannedResponse};
    use crate::types::{ChatMessage, ChatRequest};
    use tokio::io::AsyncWriteExt;

    #[test]
    fn success_range_boundaries() {
        assert_eq!(check_status(200, b"a".to_vec()).unwrap(), b"a");
        assert_eq!(check_status(299, b"b".to_vec()).unwrap(), b"b");
        for code in [199, 300, 404, 500] {
            let err = check_status(code, b"body".to_vec()).unwrap_err();
            assert_eq!(err.status_code(), Some(code));
        }
    }

    #[tokio::test]
    async fn send_returns_body_unmodified_and_sends_headers() {
        let body = r#"{"object":"list","data":[]}"#;
        let server = spawn_one_shot_server(CannedResponse::json(200, body)).await;
        let auth = AuthContext::with_base_url("sk-test", server.base_url());
        let chat = ChatRequest::new("gpt-4", vec![ChatMessage::user("hi")]);
        let request = build_request(&auth, &Endpoint::Chat, Some(&chat)).unwrap();

        let bytes = Network::new().send(request).await.unwrap();
        assert_eq!(bytes, body.as_bytes());

        let raw = server.captured_request().await;
        assert!(raw.starts_with("POST /v1/chat/completions HTTP/1.1"), "raw: {raw}");
        assert!(
            raw.to_ascii_lowercase().contains("authorization: bearer sk-test"),
            "raw: {raw}"
        );
        assert!(raw.contains(r#""model":"gpt-4""#), "raw: {raw}");
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_body() {
        let server = spawn_one_shot_server(CannedResponse::json(500, "{}")).await;
        let auth = AuthContext::with_base_url("k", server.base_url());
        let request = build_request(&auth, &Endpoint::Models, None).unwrap();

        let err = Network::new().send(request).await.unwrap_err();
        match err {
            NetworkError::UnexpectedStatus { code, body } => {
                assert_eq!(code, 500);
                assert_eq!(body, b"{}");
            }
            other => panic!("expected UnexpectedStatus, got: {other}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let auth = AuthContext::with_base_url("k", format!("http://{addr}"));
        let request = build_request(&auth, &Endpoint::Models, None).unwrap();
        let err = Network::new().send(request).await.unwrap_err();
        assert!(matches!(err, NetworkError::Transport(_)), "got: {err}");
    }

    #[tokio::test]
    async fn stalled_server_hits_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and keep it open so the client must time out.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let auth = AuthContext::with_base_url("k", format!("http://{addr}"));
        let request = build_request(&auth, &Endpoint::Models, None).unwrap();
        let err = Network::with_timeout(Duration::from_millis(50))
            .send(request)
            .await
            .unwrap_err();
        match err {
            NetworkError::Transport(inner) => assert!(inner.is_timeout(), "unexpected: {inner}"),
            other => panic!("expected timeout, got: {other}"),
        }
    }

    /// Serve a status line and headers announcing 100 body bytes, send five, then stall.
    async fn spawn_truncated_body_server(status: u16) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let head = format!("HTTP/1.1 {status} X\r\ncontent-length: 100\r\n\r\n{{\"id\"");
            stream.write_all(head.as_bytes()).await.expect("write");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn body_stall_after_success_status_is_transport_timeout() {
        let base_url = spawn_truncated_body_server(200).await;
        let auth = AuthContext::with_base_url("k", base_url);
        let request = build_request(&auth, &Endpoint::Models, None).unwrap();

        let err = Network::with_timeout(Duration::from_millis(200))
            .send(request)
            .await
            .unwrap_err();
        match err {
            NetworkError::Transport(inner) => assert!(inner.is_timeout(), "unexpected: {inner}"),
            other => panic!("expected transport timeout, got: {other}"),
        }
    }

    #[tokio::test]
    async fn body_stall_after_error_status_keeps_status() {
        let base_url = spawn_truncated_body_server(503).await;
        let auth = AuthContext::with_base_url("k", base_url);
        let request = build_request(&auth, &Endpoint::Models, None).unwrap();

        let err = Network::with_timeout(Duration::from_millis(200))
            .send(request)
            .await
            .unwrap_err();
        match err {
            NetworkError::UnexpectedStatus { code, body } => {
                assert_eq!(code, 503);
                assert!(body.is_empty());
            }
            other => panic!("expected UnexpectedStatus, got: {other}"),
        }
    }
}
