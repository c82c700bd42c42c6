//! Configured Messages API client.

use super::messages;
use super::AnalysisClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{Message, MessagesRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Client for the Anthropic Messages API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    version: String,
}

impl ApiClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            version: config.version.clone(),
        }
    }

    /// Send `prompt` as the single user message and return the reply text.
    pub async fn analyze(&self, prompt: &str) -> Result<String, ApiError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user(prompt)],
        };
        messages::request(
            &self.http,
            &self.base_url,
            &self.api_key,
            &self.version,
            &request,
        )
        .await
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
impl AnalysisClient for ApiClient {
    async fn analyze(&self, prompt: &str) -> Result<String, ApiError> {
        ApiClient::analyze(self, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request_buf = vec![0u8; 16 * 1024];
            let mut received = Vec::new();
            // Read until the declared body has fully arrived.
            loop {
                let n = stream.read(&mut request_buf).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&request_buf[..n]);
                if request_complete(&received) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            String::from_utf8_lossy(&received).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        body.len() >= length
    }

    fn api_for(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            api_key: "test-key".to_string(),
            model: "dummy-model".to_string(),
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn returns_first_text_block_and_sends_headers() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"id":"msg_1","type":"message","role":"assistant","content":[{"type":"text","text":"Core emotion: Fear"}],"stop_reason":"end_turn"}"#,
        )
        .await;
        let client = ApiClient::new(&api_for(base_url), Duration::from_secs(3));
        let text = client.analyze("analyze this").await.expect("success");
        assert_eq!(text, "Core emotion: Fear");

        let raw = server.await.unwrap();
        let lower = raw.to_ascii_lowercase();
        assert!(lower.starts_with("post /v1/messages "), "request: {raw}");
        assert!(lower.contains("x-api-key: test-key"), "request: {raw}");
        assert!(lower.contains("anthropic-version: 2023-06-01"), "request: {raw}");
        assert!(raw.contains(r#""model":"dummy-model""#), "request: {raw}");
        assert!(raw.contains(r#""max_tokens":2000"#), "request: {raw}");
        assert!(raw.contains("analyze this"), "request: {raw}");
    }

    #[tokio::test]
    async fn maps_401_to_authentication() {
        let (base_url, _server) = serve_once(
            "401 Unauthorized",
            r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#,
        )
        .await;
        let client = ApiClient::new(&api_for(base_url), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("401 expected");
        assert!(matches!(err, ApiError::Authentication), "got: {err}");
    }

    #[tokio::test]
    async fn maps_429_to_rate_limited() {
        let (base_url, _server) = serve_once(
            "429 Too Many Requests",
            r#"{"type":"error","error":{"type":"rate_limit_error","message":"slow down"}}"#,
        )
        .await;
        let client = ApiClient::new(&api_for(base_url), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("429 expected");
        assert!(matches!(err, ApiError::RateLimited), "got: {err}");
    }

    #[tokio::test]
    async fn maps_other_status_with_service_message() {
        let (base_url, _server) = serve_once(
            "500 Internal Server Error",
            r#"{"type":"error","error":{"type":"api_error","message":"Internal server error"}}"#,
        )
        .await;
        let client = ApiClient::new(&api_for(base_url), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("500 expected");
        match err {
            ApiError::Status { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "Internal server error");
            }
            other => panic!("expected status error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn truncated_error_body_is_a_connectivity_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0u8; 16 * 1024];
            let mut received = Vec::new();
            loop {
                let n = stream.read(&mut buf).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if request_complete(&received) {
                    break;
                }
            }
            // Promise more body than is sent, then hang up.
            let _ = stream
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 200\r\nConnection: close\r\n\r\n{\"type\":\"error\"",
                )
                .await;
        });

        let client = ApiClient::new(&api_for(format!("http://{addr}")), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("body read error expected");
        assert!(matches!(err, ApiError::Connectivity(_)), "got: {err}");
    }

    #[tokio::test]
    async fn empty_content_is_an_invalid_response() {
        let (base_url, _server) = serve_once("200 OK", r#"{"id":"msg_2","content":[]}"#).await;
        let client = ApiClient::new(&api_for(base_url), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("no text expected");
        assert!(matches!(err, ApiError::InvalidResponse(_)), "got: {err}");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connectivity_failure() {
        // Bind then drop to obtain a local port with no listener.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&api_for(format!("http://{addr}")), Duration::from_secs(3));
        let err = client.analyze("hi").await.expect_err("connect error expected");
        assert!(matches!(err, ApiError::Connectivity(_)), "got: {err}");
    }

    #[tokio::test]
    async fn stalled_server_hits_the_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and keep it open so the client must time out.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = ApiClient::new(
            &api_for(format!("http://{addr}")),
            Duration::from_millis(50),
        );
        let err = client.analyze("hi").await.expect_err("timeout expected");
        match err {
            ApiError::Connectivity(inner) => {
                assert!(inner.is_timeout(), "unexpected error: {inner}");
            }
            other => panic!("expected timeout connectivity error, got: {other}"),
        }
    }
}
