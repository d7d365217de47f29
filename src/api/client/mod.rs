//! API client for OpenAI-compatible chat transports.
//!
//! HTTP client construction lives in `transport`; the request wire format
//! lives in `api::completions`.

mod transport;

use super::completions;
use super::ModelClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use std::time::Duration;

/// Client for OpenAI-compatible chat completion APIs.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig, timeout: Duration) -> Self {
        Self {
            http: transport::build_http_client(timeout),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
        }
    }

    /// Send a chat completion request and return the parsed response.
    ///
    /// The request is sent once; failures are returned to the caller as-is.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        // Only add auth for non-empty keys (local models like Ollama skip this).
        let bearer = (!self.api_key.is_empty()).then_some(self.api_key.as_str());
        completions::request(&self.http, &self.base_url, request, bearer).await
    }
}

#[async_trait]
impl ModelClient for ApiClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        ApiClient::chat(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Message, ResponseFormat};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn test_request(model: &str) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![Message::user("hello")],
            response_format: Some(ResponseFormat::JsonObject),
            temperature: None,
        }
    }

    fn test_api(addr: std::net::SocketAddr) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://{addr}/"),
            api_key: "test-key".to_string(),
            model: "dummy-model".to_string(),
            ..ApiConfig::default()
        }
    }

    /// Serve one HTTP response and hand back the raw request text.
    fn serve_once(
        listener: TcpListener,
        response: String,
    ) -> tokio::task::JoinHandle<String> {
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request_buf = vec![0u8; 16 * 1024];
            let read = stream.read(&mut request_buf).await.unwrap_or(0);
            let _ = stream.write_all(response.as_bytes()).await;
            String::from_utf8_lossy(&request_buf[..read]).into_owned()
        })
    }

    #[tokio::test]
    async fn api_client_respects_timeout_policy() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and intentionally keep it open so the client
        // must hit its configured timeout.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let api = test_api(addr);
        let client = ApiClient::new(&api, Duration::from_millis(50));
        let err = client
            .chat(&test_request(&api.model))
            .await
            .expect_err("timeout expected");
        match err {
            ApiError::Http(inner) => {
                assert!(inner.is_timeout(), "unexpected error: {inner}");
            }
            other => panic!("expected timeout Http error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn api_client_parses_success_and_sends_bearer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = r#"{"id":"ok","choices":[{"index":0,"message":{"role":"assistant","content":"{}"},"finish_reason":"stop"}]}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let server = serve_once(listener, response);

        let api = test_api(addr);
        let client = ApiClient::new(&api, Duration::from_secs(3));
        let response = client
            .chat(&test_request(&api.model))
            .await
            .expect("request should succeed");
        assert_eq!(response.first_content(), Some("{}"));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /chat/completions"), "got: {raw}");
        assert!(
            raw.to_ascii_lowercase()
                .contains("authorization: bearer test-key"),
            "missing auth header: {raw}"
        );
        assert!(raw.contains("\"json_object\""), "missing response_format: {raw}");
    }

    #[tokio::test]
    async fn api_client_reports_non_success_status_without_retry() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = concat!(
            "HTTP/1.1 429 Too Many Requests\r\n",
            "Content-Type: application/json\r\n",
            "Content-Length: 16\r\n",
            "Connection: close\r\n",
            "\r\n",
            "{\"error\":\"rate\"}"
        )
        .to_string();
        let _server = serve_once(listener, response);

        let api = test_api(addr);
        let client = ApiClient::new(&api, Duration::from_secs(3));
        let err = client
            .chat(&test_request(&api.model))
            .await
            .expect_err("status error expected");
        assert_eq!(err.status_code(), Some(429));
        assert!(err.to_string().contains("rate"), "got: {err}");
    }
}
