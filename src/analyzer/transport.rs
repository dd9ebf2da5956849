use crate::error::ErrorKind;
use crate::models::{ChatRequest, RawResponse};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Sends one chat-completion request and hands back whatever came back.
///
/// Non-2xx statuses are not errors at this level; only failing to get a
/// response at all is.
pub trait Transport: Send + Sync {
    fn send<'a>(
        &'a self,
        api_key: &'a str,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ErrorKind>> + Send + 'a>>;
}

#[derive(Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, api_key: &str, request: &ChatRequest) -> Result<RawResponse, ErrorKind> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ErrorKind::Transport {
                status: None,
                message: format!("Network error: {}", e),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ErrorKind::Transport {
            status: Some(status),
            message: format!("Failed to read response body: {}", e),
        })?;

        debug!(status, bytes = body.len(), endpoint = %self.endpoint, "chat completion response");

        Ok(RawResponse::new(status, body))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Transport for HttpTransport {
    fn send<'a>(
        &'a self,
        api_key: &'a str,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ErrorKind>> + Send + 'a>> {
        Box::pin(self.post(api_key, request))
    }
}
