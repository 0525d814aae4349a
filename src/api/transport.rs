use crate::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// The only way the crate talks to the network. Any status code is a
/// successful exchange here; only failing to get a response is an error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read body: {}", e)))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        log::debug!("POST {}", url);
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}
