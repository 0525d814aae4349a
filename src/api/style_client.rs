use super::transport::HttpTransport;
use crate::{
    error::{ClientError, Result},
    models::StyleOption,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct StyleClient {
    transport: Arc<dyn HttpTransport>,
    url: String,
}

impl StyleClient {
    pub fn new(transport: Arc<dyn HttpTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the catalog, preserving its order.
    pub async fn fetch(&self) -> Result<Vec<StyleOption>> {
        log::info!("Loading style catalog from {}", self.url);

        let response = self.transport.get(&self.url).await?;
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                message: None,
            });
        }

        let styles: Vec<StyleOption> = response.json()?;
        log::debug!("Style catalog returned {} entries", styles.len());
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;

    const URL: &str = "http://styles.test/api";

    #[tokio::test]
    async fn test_fetch_parses_catalog() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_get(
            200,
            r#"[{"name":"DEFAULT","title":"Default"},{"name":"ANIME","title":"Anime"}]"#,
        );
        let client = StyleClient::new(transport.clone(), URL);

        let styles = client.fetch().await.unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].name, "DEFAULT");
        assert_eq!(styles[1].title, "Anime");
        assert_eq!(transport.gets(), vec![URL.to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_status_error() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_get(500, "Internal Server Error");
        let client = StyleClient::new(transport, URL);

        match client.fetch().await {
            Err(ClientError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_json() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_get(200, r#"{"name":"DEFAULT"}"#);
        let client = StyleClient::new(transport, URL);

        assert!(matches!(client.fetch().await, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_get_error("connection refused");
        let client = StyleClient::new(transport, URL);

        assert!(matches!(
            client.fetch().await,
            Err(ClientError::Transport(_))
        ));
    }
}
