pub mod image_client;
pub mod style_client;
pub mod transport;

use crate::{config::ClientConfig, error::Result};
use std::sync::Arc;

pub use image_client::ImageClient;
pub use style_client::StyleClient;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Both backend-facing clients sharing one transport.
#[derive(Clone)]
pub struct ApiClient {
    style_client: StyleClient,
    image_client: ImageClient,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            style_client: StyleClient::new(transport.clone(), config.styles_url.clone()),
            image_client: ImageClient::new(transport, config.backend_url.clone()),
        })
    }

    pub fn styles(&self) -> &StyleClient {
        &self.style_client
    }

    pub fn images(&self) -> &ImageClient {
        &self.image_client
    }
}
