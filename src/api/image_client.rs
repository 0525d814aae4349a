use super::transport::HttpTransport;
use crate::{
    error::{ClientError, Result},
    models::{GeneratedImage, GenerationRequest, GenerationResponseBody},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ImageClient {
    transport: Arc<dyn HttpTransport>,
    url: String,
}

impl ImageClient {
    pub fn new(transport: Arc<dyn HttpTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ClientError::Decode(format!("failed to encode request: {}", e)))?;

        log::info!(
            "Requesting image generation (style: {})",
            if request.style.is_empty() {
                "none"
            } else {
                request.style.as_str()
            }
        );
        log::debug!("Generation request payload: {}", payload);

        let response = self.transport.post_json(&self.url, &payload).await?;

        if !response.is_success() {
            // The body is only a hint here; a non-JSON error page still
            // yields a status error.
            let message = response
                .json::<GenerationResponseBody>()
                .ok()
                .and_then(|body| body.error_message().map(String::from));
            return Err(ClientError::Status {
                status: response.status,
                message,
            });
        }

        let body: GenerationResponseBody = response.json()?;
        match body.image() {
            Some(data) => {
                log::debug!("Received image payload of {} characters", data.len());
                Ok(GeneratedImage::new(data))
            }
            None => Err(ClientError::MissingImage {
                message: body.error_message().map(String::from),
            }),
        }
    }
}
