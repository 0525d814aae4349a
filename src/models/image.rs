use crate::error::{ClientError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Body of the generation POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Empty means "no style".
    pub style: String,
}

impl GenerationRequest {
    /// Trims the prompt; `None` when nothing is left.
    pub fn from_form(prompt: &str, style: impl Into<String>) -> Option<Self> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        Some(Self {
            prompt: prompt.to_string(),
            style: style.into(),
        })
    }
}

/// Any JSON body the backend may answer with, success or error.
#[derive(Debug, Default, Deserialize)]
pub struct GenerationResponseBody {
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerationResponseBody {
    pub fn image(&self) -> Option<&str> {
        self.image_base64.as_deref().filter(|data| !data.is_empty())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub base64: String,
}

impl GeneratedImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.base64)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.base64.as_bytes())
            .map_err(|e| ClientError::Decode(format!("invalid base64 image: {}", e)))
    }

    /// Writes the decoded JPEG bytes to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.decode()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
