use crate::error::{ClientError, Result};
use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5001/api/generate";
pub const DEFAULT_STYLES_URL: &str = "https://cdn.fusionbrain.ai/static/styles/api";

/// Every string the controller puts in front of the user.
#[derive(Debug, Clone, PartialEq)]
pub struct UiText {
    pub no_style_label: String,
    pub styles_failed: String,
    pub empty_prompt: String,
    pub trigger_idle: String,
    pub trigger_busy: String,
    pub loading_status: String,
    pub pending_placeholder: String,
    pub failed_placeholder: String,
    pub error_prefix: String,
    /// `{status}` is replaced with the numeric HTTP status.
    pub server_error: String,
    pub missing_image: String,
}

impl Default for UiText {
    fn default() -> Self {
        Self::english()
    }
}

impl UiText {
    pub fn english() -> Self {
        Self {
            no_style_label: "Standard".to_string(),
            styles_failed: "Failed to load the style list.".to_string(),
            empty_prompt: "Please enter a text prompt.".to_string(),
            trigger_idle: "Generate".to_string(),
            trigger_busy: "Generating...".to_string(),
            loading_status:
                "Fetching the model and sending the request... This may take up to a minute."
                    .to_string(),
            pending_placeholder: "Your image will appear here...".to_string(),
            failed_placeholder: "Failed to generate the image.".to_string(),
            error_prefix: "Error".to_string(),
            server_error: "Server error: {status}".to_string(),
            missing_image: "Failed to get the image.".to_string(),
        }
    }

    pub fn russian() -> Self {
        Self {
            no_style_label: "Стандартный".to_string(),
            styles_failed: "Не удалось загрузить список стилей.".to_string(),
            empty_prompt: "Пожалуйста, введите текстовый запрос.".to_string(),
            trigger_idle: "Сгенерировать".to_string(),
            trigger_busy: "Генерация...".to_string(),
            loading_status:
                "Получаем модель, отправляем запрос... Это может занять до минуты.".to_string(),
            pending_placeholder: "Здесь появится ваше изображение...".to_string(),
            failed_placeholder: "Не удалось сгенерировать изображение.".to_string(),
            error_prefix: "Ошибка".to_string(),
            server_error: "Ошибка сервера: {status}".to_string(),
            missing_image: "Не удалось получить изображение.".to_string(),
        }
    }

    /// Picks a preset from a language tag such as `ru` or `en-US`.
    pub fn for_language(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().split(['-', '_']).next() {
            Some("ru") => Self::russian(),
            _ => Self::english(),
        }
    }

    pub fn server_error(&self, status: u16) -> String {
        self.server_error.replace("{status}", &status.to_string())
    }

    pub fn failure_status(&self, detail: &str) -> String {
        format!("{}: {}", self.error_prefix, detail)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
    pub styles_url: String,
    pub text: UiText,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            styles_url: DEFAULT_STYLES_URL.to_string(),
            text: UiText::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `BACKEND_URL`, `STYLES_URL` and `UI_LANGUAGE`, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backend_url = env::var("BACKEND_URL").unwrap_or(defaults.backend_url);
        let styles_url = env::var("STYLES_URL").unwrap_or(defaults.styles_url);
        let text = env::var("UI_LANGUAGE")
            .map(|tag| UiText::for_language(&tag))
            .unwrap_or(defaults.text);

        ClientConfig {
            backend_url,
            styles_url,
            text,
        }
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn with_styles_url(mut self, url: impl Into<String>) -> Self {
        self.styles_url = url.into();
        self
    }

    pub fn with_text(mut self, text: UiText) -> Self {
        self.text = text;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            return Err(ClientError::Config("backend URL is required".into()));
        }
        if self.styles_url.trim().is_empty() {
            return Err(ClientError::Config("styles URL is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.styles_url, DEFAULT_STYLES_URL);
        assert_eq!(config.text, UiText::english());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validation() {
        let config = ClientConfig::new()
            .with_backend_url("http://localhost:9000/gen")
            .with_styles_url("  ");
        assert_eq!(config.backend_url, "http://localhost:9000/gen");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_language_selection() {
        assert_eq!(UiText::for_language("ru"), UiText::russian());
        assert_eq!(UiText::for_language("RU_ru"), UiText::russian());
        assert_eq!(UiText::for_language("en-US"), UiText::english());
        assert_eq!(UiText::for_language(""), UiText::english());
    }

    #[test]
    fn test_status_formatting() {
        let text = UiText::english();
        assert_eq!(text.server_error(500), "Server error: 500");
        assert_eq!(text.failure_status("bad prompt"), "Error: bad prompt");
    }
}
