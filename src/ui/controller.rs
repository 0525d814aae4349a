use super::loading::LoadingState;
use crate::{
    api::ApiClient,
    config::{ClientConfig, UiText},
    dom::{ImageNode, Node, Page},
    error::{ClientError, Result},
    logger,
    models::{style_select_options, GeneratedImage, GenerationRequest},
};
use uuid::Uuid;

/// What `load_styles` ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesOutcome {
    /// Catalog loaded with this many styles.
    Loaded(usize),
    /// Only the default option is available.
    Fallback,
}

/// What one activation of the trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Blank prompt; the user was alerted and nothing was sent.
    Rejected,
    Displayed,
    /// The detail shown after the error prefix in the status line.
    Failed(String),
}

/// Drives one page: loads the style catalog and turns trigger activations
/// into generation requests.
///
/// Neither operation returns an error. Every failure ends in the page's
/// status line and result area.
pub struct UiController {
    api: ApiClient,
    page: Page,
    text: UiText,
    loading: LoadingState,
}

impl UiController {
    pub fn new(config: &ClientConfig, page: Page) -> Result<Self> {
        let api = ApiClient::new(config)?;
        Ok(Self::with_api(api, config.text.clone(), page))
    }

    pub fn with_api(api: ApiClient, text: UiText, page: Page) -> Self {
        Self {
            api,
            page,
            text,
            loading: LoadingState::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn text(&self) -> &UiText {
        &self.text
    }

    /// Populates the style select. Called once at startup.
    pub async fn load_styles(&mut self) -> StylesOutcome {
        let result = self.api.styles().fetch().await;
        match result {
            Ok(styles) => {
                let options = style_select_options(&self.text.no_style_label, &styles);
                self.page.style_select.replace_options(options);
                log::info!("Loaded {} styles", styles.len());
                StylesOutcome::Loaded(styles.len())
            }
            Err(e) => {
                log::error!("Failed to load styles: {}", e);
                let options = style_select_options(&self.text.no_style_label, &[]);
                self.page.style_select.replace_options(options);
                self.page.status.set_text(&self.text.styles_failed);
                StylesOutcome::Fallback
            }
        }
    }

    /// Handles one activation of the trigger.
    ///
    /// Dropping the returned future mid-request still leaves the page idle.
    pub async fn generate(&mut self) -> TriggerOutcome {
        let style = self.page.style_select.value();
        let request = match GenerationRequest::from_form(&self.page.prompt.value(), style) {
            Some(request) => request,
            None => {
                self.page.dialog.alert(&self.text.empty_prompt);
                return TriggerOutcome::Rejected;
            }
        };

        let request_id = Uuid::new_v4();
        let _timer = logger::timer(&format!("generation [req:{}]", request_id));
        log::info!("Generating image [req:{}]", request_id);

        let mut loading = self.loading.begin(&mut self.page, &self.text);

        let result = self.api.images().generate(&request).await;
        let outcome = match result {
            Ok(image) => {
                show_image(loading.page(), image, &request.prompt);
                TriggerOutcome::Displayed
            }
            Err(e) => {
                log::error!("Image generation failed [req:{}]: {}", request_id, e);
                show_failure(loading.page(), &self.text);
                TriggerOutcome::Failed(failure_detail(&self.text, &e))
            }
        };

        loading.finish();

        // Written after the exit so that clearing the advisory does not wipe it.
        if let TriggerOutcome::Failed(detail) = &outcome {
            self.page.status.set_text(&self.text.failure_status(detail));
        }

        outcome
    }
}

fn show_image(page: &mut Page, image: GeneratedImage, prompt: &str) {
    page.result.clear();
    page.result.append(Node::Image(ImageNode {
        image,
        alt: prompt.to_string(),
    }));
}

fn show_failure(page: &mut Page, text: &UiText) {
    page.result.clear();
    page.result.append(Node::Placeholder(text.failed_placeholder.clone()));
}

/// Maps every generation failure to the detail shown after the error prefix.
fn failure_detail(text: &UiText, error: &ClientError) -> String {
    match error {
        ClientError::Status { status, message } => message
            .clone()
            .unwrap_or_else(|| text.server_error(*status)),
        ClientError::MissingImage { message } => message
            .clone()
            .unwrap_or_else(|| text.missing_image.clone()),
        ClientError::Transport(message) | ClientError::Decode(message) => message.clone(),
        other => other.to_string(),
    }
}
