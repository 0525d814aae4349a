//! Prompt-to-image client.
//!
//! [`UiController`] loads a style catalog into a select control, turns a
//! prompt into one generation request, and renders the returned image or an
//! error into page elements it is handed at construction.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod logger;
pub mod models;
pub mod ui;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, HttpResponse, HttpTransport, ImageClient, ReqwestTransport, StyleClient};
pub use config::{ClientConfig, UiText};
pub use dom::{MemoryPage, Node, Page, PageState};
pub use error::{ClientError, Result};
pub use models::{GeneratedImage, GenerationRequest, SelectOption, StyleOption};
pub use ui::{StylesOutcome, TriggerOutcome, UiController};
