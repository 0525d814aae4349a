//! Page-element seams.
//!
//! The controller never touches a concrete UI. It is handed one boxed handle
//! per element it drives: the prompt field, the style select, the trigger
//! button, the loading indicator, the status line, the result area, and a
//! dialog for blocking alerts. A browser build implements these over DOM
//! nodes; [`memory::MemoryPage`] implements them over plain state for tests
//! and the command-line driver.

pub mod memory;

use crate::models::{GeneratedImage, SelectOption};

pub use memory::{MemoryPage, PageState};

pub trait InputElement {
    fn value(&self) -> String;
}

pub trait SelectElement {
    /// Replaces every option. The selection moves to the first new option.
    fn replace_options(&mut self, options: Vec<SelectOption>);
    fn value(&self) -> String;
}

pub trait ButtonElement {
    fn set_disabled(&mut self, disabled: bool);
    fn set_label(&mut self, label: &str);
}

pub trait IndicatorElement {
    fn set_visible(&mut self, visible: bool);
}

pub trait TextElement {
    fn set_text(&mut self, text: &str);
}

pub trait ContainerElement {
    fn clear(&mut self);
    fn append(&mut self, node: Node);

    fn replace_with(&mut self, node: Node) {
        self.clear();
        self.append(node);
    }
}

pub trait Dialog {
    /// Blocking notice the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Content the result area can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Styled placeholder paragraph.
    Placeholder(String),
    Image(ImageNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub image: GeneratedImage,
    /// Accessible label.
    pub alt: String,
}

impl ImageNode {
    pub fn src(&self) -> String {
        self.image.data_uri()
    }
}

/// The element handles a controller is constructed with.
pub struct Page {
    pub prompt: Box<dyn InputElement>,
    pub style_select: Box<dyn SelectElement>,
    pub trigger: Box<dyn ButtonElement>,
    pub loader: Box<dyn IndicatorElement>,
    pub status: Box<dyn TextElement>,
    pub result: Box<dyn ContainerElement>,
    pub dialog: Box<dyn Dialog>,
}
