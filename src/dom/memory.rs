use super::{
    ButtonElement, ContainerElement, Dialog, IndicatorElement, InputElement, Node, Page,
    SelectElement, TextElement,
};
use crate::models::SelectOption;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything an observer of the page can see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub prompt: String,
    pub style_options: Vec<SelectOption>,
    pub selected_style: String,
    pub trigger_disabled: bool,
    pub trigger_label: String,
    pub loader_visible: bool,
    pub status: String,
    pub result: Vec<Node>,
    pub alerts: Vec<String>,
    /// How many times the option list was replaced.
    pub option_loads: usize,
}

/// A page that lives in memory. Element handles handed out by
/// [`MemoryPage::page`] share state with it.
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    /// A fresh page as it would be served: idle trigger with `trigger_label`,
    /// a single "no style" option, hidden loader, empty result area.
    pub fn new(trigger_label: &str, no_style_label: &str) -> Self {
        let state = PageState {
            style_options: vec![SelectOption::no_style(no_style_label)],
            trigger_label: trigger_label.to_string(),
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn page(&self) -> Page {
        Page {
            prompt: Box::new(PromptField(self.state.clone())),
            style_select: Box::new(StyleSelect(self.state.clone())),
            trigger: Box::new(TriggerButton(self.state.clone())),
            loader: Box::new(Loader(self.state.clone())),
            status: Box::new(StatusLine(self.state.clone())),
            result: Box::new(ResultArea(self.state.clone())),
            dialog: Box::new(AlertLog(self.state.clone())),
        }
    }

    pub fn type_prompt(&self, text: &str) {
        self.state.borrow_mut().prompt = text.to_string();
    }

    /// Selects the option with `value`. Returns false if there is none.
    pub fn select_style(&self, value: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.style_options.iter().any(|option| option.value == value) {
            state.selected_style = value.to_string();
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }
}

struct PromptField(Rc<RefCell<PageState>>);

impl InputElement for PromptField {
    fn value(&self) -> String {
        self.0.borrow().prompt.clone()
    }
}

struct StyleSelect(Rc<RefCell<PageState>>);

impl SelectElement for StyleSelect {
    fn replace_options(&mut self, options: Vec<SelectOption>) {
        let mut state = self.0.borrow_mut();
        state.selected_style = options
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default();
        state.style_options = options;
        state.option_loads += 1;
    }

    fn value(&self) -> String {
        self.0.borrow().selected_style.clone()
    }
}

struct TriggerButton(Rc<RefCell<PageState>>);

impl ButtonElement for TriggerButton {
    fn set_disabled(&mut self, disabled: bool) {
        self.0.borrow_mut().trigger_disabled = disabled;
    }

    fn set_label(&mut self, label: &str) {
        self.0.borrow_mut().trigger_label = label.to_string();
    }
}

struct Loader(Rc<RefCell<PageState>>);

impl IndicatorElement for Loader {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().loader_visible = visible;
    }
}

struct StatusLine(Rc<RefCell<PageState>>);

impl TextElement for StatusLine {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().status = text.to_string();
    }
}

struct ResultArea(Rc<RefCell<PageState>>);

impl ContainerElement for ResultArea {
    fn clear(&mut self) {
        self.0.borrow_mut().result.clear();
    }

    fn append(&mut self, node: Node) {
        self.0.borrow_mut().result.push(node);
    }
}

struct AlertLog(Rc<RefCell<PageState>>);

impl Dialog for AlertLog {
    fn alert(&mut self, message: &str) {
        log::warn!("Alert: {}", message);
        self.0.borrow_mut().alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_page() {
        let memory = MemoryPage::new("Generate", "Standard");
        let state = memory.snapshot();
        assert_eq!(state.style_options, vec![SelectOption::no_style("Standard")]);
        assert_eq!(state.selected_style, "");
        assert_eq!(state.trigger_label, "Generate");
        assert!(!state.trigger_disabled);
        assert!(state.result.is_empty());
    }

    #[test]
    fn test_handles_share_state() {
        let memory = MemoryPage::new("Generate", "Standard");
        let mut page = memory.page();

        memory.type_prompt("a cat");
        assert_eq!(page.prompt.value(), "a cat");

        page.status.set_text("working");
        page.result.replace_with(Node::Placeholder("pending".into()));
        page.result.replace_with(Node::Placeholder("done".into()));
        let state = memory.snapshot();
        assert_eq!(state.status, "working");
        assert_eq!(state.result, vec![Node::Placeholder("done".into())]);
    }

    #[test]
    fn test_select_resets_on_replace() {
        let memory = MemoryPage::new("Generate", "Standard");
        let mut page = memory.page();
        page.style_select.replace_options(vec![
            SelectOption::no_style("Standard"),
            SelectOption::new("ANIME", "Anime"),
        ]);

        assert!(memory.select_style("ANIME"));
        assert!(!memory.select_style("MISSING"));
        assert_eq!(page.style_select.value(), "ANIME");

        page.style_select.replace_options(vec![SelectOption::no_style("Standard")]);
        assert_eq!(page.style_select.value(), "");
        assert_eq!(memory.snapshot().option_loads, 2);
    }
}
