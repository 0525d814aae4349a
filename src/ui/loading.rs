use crate::{config::UiText, dom::Node, dom::Page};

/// Busy flag for the one request a page can have in flight.
///
/// The trigger is interactive exactly when this is not loading. `enter` and
/// `exit` must alternate; an unpaired call is ignored. [`LoadingState::begin`]
/// pairs them through a guard, so the exit also runs when the work in between
/// is abandoned.
#[derive(Debug, Default)]
pub struct LoadingState {
    loading: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Enters the loading state until the returned guard is dropped.
    pub fn begin<'a>(
        &'a mut self,
        page: &'a mut Page,
        text: &'a UiText,
    ) -> LoadingGuard<'a> {
        self.enter(page, text);
        LoadingGuard {
            state: self,
            page,
            text,
        }
    }

    /// Returns false, touching nothing, if already loading.
    pub fn enter(&mut self, page: &mut Page, text: &UiText) -> bool {
        if self.loading {
            log::warn!("Loading state entered twice; ignoring");
            return false;
        }
        self.loading = true;

        page.trigger.set_disabled(true);
        page.trigger.set_label(&text.trigger_busy);
        page.loader.set_visible(true);
        page.status.set_text(&text.loading_status);
        page.result.replace_with(Node::Placeholder(text.pending_placeholder.clone()));
        true
    }

    /// Returns false, touching nothing, if not loading.
    pub fn exit(&mut self, page: &mut Page, text: &UiText) -> bool {
        if !self.loading {
            log::warn!("Loading state exited while idle; ignoring");
            return false;
        }
        self.loading = false;

        page.trigger.set_disabled(false);
        page.trigger.set_label(&text.trigger_idle);
        page.loader.set_visible(false);
        page.status.set_text("");
        true
    }
}

/// Holds the page in the loading state; exits it on drop.
pub struct LoadingGuard<'a> {
    state: &'a mut LoadingState,
    page: &'a mut Page,
    text: &'a UiText,
}

impl LoadingGuard<'_> {
    pub fn page(&mut self) -> &mut Page {
        self.page
    }

    pub fn finish(self) {}
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.exit(self.page, self.text);
    }
}
