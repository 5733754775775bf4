//! Per-instance page state.

use crate::browser::{Browser, ResourceHandle};

/// MIME type the page source is exposed as.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Source of the page currently on screen, plus its openable resource.
///
/// Written only by the capture hook; read by row actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub raw_markdown: String,
    pub resource: Option<ResourceHandle>,
}

impl PageSnapshot {
    /// Swap in a new page. The old handle is revoked before the new one is
    /// created, so at most one handle is ever outstanding.
    pub fn replace(&mut self, browser: &dyn Browser, markdown: &str) {
        self.release(browser);
        self.resource = Some(browser.create_object_url(markdown, MARKDOWN_MIME));
        self.raw_markdown = markdown.to_string();
    }

    /// Revoke the current handle, if any.
    pub fn release(&mut self, browser: &dyn Browser) {
        if let Some(old) = self.resource.take() {
            browser.revoke_object_url(&old);
        }
    }
}
