//! In-memory `Browser` + `Document` for static output.
//!
//! There is no live page: the only DOM effect that survives is the head
//! stylesheet, which the preview host writes into the generated file.

use crate::browser::{
    Browser, ClickHandler, ClickTarget, Document, PageLocation, ResourceHandle, ScheduledTask,
};
use base64::Engine;
use std::cell::RefCell;
use std::time::Duration;

/// Browser whose object URLs are self-contained `data:` URLs.
pub struct StaticBrowser {
    location: PageLocation,
}

impl StaticBrowser {
    pub fn new(location: PageLocation) -> Self {
        Self { location }
    }
}

impl Browser for StaticBrowser {
    fn write_clipboard(&self, text: &str) {
        log::debug!("[PREVIEW] Clipboard unavailable, dropped {} chars", text.len());
    }

    fn create_object_url(&self, contents: &str, mime_type: &str) -> ResourceHandle {
        let encoded = base64::engine::general_purpose::STANDARD.encode(contents.as_bytes());
        ResourceHandle::new(format!("data:{};base64,{}", mime_type, encoded))
    }

    fn revoke_object_url(&self, _handle: &ResourceHandle) {}

    fn open_in_new_tab(&self, url: &str) {
        log::debug!("[PREVIEW] Would open {}", url);
    }

    fn location(&self) -> PageLocation {
        self.location.clone()
    }

    fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) -> ScheduledTask {
        ScheduledTask::detached()
    }
}

/// Document that only has a head.
#[derive(Default)]
pub struct StaticDocument {
    head_styles: RefCell<Vec<(String, String)>>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<style>` blocks appended so far, ready to paste into `<head>`.
    pub fn head_html(&self) -> String {
        self.head_styles
            .borrow()
            .iter()
            .map(|(id, css)| format!("<style id=\"{}\">\n{}</style>\n", id, css))
            .collect()
    }
}

impl Document for StaticDocument {
    fn contains(&self, id: &str) -> bool {
        self.head_styles.borrow().iter().any(|(style_id, _)| style_id == id)
    }

    fn append_head_style(&self, id: &str, css: &str) {
        self.head_styles
            .borrow_mut()
            .push((id.to_string(), css.to_string()));
    }

    fn set_text(&self, _id: &str, _text: &str) {}

    fn is_shown(&self, _id: &str) -> bool {
        false
    }

    fn set_shown(&self, _id: &str, _shown: bool) {}

    fn row_count(&self, _id: &str) -> usize {
        0
    }

    fn set_click_handler(&self, _target: ClickTarget<'_>, _handler: ClickHandler) {}

    fn add_document_click_listener(&self, _handler: ClickHandler) {}
}
