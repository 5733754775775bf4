//! Browser-facing ports the menu talks to.
//!
//! The menu never touches a concrete DOM. Everything it needs from the page
//! goes through two traits:
//!   - `Browser`  — window-level APIs (clipboard, object URLs, tabs, location, timers)
//!   - `Document` — the live document the rendered page is attached to
//!
//! The `wasm` adapter implements both on top of web-sys; the static preview
//! host implements them in memory.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A revocable reference to the page source exposed as an openable resource.
///
/// In a browser this is a `blob:` object URL; elsewhere it may be a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of `window.location` the canonical page URL is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub origin: String,
    pub pathname: String,
    pub hash: String,
}

/// A one-shot deferred callback that can still be cancelled before it fires.
///
/// Dropping the task does NOT cancel it.
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A task whose backend offers no cancellation.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Window-level browser APIs.
pub trait Browser {
    /// Fire-and-forget clipboard write. Failure is unobserved.
    fn write_clipboard(&self, text: &str);

    fn create_object_url(&self, contents: &str, mime_type: &str) -> ResourceHandle;

    fn revoke_object_url(&self, handle: &ResourceHandle);

    fn open_in_new_tab(&self, url: &str);

    fn location(&self) -> PageLocation;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// A click delivered to a handler. Handlers call `stop_propagation` to keep
/// the click from reaching document-level listeners.
#[derive(Debug, Default)]
pub struct ClickEvent {
    propagation_stopped: Cell<bool>,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Click handlers may fail only when a caller callback fails; the error is
/// handed back to whoever dispatched the click.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent) -> crate::error::Result<()>>;

/// Where a click handler is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<'a> {
    /// The element with this id.
    Element(&'a str),
    /// The row tagged `data-idx="<index>"` inside the element with this id.
    Row(&'a str, usize),
}

/// The live document the rendered page is attached to.
pub trait Document {
    fn contains(&self, id: &str) -> bool;

    /// Append `<style id="{id}">{css}</style>` to the document head.
    fn append_head_style(&self, id: &str, css: &str);

    fn set_text(&self, id: &str, text: &str);

    fn is_shown(&self, id: &str) -> bool;

    fn set_shown(&self, id: &str, shown: bool);

    /// Number of `data-idx` rows inside the element with this id.
    fn row_count(&self, id: &str) -> usize;

    /// Assign the element's click handler, replacing any previous one.
    fn set_click_handler(&self, target: ClickTarget<'_>, handler: ClickHandler);

    /// Add a listener for every click that bubbles up to the document.
    fn add_document_click_listener(&self, handler: ClickHandler);
}
