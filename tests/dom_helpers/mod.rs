//! Shared test helpers: an in-memory browser with a manual clock and a
//! document that simulates click bubbling.

#![allow(dead_code)]

use page_actions_lib::browser::{
    Browser, ClickEvent, ClickHandler, ClickTarget, Document, PageLocation, ResourceHandle,
    ScheduledTask,
};
use page_actions_lib::host::LifecycleHooks;
use page_actions_lib::render::{DROPDOWN_ID, LABEL_ID, TOGGLE_ID};
use page_actions_lib::{Error, PageActions};
use regex::Regex;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

struct Timer {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

/// Browser double. Object URLs are `blob:test/<n>`; timers fire on `advance`.
#[derive(Default)]
pub struct FakeBrowser {
    pub clipboard: RefCell<Option<String>>,
    pub opened: RefCell<Vec<String>>,
    pub location: RefCell<PageLocation>,
    live_handles: RefCell<Vec<String>>,
    created: Cell<u64>,
    now: Cell<Duration>,
    next_timer: Cell<u64>,
    timers: Rc<RefCell<Vec<Timer>>>,
}

impl FakeBrowser {
    pub fn new() -> Rc<Self> {
        let browser = Self::default();
        *browser.location.borrow_mut() = PageLocation {
            origin: "https://docs.example.com".to_string(),
            pathname: "/".to_string(),
            hash: String::new(),
        };
        Rc::new(browser)
    }

    pub fn set_hash(&self, hash: &str) {
        self.location.borrow_mut().hash = hash.to_string();
    }

    pub fn live_handles(&self) -> Vec<String> {
        self.live_handles.borrow().clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Move the clock forward, running every timer that comes due.
    pub fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);
        loop {
            let due = {
                let mut timers = self.timers.borrow_mut();
                timers.sort_by_key(|t| t.due);
                match timers.first() {
                    Some(t) if t.due <= now => Some(timers.remove(0)),
                    _ => None,
                }
            };
            match due {
                Some(timer) => (timer.task)(),
                None => break,
            }
        }
    }
}

impl Browser for FakeBrowser {
    fn write_clipboard(&self, text: &str) {
        *self.clipboard.borrow_mut() = Some(text.to_string());
    }

    fn create_object_url(&self, _contents: &str, mime_type: &str) -> ResourceHandle {
        assert_eq!(mime_type, "text/markdown");
        let n = self.created.get() + 1;
        self.created.set(n);
        let url = format!("blob:test/{}", n);
        self.live_handles.borrow_mut().push(url.clone());
        ResourceHandle::new(url)
    }

    fn revoke_object_url(&self, handle: &ResourceHandle) {
        self.live_handles
            .borrow_mut()
            .retain(|url| url != handle.as_str());
    }

    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn location(&self) -> PageLocation {
        self.location.borrow().clone()
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let id = self.next_timer.get();
        self.next_timer.set(id + 1);
        self.timers.borrow_mut().push(Timer {
            id,
            due: self.now.get() + delay,
            task,
        });
        let timers = self.timers.clone();
        ScheduledTask::new(move || timers.borrow_mut().retain(|t| t.id != id))
    }
}

/// Document double built from the HTML the host attaches.
#[derive(Default)]
pub struct FakeDocument {
    head_styles: RefCell<Vec<String>>,
    ids: RefCell<HashSet<String>>,
    rows: RefCell<usize>,
    texts: RefCell<HashMap<String, String>>,
    shown: RefCell<HashSet<String>>,
    handlers: RefCell<HashMap<String, ClickHandler>>,
    handler_sets: Cell<usize>,
    document_listeners: RefCell<Vec<ClickHandler>>,
}

fn target_key(target: ClickTarget<'_>) -> String {
    match target {
        ClickTarget::Element(id) => id.to_string(),
        ClickTarget::Row(id, idx) => format!("{}[{}]", id, idx),
    }
}

impl FakeDocument {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Replace the page body with `html`, like a host swapping in a new page.
    /// Head styles and document listeners survive; element handlers do not.
    pub fn attach(&self, html: &str) {
        let id_re = Regex::new(r#"\sid="([^"]+)""#).unwrap();
        let row_re = Regex::new(r#"data-idx="\d+""#).unwrap();
        let label_re = Regex::new(r#"<span id="page-actions-menu-label">([^<]*)</span>"#).unwrap();

        *self.ids.borrow_mut() = id_re
            .captures_iter(html)
            .map(|c| c[1].to_string())
            .collect();
        *self.rows.borrow_mut() = row_re.find_iter(html).count();
        self.shown.borrow_mut().clear();
        self.handlers.borrow_mut().clear();
        let mut texts = self.texts.borrow_mut();
        texts.clear();
        if let Some(label) = label_re.captures(html) {
            texts.insert(LABEL_ID.to_string(), label[1].to_string());
        }
    }

    pub fn style_count(&self) -> usize {
        self.head_styles.borrow().len()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn label(&self) -> String {
        self.text(LABEL_ID).unwrap_or_default()
    }

    pub fn dropdown_shown(&self) -> bool {
        self.is_shown(DROPDOWN_ID)
    }

    pub fn document_listener_count(&self) -> usize {
        self.document_listeners.borrow().len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Total `set_click_handler` calls, including replacements.
    pub fn handler_assignments(&self) -> usize {
        self.handler_sets.get()
    }

    /// Click `target`; the event bubbles to document listeners unless stopped.
    pub fn click(&self, target: ClickTarget<'_>) -> Result<(), Error> {
        let event = ClickEvent::new();
        let handler = self.handlers.borrow().get(&target_key(target)).cloned();
        if let Some(handler) = handler {
            handler(&event)?;
        }
        if !event.propagation_stopped() {
            self.bubble(&event)?;
        }
        Ok(())
    }

    pub fn click_toggle(&self) -> Result<(), Error> {
        self.click(ClickTarget::Element(TOGGLE_ID))
    }

    pub fn click_row(&self, idx: usize) -> Result<(), Error> {
        self.click(ClickTarget::Row(DROPDOWN_ID, idx))
    }

    /// Click somewhere on the page outside the menu.
    pub fn click_outside(&self) -> Result<(), Error> {
        self.bubble(&ClickEvent::new())
    }

    fn bubble(&self, event: &ClickEvent) -> Result<(), Error> {
        let listeners = self.document_listeners.borrow().clone();
        for listener in listeners {
            listener(event)?;
        }
        Ok(())
    }
}

impl Document for FakeDocument {
    fn contains(&self, id: &str) -> bool {
        self.ids.borrow().contains(id)
    }

    fn append_head_style(&self, id: &str, _css: &str) {
        self.head_styles.borrow_mut().push(id.to_string());
        self.ids.borrow_mut().insert(id.to_string());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts
            .borrow_mut()
            .insert(id.to_string(), text.to_string());
    }

    fn is_shown(&self, id: &str) -> bool {
        self.shown.borrow().contains(id)
    }

    fn set_shown(&self, id: &str, shown: bool) {
        if shown {
            self.shown.borrow_mut().insert(id.to_string());
        } else {
            self.shown.borrow_mut().remove(id);
        }
    }

    fn row_count(&self, id: &str) -> usize {
        if id == DROPDOWN_ID && self.contains(id) {
            *self.rows.borrow()
        } else {
            0
        }
    }

    fn set_click_handler(&self, target: ClickTarget<'_>, handler: ClickHandler) {
        self.handler_sets.set(self.handler_sets.get() + 1);
        self.handlers.borrow_mut().insert(target_key(target), handler);
    }

    fn add_document_click_listener(&self, handler: ClickHandler) {
        self.document_listeners.borrow_mut().push(handler);
    }
}

/// Run one full navigation and return the HTML handed to the continuation.
pub fn navigate(plugin: &mut PageActions, doc: &FakeDocument, markdown: &str, html: &str) -> String {
    let returned = plugin.before_each(markdown.to_string());
    assert_eq!(returned, markdown, "before_each must pass the source through");

    let mut page = None;
    let mut calls = 0;
    plugin.after_each(
        html.to_string(),
        Box::new(|out: String| {
            calls += 1;
            page = Some(out);
        }),
    );
    assert_eq!(calls, 1, "continuation must run exactly once");
    let page = page.unwrap();

    doc.attach(&page);
    plugin.done_each();
    page
}

pub const ARTICLE_HTML: &str =
    r#"<article class="markdown-section" id="main"><h1 id="hello">Hello</h1></article>"#;
