//! `PageActions` — the menu plugin itself.
//!
//! One instance per host. Per navigation:
//!   before_each → capture page source, rotate the resource handle
//!   after_each  → inject styles once, splice menu markup into the page
//!   done_each   → (re)assign click handlers on the live menu
//!
//! State is owned by the instance and shared with its installed click
//! handlers through weak references, so a dropped plugin leaves inert
//! handlers behind rather than a reference cycle.

mod actions;
mod state;

pub use actions::{COPIED_FEEDBACK, COPIED_LABEL};
pub use state::{PageSnapshot, MARKDOWN_MIME};

use crate::browser::{Browser, ClickEvent, ClickTarget, Document, ScheduledTask};
use crate::host::{HostViewModel, LifecycleHooks, Next};
use crate::menu::{active_items, MenuItem};
use crate::render::{self, DROPDOWN_ID, TOGGLE_ID};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

pub(crate) struct Shared {
    browser: Rc<dyn Browser>,
    document: Rc<dyn Document>,
    view_model: RefCell<HostViewModel>,
    snapshot: RefCell<PageSnapshot>,
    /// Items behind the markup most recently rendered; `data-idx` indexes this.
    rendered: RefCell<Vec<MenuItem>>,
    pending_revert: RefCell<Option<ScheduledTask>>,
    outside_click_bound: Cell<bool>,
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.snapshot.get_mut().release(self.browser.as_ref());
    }
}

pub struct PageActions {
    shared: Rc<Shared>,
}

impl PageActions {
    pub fn new(
        browser: Rc<dyn Browser>,
        document: Rc<dyn Document>,
        view_model: HostViewModel,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                browser,
                document,
                view_model: RefCell::new(view_model),
                snapshot: RefCell::new(PageSnapshot::default()),
                rendered: RefCell::new(Vec::new()),
                pending_revert: RefCell::new(None),
                outside_click_bound: Cell::new(false),
            }),
        }
    }

    pub fn snapshot(&self) -> Ref<'_, PageSnapshot> {
        self.shared.snapshot.borrow()
    }

    pub fn view_model(&self) -> Ref<'_, HostViewModel> {
        self.shared.view_model.borrow()
    }

    /// Mutable access to the host view model, e.g. to swap the config
    /// between navigations. Takes effect on the next render.
    pub fn view_model_mut(&self) -> RefMut<'_, HostViewModel> {
        self.shared.view_model.borrow_mut()
    }

    fn bind(&self) {
        let doc = &self.shared.document;
        if !doc.contains(TOGGLE_ID) || !doc.contains(DROPDOWN_ID) {
            log::debug!("[BIND] Menu not in document, nothing to bind");
            return;
        }

        let weak = Rc::downgrade(&self.shared);
        doc.set_click_handler(
            ClickTarget::Element(TOGGLE_ID),
            Rc::new(move |event: &ClickEvent| {
                event.stop_propagation();
                if let Some(shared) = weak.upgrade() {
                    let shown = shared.document.is_shown(DROPDOWN_ID);
                    shared.document.set_shown(DROPDOWN_ID, !shown);
                }
                Ok(())
            }),
        );

        if !self.shared.outside_click_bound.replace(true) {
            let weak = Rc::downgrade(&self.shared);
            doc.add_document_click_listener(Rc::new(move |_: &ClickEvent| {
                if let Some(shared) = weak.upgrade() {
                    shared.document.set_shown(DROPDOWN_ID, false);
                }
                Ok(())
            }));
            log::debug!("[BIND] Outside-click listener installed");
        }

        let rendered = self.shared.rendered.borrow();
        let rows = doc.row_count(DROPDOWN_ID);
        if rows != rendered.len() {
            log::warn!(
                "[BIND] {} row(s) in document but {} item(s) rendered",
                rows,
                rendered.len()
            );
        }
        for idx in 0..rows.min(rendered.len()) {
            doc.set_click_handler(
                ClickTarget::Row(DROPDOWN_ID, idx),
                row_handler(Rc::downgrade(&self.shared), idx),
            );
        }
        log::info!("[BIND] Bound toggle + {} row(s)", rows.min(rendered.len()));
    }
}

fn row_handler(weak: Weak<Shared>, idx: usize) -> crate::browser::ClickHandler {
    Rc::new(move |event: &ClickEvent| {
        event.stop_propagation();
        let Some(shared) = weak.upgrade() else {
            return Ok(());
        };
        let action = match shared.rendered.borrow().get(idx) {
            Some(item) => item.action.clone(),
            None => return Ok(()),
        };
        log::debug!("[ACTION] Row {} clicked ({})", idx, action.kind());
        actions::run(&shared, &action)?;
        shared.document.set_shown(DROPDOWN_ID, false);
        Ok(())
    })
}

impl LifecycleHooks for PageActions {
    fn before_each(&mut self, markdown: String) -> String {
        self.shared
            .snapshot
            .borrow_mut()
            .replace(self.shared.browser.as_ref(), &markdown);
        log::info!("[CAPTURE] Page source captured ({} chars)", markdown.len());
        markdown
    }

    fn after_each<'a>(&mut self, html: String, next: Next<'a>) {
        render::inject_styles(self.shared.document.as_ref());

        let items = active_items(&self.shared.view_model.borrow());
        let page = render::insert_menu(&html, &render::menu_html(&items));
        log::info!("[RENDER] Menu with {} item(s) spliced into page", items.len());
        *self.shared.rendered.borrow_mut() = items;

        next(page);
    }

    fn done_each(&mut self) {
        self.bind();
    }
}
