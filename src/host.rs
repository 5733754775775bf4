//! Host renderer contract.
//!
//! A documentation renderer drives every page navigation through three
//! hooks, always in this order:
//!   1. `before_each`  — raw Markdown in, same Markdown out
//!   2. `after_each`   — rendered HTML in, continuation called exactly once
//!   3. `done_each`    — the transformed HTML is live in the document
//!
//! `HostViewModel` is what the host exposes to plugins: its global config
//! object plus any named callbacks the config refers to.

use crate::browser::ResourceHandle;
use std::collections::HashMap;
use std::rc::Rc;

/// Continuation handed to `after_each`. `FnOnce` makes "at most once" a
/// type-level guarantee; implementations must still call it.
pub type Next<'a> = Box<dyn FnOnce(String) + 'a>;

/// The three lifecycle hooks a host renderer calls per navigation.
pub trait LifecycleHooks {
    fn before_each(&mut self, markdown: String) -> String;

    fn after_each<'a>(&mut self, html: String, next: Next<'a>);

    fn done_each(&mut self);
}

/// Run `after_each` for a host that takes the transformed page as a return
/// value instead of through a continuation. If the hook never calls `next`,
/// the page comes back unchanged.
pub fn after_each_returning<H: LifecycleHooks + ?Sized>(hooks: &mut H, html: String) -> String {
    let mut page: Option<String> = None;
    hooks.after_each(html.clone(), Box::new(|out: String| page = Some(out)));
    page.unwrap_or(html)
}

/// What a custom action sees when its row is clicked.
pub struct ActionContext<'a> {
    pub raw_markdown: &'a str,
    pub resource_handle: Option<&'a ResourceHandle>,
    pub view_model: &'a HostViewModel,
}

/// Caller-supplied row action. Errors are not handled by the menu.
pub type ActionCallback = Rc<dyn Fn(&ActionContext<'_>) -> crate::error::Result<()>>;

/// The host's view of the current site: its config object and the named
/// callbacks that `onClick` entries in that config resolve to.
#[derive(Clone, Default)]
pub struct HostViewModel {
    config: serde_json::Value,
    callbacks: HashMap<String, ActionCallback>,
}

impl HostViewModel {
    pub fn new(config: serde_json::Value) -> Self {
        Self {
            config,
            callbacks: HashMap::new(),
        }
    }

    pub fn config(&self) -> &serde_json::Value {
        &self.config
    }

    /// Replace the config object. The menu re-reads it on every render.
    pub fn set_config(&mut self, config: serde_json::Value) {
        self.config = config;
    }

    pub fn register_callback(
        &mut self,
        name: impl Into<String>,
        callback: impl Fn(&ActionContext<'_>) -> crate::error::Result<()> + 'static,
    ) {
        self.callbacks.insert(name.into(), Rc::new(callback));
    }

    pub fn callback(&self, name: &str) -> Option<ActionCallback> {
        self.callbacks.get(name).cloned()
    }

    pub fn clear_callbacks(&mut self) {
        self.callbacks.clear();
    }
}

impl std::fmt::Debug for HostViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.callbacks.keys().collect();
        names.sort();
        f.debug_struct("HostViewModel")
            .field("config", &self.config)
            .field("callbacks", &names)
            .finish()
    }
}
