//! Page Actions — a "Page actions" dropdown for documentation viewers.
//!
//! Adds a menu above every rendered page with:
//!   - Copy page as Markdown
//!   - View the raw Markdown
//!   - Open Claude / Perplexity (or ChatGPT) pointed at the page source
//!   - any caller-defined actions
//!
//! Modules:
//!   - host.rs    — lifecycle contract the host renderer drives
//!   - browser.rs — Browser / Document ports
//!   - menu/      — item types, defaults, config resolution
//!   - render/    — menu markup, insertion point, stylesheet
//!   - llm/       — chat targets + canonical page URL
//!   - plugin/    — `PageActions`, the plugin that ties it all together
//!   - preview/   — static host for offline rendering
//!   - wasm.rs    — web-sys adapter (feature `wasm`)

pub mod browser;
pub mod error;
pub mod host;
pub mod llm;
pub mod menu;
pub mod plugin;
pub mod preview;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use browser::{Browser, Document, PageLocation, ResourceHandle};
pub use error::{Error, Result};
pub use host::{ActionContext, HostViewModel, LifecycleHooks};
pub use menu::{MenuAction, MenuItem};
pub use plugin::{PageActions, PageSnapshot};
