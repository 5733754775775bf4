//! Menu domain — item types, built-in defaults, and config resolution.
//!
//!   - icons.rs  — inline SVG markup
//!   - config.rs — `pageActionItems` parsing from the host config object
//!
//! A row's identity is its position in the active list; nothing else.

pub mod config;
pub mod icons;

pub use config::{active_items, CONFIG_KEY};

use crate::host::ActionCallback;

/// What a row does when clicked.
#[derive(Clone)]
pub enum MenuAction {
    /// Copy the raw page Markdown to the clipboard.
    Copy,
    /// Open the page Markdown resource in a new tab.
    View,
    /// Open an external LLM chat seeded with the canonical page URL.
    /// The target id is resolved only when clicked.
    Llm(String),
    /// Run a caller-supplied callback.
    Custom(ActionCallback),
}

impl MenuAction {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuAction::Copy => "copy",
            MenuAction::View => "view",
            MenuAction::Llm(_) => "llm",
            MenuAction::Custom(_) => "custom",
        }
    }
}

impl std::fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::Copy => f.write_str("Copy"),
            MenuAction::View => f.write_str("View"),
            MenuAction::Llm(target) => f.debug_tuple("Llm").field(target).finish(),
            MenuAction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One entry in the actions dropdown.
///
/// `icon` and `label` are markup and rendered as-is; `desc` is plain text.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub icon: String,
    pub label: String,
    pub desc: String,
    pub action: MenuAction,
}

/// Small external-link arrow appended to labels of rows that open a tab.
const EXTERNAL_MARK: &str =
    r#"<span style="margin-left:0.25rem;font-size:0.85em;">↗</span>"#;

impl MenuItem {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        desc: impl Into<String>,
        action: MenuAction,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            desc: desc.into(),
            action,
        }
    }

    /// The built-in menu used whenever the host config supplies no item list:
    /// copy, view as Markdown, open in Claude, open in Perplexity.
    pub fn defaults() -> Vec<MenuItem> {
        vec![
            MenuItem::new(
                icons::COPY,
                "Copy page",
                "Copy page as Markdown for LLMs",
                MenuAction::Copy,
            ),
            MenuItem::new(
                icons::VIEW,
                format!("View as Markdown {}", EXTERNAL_MARK),
                "View this page as plain text",
                MenuAction::View,
            ),
            MenuItem::new(
                icons::CLAUDE,
                format!("Open in Claude {}", EXTERNAL_MARK),
                "Ask questions about this page",
                MenuAction::Llm("claude".to_string()),
            ),
            MenuItem::new(
                icons::PERPLEXITY,
                format!("Open in Perplexity {}", EXTERNAL_MARK),
                "Ask questions about this page",
                MenuAction::Llm("perplexity".to_string()),
            ),
        ]
    }
}
