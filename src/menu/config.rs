//! `pageActionItems` — the caller's menu, read from the host config object.
//!
//! Resolution rule: if the key holds an array, that array replaces the
//! defaults entirely (even an empty one). Anything else (missing key,
//! null, object, string) falls back to `MenuItem::defaults()`.
//!
//! Entries deserialize as:
//! ```json
//! { "icon": "<svg…>", "label": "Ask ChatGPT", "desc": "…",
//!   "action": "llm", "llm": "chatgpt" }
//! { "label": "Share", "action": "custom", "onClick": "share" }
//! ```
//! `onClick` names a callback registered on the `HostViewModel`.

use super::{MenuAction, MenuItem};
use crate::error::Error;
use crate::host::HostViewModel;
use serde::Deserialize;

/// Config key holding the caller's item list.
pub const CONFIG_KEY: &str = "pageActionItems";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ActionKind {
    Copy,
    View,
    Llm,
    Custom,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemEntry {
    #[serde(default)]
    icon: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    desc: String,
    action: ActionKind,
    #[serde(default)]
    llm: Option<String>,
    #[serde(default)]
    on_click: Option<String>,
}

/// The menu to render right now.
///
/// Entries that cannot be turned into items are logged and skipped; the
/// remaining caller entries still replace the defaults.
pub fn active_items(vm: &HostViewModel) -> Vec<MenuItem> {
    let Some(entries) = vm.config().get(CONFIG_KEY).and_then(|v| v.as_array()) else {
        return MenuItem::defaults();
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(index, entry, vm) {
            Ok(item) => items.push(item),
            Err(e) => log::warn!("[CONFIG] Skipping entry: {}", e),
        }
    }
    log::debug!(
        "[CONFIG] {} caller item(s) from {} entries",
        items.len(),
        entries.len()
    );
    items
}

fn parse_entry(index: usize, entry: &serde_json::Value, vm: &HostViewModel) -> Result<MenuItem, Error> {
    let parsed = ItemEntry::deserialize(entry).map_err(|e| Error::InvalidItem {
        index,
        reason: e.to_string(),
    })?;

    let action = match parsed.action {
        ActionKind::Copy => MenuAction::Copy,
        ActionKind::View => MenuAction::View,
        // A missing target behaves like an unknown one: the row renders, the click does nothing.
        ActionKind::Llm => MenuAction::Llm(parsed.llm.unwrap_or_default()),
        ActionKind::Custom => {
            let name = parsed.on_click.ok_or_else(|| Error::InvalidItem {
                index,
                reason: "custom action without onClick".to_string(),
            })?;
            let callback = vm.callback(&name).ok_or_else(|| Error::InvalidItem {
                index,
                reason: format!("no callback registered as '{}'", name),
            })?;
            MenuAction::Custom(callback)
        }
    };

    Ok(MenuItem::new(parsed.icon, parsed.label, parsed.desc, action))
}
