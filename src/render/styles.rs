//! Shared stylesheet for the menu.
//!
//! Every visual constant is a `--dapm-*` custom property that chains onto a
//! host theme variable with a literal fallback, so themes restyle the menu
//! without touching it.

use crate::browser::Document;

/// Id of the single `<style>` block. Its presence is the injection marker.
pub const STYLE_ID: &str = "page-actions-menu-style";

pub const MENU_CSS: &str = include_str!("../../assets/page-actions.css");

/// Add the stylesheet to the document head unless it is already there.
///
/// Returns `true` when this call injected it.
pub fn inject_styles(doc: &dyn Document) -> bool {
    if doc.contains(STYLE_ID) {
        return false;
    }
    doc.append_head_style(STYLE_ID, MENU_CSS);
    log::info!("[STYLE] Injected #{} ({} bytes)", STYLE_ID, MENU_CSS.len());
    true
}
