//! Render domain — menu markup and where it goes in the page.
//!
//!   - styles.rs — the shared stylesheet + idempotent injection
//!
//! Markup contract consumed by the binder:
//!   #page-actions-menu-container
//!     #page-actions-menu-wrapper
//!       #page-actions-menu-btn       toggle (icon + #page-actions-menu-label)
//!       #page-actions-menu-dropdown  one `.page-actions-menu-item[data-idx]` per item

pub mod styles;

pub use styles::{inject_styles, STYLE_ID};

use crate::menu::{icons, MenuItem};
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

pub const CONTAINER_ID: &str = "page-actions-menu-container";
pub const TOGGLE_ID: &str = "page-actions-menu-btn";
pub const LABEL_ID: &str = "page-actions-menu-label";
pub const DROPDOWN_ID: &str = "page-actions-menu-dropdown";

/// Toggle label at rest.
pub const TOGGLE_LABEL: &str = "Page actions";

/// Opening tag of the page's content container. Quoted attribute values
/// may contain `>`.
fn container_open_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<article(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>"#).expect("static regex")
    })
}

/// Escape text for HTML element content.
pub(crate) fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the full menu markup for `items`, rows in list order.
pub fn menu_html(items: &[MenuItem]) -> String {
    let mut rows = String::new();
    for (idx, item) in items.iter().enumerate() {
        let _ = write!(
            rows,
            r#"
      <div type="button" class="page-actions-menu-item" data-idx="{idx}">
        <span class="page-actions-menu-icon">{icon}</span>
        <div>
          <div class="page-actions-menu-item-action-label">{label}</div>
          <div class="page-actions-menu-desc">{desc}</div>
        </div>
      </div>"#,
            idx = idx,
            icon = item.icon,
            label = item.label,
            desc = escape_html_text(&item.desc),
        );
    }

    format!(
        r#"
<div id="{CONTAINER_ID}">
  <div id="page-actions-menu-wrapper">
    <div type="button" id="{TOGGLE_ID}">
      <span class="page-actions-menu-icon">{icon}</span>
      <span id="{LABEL_ID}">{TOGGLE_LABEL}</span>
    </div>
    <div id="{DROPDOWN_ID}">{rows}
    </div>
  </div>
</div>
"#,
        icon = icons::COPY,
        rows = rows,
    )
}

/// Splice `menu` into `html` right after the first content container's
/// opening tag, or in front of everything when there is none.
pub fn insert_menu(html: &str, menu: &str) -> String {
    match container_open_tag().find(html) {
        Some(tag) => {
            let mut out = String::with_capacity(html.len() + menu.len());
            out.push_str(&html[..tag.end()]);
            out.push_str(menu);
            out.push_str(&html[tag.end()..]);
            out
        }
        None => {
            log::debug!("[RENDER] No <article> container, prepending menu");
            format!("{}{}", menu, html)
        }
    }
}
