//! Row action dispatch.
//!
//! Every branch is a silent no-op when its data is missing: empty page,
//! no resource handle, unknown LLM target. Only custom callbacks can fail,
//! and their error is returned untouched.

use super::Shared;
use crate::error::Result;
use crate::host::ActionContext;
use crate::llm::{canonical_page_url, LlmTarget};
use crate::menu::MenuAction;
use crate::render::{LABEL_ID, TOGGLE_LABEL};
use std::rc::Rc;
use std::time::Duration;

/// Toggle label shown right after a copy.
pub const COPIED_LABEL: &str = "Copied!";

/// How long the copy feedback stays up.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1200);

pub(super) fn run(shared: &Rc<Shared>, action: &MenuAction) -> Result<()> {
    // Clone out so a callback that re-enters the plugin cannot hit a live borrow.
    let snapshot = shared.snapshot.borrow().clone();

    match action {
        MenuAction::Copy => {
            if snapshot.raw_markdown.is_empty() {
                return Ok(());
            }
            shared.browser.write_clipboard(&snapshot.raw_markdown);
            log::info!(
                "[ACTION] Copied {} chars to clipboard",
                snapshot.raw_markdown.len()
            );
            show_copied_feedback(shared);
        }
        MenuAction::View => {
            if let Some(handle) = &snapshot.resource {
                shared.browser.open_in_new_tab(handle.as_str());
                log::info!("[ACTION] Opened page source {}", handle);
            }
        }
        MenuAction::Llm(target_id) => match LlmTarget::from_id(target_id) {
            Some(target) => {
                let page_url = canonical_page_url(&shared.browser.location());
                shared.browser.open_in_new_tab(&target.chat_url(&page_url));
                log::info!("[ACTION] Opened {} for {}", target.id(), page_url);
            }
            None => log::debug!("[ACTION] Unknown LLM target '{}', ignoring", target_id),
        },
        MenuAction::Custom(callback) => {
            let view_model = shared.view_model.borrow().clone();
            callback(&ActionContext {
                raw_markdown: &snapshot.raw_markdown,
                resource_handle: snapshot.resource.as_ref(),
                view_model: &view_model,
            })?;
        }
    }
    Ok(())
}

/// Show "Copied!" on the toggle, then restore it.
///
/// A copy while feedback is still up cancels the pending restore and starts
/// a fresh one, so the label always stays up for the full duration.
fn show_copied_feedback(shared: &Rc<Shared>) {
    shared.document.set_text(LABEL_ID, COPIED_LABEL);

    let pending = shared.pending_revert.borrow_mut().take();
    if let Some(pending) = pending {
        pending.cancel();
    }

    let weak = Rc::downgrade(shared);
    let task = shared.browser.schedule(
        COPIED_FEEDBACK,
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.pending_revert.borrow_mut().take();
                shared.document.set_text(LABEL_ID, TOGGLE_LABEL);
            }
        }),
    );
    *shared.pending_revert.borrow_mut() = Some(task);
}
