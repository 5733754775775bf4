//! Crate error type.
//!
//! Most absence-of-data conditions (empty page, no resource handle, unknown
//! LLM target) are silent no-ops and never reach this type. What remains:
//! bad config entries, errors returned by caller callbacks, and I/O in the
//! static preview host.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `pageActionItems` entry that cannot become a menu item.
    #[error("invalid page action item #{index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// Raised by a caller-supplied custom action. Never caught by the menu.
    #[error("custom page action failed: {0}")]
    Callback(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
