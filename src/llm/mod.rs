//! LLM domain — "Open in …" targets and the page URL they receive.
//!
//!   - provider.rs — known chat targets + URL builders
//!   - page_url.rs — canonical raw-Markdown URL of the current page

pub mod page_url;
pub mod provider;

pub use page_url::canonical_page_url;
pub use provider::LlmTarget;
