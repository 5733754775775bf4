//! Canonical page URL — the absolute URL of the page's raw Markdown.
//!
//! Hash-routed docs sites serve `#/guide/install` from `guide/install.md`
//! next to the site's index page. External tools are pointed at that file.

use crate::browser::PageLocation;

/// Index document served for an empty route or a directory route.
pub const INDEX_DOCUMENT: &str = "README.md";

const SOURCE_EXT: &str = ".md";

/// Build the raw-source URL for the page currently shown at `location`.
pub fn canonical_page_url(location: &PageLocation) -> String {
    format!(
        "{}{}{}",
        location.origin,
        base_directory(&location.pathname),
        source_path(&location.hash)
    )
}

/// Directory part of the pathname, always ending in `/`.
///
/// `/docs/index.html` and `/docs/` both resolve to `/docs/`.
fn base_directory(pathname: &str) -> &str {
    match pathname.rfind('/') {
        Some(slash) => &pathname[..=slash],
        None => "/",
    }
}

/// Route from the hash, as a relative `.md` path.
fn source_path(hash: &str) -> String {
    let route = hash.strip_prefix("#/").unwrap_or(hash.strip_prefix('#').unwrap_or(hash));
    // `#/guide?id=section` addresses a heading inside guide.md
    let route = route.split('?').next().unwrap_or_default();
    let route = route.strip_suffix(SOURCE_EXT).unwrap_or(route);

    if route.is_empty() {
        return INDEX_DOCUMENT.to_string();
    }
    if route.ends_with('/') {
        return format!("{}{}", route, INDEX_DOCUMENT);
    }
    format!("{}{}", route, SOURCE_EXT)
}
