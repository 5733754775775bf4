//! Static preview host — drives the plugin without a browser.
//!
//! Plays the host renderer's part of the lifecycle contract for a single
//! Markdown file: capture → Markdown to HTML → splice menu → attach. The
//! result is a self-contained HTML page with the menu stylesheet in `<head>`.
//! Used by `tools/page-preview` to eyeball menu changes offline.

mod static_dom;

pub use static_dom::{StaticBrowser, StaticDocument};

use crate::browser::PageLocation;
use crate::error::{Error, Result};
use crate::host::{after_each_returning, HostViewModel, LifecycleHooks};
use crate::render::escape_html_text;
use crate::plugin::PageActions;
use pulldown_cmark::{html, Options, Parser};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Env var naming the host config JSON file.
pub const CONFIG_ENV: &str = "PAGE_ACTIONS_CONFIG";

/// How the previewed page pretends to be served.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub location: PageLocation,
    pub title: String,
    /// Host config object, e.g. `{"pageActionItems": [...]}`.
    pub config: serde_json::Value,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            location: PageLocation {
                origin: "http://localhost:3000".to_string(),
                pathname: "/".to_string(),
                hash: String::new(),
            },
            title: "Preview".to_string(),
            config: serde_json::Value::Null,
        }
    }
}

pub struct PreviewHost {
    document: Rc<StaticDocument>,
    plugin: PageActions,
    title: String,
}

impl PreviewHost {
    pub fn new(options: PreviewOptions) -> Self {
        let document = Rc::new(StaticDocument::new());
        let browser = Rc::new(StaticBrowser::new(options.location));
        let plugin = PageActions::new(
            browser,
            document.clone(),
            HostViewModel::new(options.config),
        );
        Self {
            document,
            plugin,
            title: options.title,
        }
    }

    pub fn plugin(&self) -> &PageActions {
        &self.plugin
    }

    /// Run one navigation and return the full HTML page.
    pub fn render_page(&mut self, markdown: &str) -> String {
        let markdown = self.plugin.before_each(markdown.to_string());
        let article = format!(
            "<article class=\"markdown-section\" id=\"main\">{}</article>",
            markdown_to_html(&markdown)
        );

        let page = after_each_returning(&mut self.plugin, article);
        self.plugin.done_each();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n{}</head>\n<body>\n<main>{}</main>\n</body>\n</html>\n",
            escape_html_text(&self.title),
            self.document.head_html(),
            page
        )
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Where to look for host config when none is given explicitly:
/// `$PAGE_ACTIONS_CONFIG`, then `{config_dir}/page-actions/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let path = dirs::config_dir()?.join("page-actions").join("config.json");
    path.exists().then_some(path)
}

/// Read a host config object from disk.
pub fn load_config(path: &Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&raw)?;
    log::info!("[CONFIG] Loaded host config from {}", path.display());
    Ok(config)
}

/// Render `input` (Markdown) to `output` (HTML).
pub fn render_file(input: &Path, output: &Path, mut options: PreviewOptions) -> Result<()> {
    let markdown = std::fs::read_to_string(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;
    if let Some(stem) = input.file_stem() {
        options.title = stem.to_string_lossy().to_string();
    }

    let html = PreviewHost::new(options).render_page(&markdown);
    std::fs::write(output, &html).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "[PREVIEW] Wrote {} ({} bytes)",
        output.display(),
        html.len()
    );
    Ok(())
}
