//! Page preview CLI for page-actions.
//!
//! Renders one Markdown file the way a docs host would, with the page
//! actions menu spliced in, and writes a standalone HTML page.
//!
//! Usage:
//!   cargo run -- <page.md>                           Writes <page>.html next to the input
//!   cargo run -- <page.md> --out <file.html>         Explicit output path
//!   cargo run -- <page.md> --config <config.json>    Host config with pageActionItems
//!   cargo run -- <page.md> --site <origin+path>      Pretend origin/pathname, e.g. https://docs.example.com/
//!   cargo run -- <page.md> --route <hash>            Pretend hash route, e.g. #/guide/install
//!
//! Without --config, $PAGE_ACTIONS_CONFIG and then
//! {config_dir}/page-actions/config.json are tried.

use page_actions_lib::preview::{self, PreviewOptions};
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!("Usage:");
        eprintln!("  page-preview <page.md> [--out <file.html>] [--config <config.json>]");
        eprintln!("               [--site <origin+path>] [--route <hash>]");
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = flag_value(&args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("html"));

    let mut options = PreviewOptions::default();
    if let Some(site) = flag_value(&args, "--site") {
        let (origin, pathname) = split_site(site);
        options.location.origin = origin;
        options.location.pathname = pathname;
    }
    if let Some(route) = flag_value(&args, "--route") {
        options.location.hash = route.to_string();
    }

    let config_path = flag_value(&args, "--config")
        .map(PathBuf::from)
        .or_else(preview::default_config_path);
    if let Some(path) = config_path {
        match preview::load_config(&path) {
            Ok(config) => options.config = config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = preview::render_file(&input, &output, options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    println!("{}", output.display());
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// `https://docs.example.com/v2/` → (`https://docs.example.com`, `/v2/`).
fn split_site(site: &str) -> (String, String) {
    let after_scheme = site.find("://").map_or(0, |i| i + 3);
    match site[after_scheme..].find('/') {
        Some(slash) => {
            let at = after_scheme + slash;
            (site[..at].to_string(), site[at..].to_string())
        }
        None => (site.to_string(), "/".to_string()),
    }
}
