//! Integration tests for the static preview host: Markdown file in,
//! standalone HTML page with the menu out.

use page_actions_lib::preview::{load_config, render_file, PreviewOptions};
use page_actions_lib::render::{CONTAINER_ID, STYLE_ID};
use page_actions_lib::Error;
use std::fs;

#[test]
fn test_render_file_writes_page_with_menu() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("install.md");
    let output = dir.path().join("install.html");
    fs::write(&input, "# Install\n\nRun the installer.\n").unwrap();

    render_file(&input, &output, PreviewOptions::default()).unwrap();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>install</title>"));
    assert_eq!(page.matches(&format!("<style id=\"{}\">", STYLE_ID)).count(), 1);
    assert!(page.contains(CONTAINER_ID));
    assert!(page.contains("<h1>Install</h1>"));
    assert!(page.contains("Copy page"));
}

#[test]
fn test_render_file_uses_caller_items_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "pageActionItems": [
            { "icon": "", "label": "Ask ChatGPT", "desc": "Chat about it", "action": "llm", "llm": "chatgpt" }
        ] }"#,
    )
    .unwrap();
    let input = dir.path().join("page.md");
    let output = dir.path().join("page.html");
    fs::write(&input, "# Page").unwrap();

    let options = PreviewOptions {
        config: load_config(&config_path).unwrap(),
        ..PreviewOptions::default()
    };
    render_file(&input, &output, options).unwrap();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("Ask ChatGPT"));
    assert!(!page.contains("Copy page"));
    assert_eq!(page.matches("data-idx=").count(), 1);
}

#[test]
fn test_render_file_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_file(
        &dir.path().join("absent.md"),
        &dir.path().join("out.html"),
        PreviewOptions::default(),
    )
    .unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("absent.md")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_config_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_config(&path), Err(Error::Json(_))));
}
