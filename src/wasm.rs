//! Browser adapter — web-sys implementations of the ports, plus registration
//! into a docsify-style host (`window.$docsify.plugins`).
//!
//! Load the generated module, then call `install()` before the host starts:
//!
//! ```js
//! import init, { install } from './page_actions_lib.js';
//! await init();
//! install();
//! ```
//!
//! `install()` also routes `log` records at info and above to the browser
//! console.

use crate::browser::{
    Browser, ClickEvent, ClickHandler, ClickTarget, Document, PageLocation, ResourceHandle,
    ScheduledTask,
};
use crate::error::Error;
use crate::host::{after_each_returning, HostViewModel, LifecycleHooks};
use crate::menu::CONFIG_KEY;
use crate::plugin::PageActions;
use base64::Engine;
use js_sys::{Array, Function, Object, Reflect, JSON};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct WebBrowser {
    window: web_sys::Window,
}

impl Browser for WebBrowser {
    fn write_clipboard(&self, text: &str) {
        // Promise intentionally dropped: clipboard failures are not surfaced.
        let _ = self.window.navigator().clipboard().write_text(text);
    }

    fn create_object_url(&self, contents: &str, mime_type: &str) -> ResourceHandle {
        let parts = Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let url = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .and_then(|blob| web_sys::Url::create_object_url_with_blob(&blob));
        match url {
            Ok(url) => ResourceHandle::new(url),
            Err(e) => {
                log::warn!("[CAPTURE] Blob URL failed ({:?}), using data: URL", e);
                let encoded = base64::engine::general_purpose::STANDARD.encode(contents.as_bytes());
                ResourceHandle::new(format!("data:{};base64,{}", mime_type, encoded))
            }
        }
    }

    fn revoke_object_url(&self, handle: &ResourceHandle) {
        if handle.as_str().starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(handle.as_str());
        }
    }

    fn open_in_new_tab(&self, url: &str) {
        let _ = self.window.open_with_url_and_target(url, "_blank");
    }

    fn location(&self) -> PageLocation {
        let location = self.window.location();
        PageLocation {
            origin: location.origin().unwrap_or_default(),
            pathname: location.pathname().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(id) => {
                let window = self.window.clone();
                ScheduledTask::new(move || window.clear_timeout_with_handle(id))
            }
            Err(_) => ScheduledTask::detached(),
        }
    }
}

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    fn html_element(&self, id: &str) -> Option<web_sys::HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    }

    fn target(&self, target: ClickTarget<'_>) -> Option<web_sys::HtmlElement> {
        match target {
            ClickTarget::Element(id) => self.html_element(id),
            ClickTarget::Row(id, idx) => self
                .document
                .get_element_by_id(id)?
                .query_selector(&format!("[data-idx=\"{}\"]", idx))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()),
        }
    }
}

/// Wrap a click handler as a JS listener. A handler error is rethrown into
/// the page so the host's global error handling sees it.
fn js_listener(handler: ClickHandler) -> JsValue {
    Closure::<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>::new(
        move |event: web_sys::Event| {
            let click = ClickEvent::new();
            let result = handler(&click);
            if click.propagation_stopped() {
                event.stop_propagation();
            }
            result.map_err(|e| js_sys::Error::new(&e.to_string()).into())
        },
    )
    .into_js_value()
}

impl Document for WebDocument {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn append_head_style(&self, id: &str, css: &str) {
        let (Ok(style), Some(head)) = (self.document.create_element("style"), self.document.head())
        else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn is_shown(&self, id: &str) -> bool {
        self.html_element(id)
            .and_then(|el| el.style().get_property_value("display").ok())
            .is_some_and(|display| display == "block")
    }

    fn set_shown(&self, id: &str, shown: bool) {
        if let Some(el) = self.html_element(id) {
            let _ = el
                .style()
                .set_property("display", if shown { "block" } else { "none" });
        }
    }

    fn row_count(&self, id: &str) -> usize {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.query_selector_all("[data-idx]").ok())
            .map_or(0, |rows| rows.length() as usize)
    }

    fn set_click_handler(&self, target: ClickTarget<'_>, handler: ClickHandler) {
        if let Some(el) = self.target(target) {
            el.set_onclick(Some(js_listener(handler).unchecked_ref()));
        }
    }

    fn add_document_click_listener(&self, handler: ClickHandler) {
        if let Some(body) = self.document.body() {
            let _ = body.add_event_listener_with_callback("click", js_listener(handler).unchecked_ref());
        }
    }
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&record.args().to_string());
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// First logger wins; a page that installed its own keeps it.
fn init_console_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Register the menu plugin with the host: appends a plugin function to
/// `window.$docsify.plugins`, creating the config object if needed.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    init_console_logger();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let key = JsValue::from_str("$docsify");

    let mut config = Reflect::get(&window, &key)?;
    if !config.is_object() {
        config = Object::new().into();
        Reflect::set(&window, &key, &config)?;
    }

    let plugins_key = JsValue::from_str("plugins");
    let existing = Reflect::get(&config, &plugins_key)?;
    let plugins: Array = if Array::is_array(&existing) {
        existing.unchecked_into()
    } else {
        Array::new()
    };

    let plugin = Closure::<dyn FnMut(JsValue, JsValue)>::new(|hook: JsValue, vm: JsValue| {
        if let Err(e) = register_hooks(&hook, vm) {
            log::error!("[BIND] Failed to register page actions: {:?}", e);
        }
    });
    plugins.push(&plugin.into_js_value());
    Reflect::set(&config, &plugins_key, &plugins)?;
    Ok(())
}

fn register_hooks(hook: &JsValue, vm: JsValue) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let plugin = Rc::new(RefCell::new(PageActions::new(
        Rc::new(WebBrowser { window }),
        Rc::new(WebDocument { document }),
        HostViewModel::default(),
    )));

    let p = plugin.clone();
    let before = Closure::<dyn FnMut(String) -> String>::new(move |markdown: String| {
        p.borrow_mut().before_each(markdown)
    });
    call_hook(hook, "beforeEach", before.into_js_value())?;

    // docsify only passes a continuation to functions declaring two
    // parameters; generated closures declare none, so return the page.
    let p = plugin.clone();
    let after = Closure::<dyn FnMut(String) -> String>::new(move |html: String| {
        refresh_view_model(&p.borrow(), &vm);
        after_each_returning(&mut *p.borrow_mut(), html)
    });
    call_hook(hook, "afterEach", after.into_js_value())?;

    let p = plugin;
    let done = Closure::<dyn FnMut()>::new(move || p.borrow_mut().done_each());
    call_hook(hook, "doneEach", done.into_js_value())
}

fn call_hook(hook: &JsValue, name: &str, callback: JsValue) -> Result<(), JsValue> {
    let register = Reflect::get(hook, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("hook.{} is not a function", name)))?;
    register.call1(hook, &callback)?;
    Ok(())
}

/// Re-read `vm.config` so a host that edits its config between pages gets
/// the new menu. JS `onClick` functions become named callbacks.
fn refresh_view_model(plugin: &PageActions, vm: &JsValue) {
    let config = Reflect::get(vm, &JsValue::from_str("config")).unwrap_or(JsValue::UNDEFINED);
    let mut json: serde_json::Value = JSON::stringify(&config)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default();

    let mut model = plugin.view_model_mut();
    model.clear_callbacks();

    let js_items = Reflect::get(&config, &JsValue::from_str(CONFIG_KEY)).unwrap_or(JsValue::UNDEFINED);
    if Array::is_array(&js_items) {
        let js_items: Array = js_items.unchecked_into();
        for (idx, item) in js_items.iter().enumerate() {
            let Ok(on_click) = Reflect::get(&item, &JsValue::from_str("onClick")) else {
                continue;
            };
            let Some(on_click) = on_click.dyn_ref::<Function>().cloned() else {
                continue;
            };
            let name = format!("js:{}", idx);
            if let Some(entry) = json
                .get_mut(CONFIG_KEY)
                .and_then(|items| items.get_mut(idx))
                .and_then(|entry| entry.as_object_mut())
            {
                entry.insert("onClick".to_string(), name.clone().into());
                entry
                    .entry("action".to_string())
                    .or_insert_with(|| "custom".into());
            }
            let vm = vm.clone();
            model.register_callback(name, move |ctx| {
                let arg = Object::new();
                let handle = ctx
                    .resource_handle
                    .map_or(JsValue::NULL, |h| JsValue::from_str(h.as_str()));
                let _ = Reflect::set(&arg, &"rawMarkdown".into(), &JsValue::from_str(ctx.raw_markdown));
                let _ = Reflect::set(&arg, &"blobUrl".into(), &handle);
                let _ = Reflect::set(&arg, &"vm".into(), &vm);
                on_click
                    .call1(&JsValue::NULL, &arg)
                    .map(|_| ())
                    .map_err(|e| Error::Callback(format!("{:?}", e)))
            });
        }
    }
    model.set_config(json);
}
