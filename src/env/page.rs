//! Browser page environment handed to every behavior installer.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, Window};

use super::storage::{KeyValueStore, LocalStore, MemoryStore};
use super::timers::Timers;
use crate::config::{EnhanceConfig, Messages};
use crate::error::{EnhanceError, Reporter};
use crate::net::js_error_text;

pub struct PageEnv {
    pub window: Window,
    pub document: Document,
    pub timers: Rc<dyn Timers>,
    pub store: Rc<dyn KeyValueStore>,
    pub reporter: Reporter,
    pub config: Rc<EnhanceConfig>,
    pub messages: Rc<Messages>,
}

impl PageEnv {
    /// `None` outside a window context (workers, SSR).
    pub fn new(
        config: EnhanceConfig,
        timers: Rc<dyn Timers>,
        reporter: Reporter,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let store: Rc<dyn KeyValueStore> = match LocalStore::from_window(&window, Rc::clone(&reporter)) {
            Some(store) => Rc::new(store),
            None => {
                log::debug!("localStorage unavailable; drafts stay in memory");
                Rc::new(MemoryStore::new())
            }
        };
        let messages = Rc::new(config.messages());
        Some(Self { window, document, timers, store, reporter, config: Rc::new(config), messages })
    }

    /// All elements matching `selector` under the document.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all_in(&self.document, selector, &self.reporter)
    }

    /// First element matching `selector`, tolerating invalid selectors.
    pub fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                (self.reporter)(&EnhanceError::Dom { context: "query_selector", reason: js_error_text(&err) });
                None
            }
        }
    }

    /// Current `location.pathname`, empty when unreadable.
    pub fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}

/// Elements under a document or element matching `selector`.
pub fn query_all_in(root: &impl QueryRoot, selector: &str, reporter: &Reporter) -> Vec<Element> {
    let list = match root.select_all(selector) {
        Ok(list) => list,
        Err(err) => {
            reporter(&EnhanceError::Dom { context: "query_selector_all", reason: js_error_text(&err) });
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Document and element share `querySelectorAll` but no common web-sys trait.
pub trait QueryRoot {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

/// Attach a page-lifetime listener; the closure is leaked on purpose.
pub fn listen(target: &web_sys::EventTarget, event: &str, reporter: &Reporter, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        reporter(&EnhanceError::Dom { context: "add_event_listener", reason: js_error_text(&err) });
        return;
    }
    closure.forget();
}

/// Report a failed DOM call under `context`.
pub fn report_dom(reporter: &Reporter, context: &'static str, result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(err) = result {
        reporter(&EnhanceError::Dom { context, reason: js_error_text(&err) });
    }
}
