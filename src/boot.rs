//! Browser entry point.
//!
//! The host page calls `init(current_user, config_json)` once its markup is
//! parsed. `init` sets up console logging, installs every behavior against
//! the live document and publishes `updateUnreadCount`, `debounce` and
//! `throttle` on `window[config.namespace]` for other page scripts.
//!
//! ERROR HANDLING
//! ==============
//! A bad config falls back to defaults; a missing window or document makes
//! `init` a logged no-op. Nothing here throws back into JavaScript.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::EnhanceConfig;
use crate::env::browser_timers::BrowserTimers;
use crate::env::page::PageEnv;
use crate::env::timers::Timers;
use crate::error::{EnhanceError, log_reporter};
use crate::features::{anchors, badge, confirm, copy, lazy, nav, perf, submit, textarea};
use crate::net::js_error_text;
use crate::net::unread::UnreadSource;
use crate::net::worker;
use crate::session::Session;
use crate::util::rate_limit::{debounce, throttle};

struct Installed {
    env: Rc<PageEnv>,
    session: Session,
    source: Rc<dyn UnreadSource>,
}

thread_local! {
    static TIMERS: Rc<dyn Timers> = Rc::new(BrowserTimers::new());
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

fn shared_timers() -> Rc<dyn Timers> {
    TIMERS.with(Rc::clone)
}

fn init_logging(config: &EnhanceConfig) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
}

/// Install all page behaviors. Later calls are ignored.
#[wasm_bindgen]
pub fn init(current_user: JsValue, config_json: Option<String>) {
    if STARTED.with(|started| started.replace(true)) {
        log::debug!("init called twice; ignoring");
        return;
    }

    let reporter = log_reporter();
    let (config, config_error) = match EnhanceConfig::from_json(config_json.as_deref().unwrap_or_default()) {
        Ok(config) => (config, None),
        Err(err) => (EnhanceConfig::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        reporter(&err);
    }

    let session = Session::from_js(&current_user);
    let namespace = config.namespace.clone();
    let worker_url = config.worker_url.clone();
    let Some(env) = PageEnv::new(config, shared_timers(), Rc::clone(&reporter)) else {
        log::warn!("no window/document; page behaviors not installed");
        return;
    };
    let env = Rc::new(env);
    let source = badge::http_source(&env);

    badge::install(&env, session, Rc::clone(&source));
    textarea::install(&env);
    confirm::install(&env);
    anchors::install(&env);
    submit::install(&env);
    nav::install(&env);
    copy::install(&env);
    lazy::install(&env);
    perf::install(&env);
    worker::register(&env.window, &worker_url, Rc::clone(&reporter));

    if let Err(err) = publish_namespace(&env.window, &namespace) {
        reporter(&EnhanceError::Dom { context: "namespace", reason: js_error_text(&err) });
    }
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(Installed { env, session, source }));
    log::debug!("page behaviors installed");
}

/// Refresh the unread badge now instead of waiting for the next poll.
#[wasm_bindgen(js_name = updateUnreadCount)]
pub fn update_unread_count() {
    INSTALLED.with(|slot| match slot.borrow().as_ref() {
        Some(installed) if installed.session.signed_in => badge::refresh(&installed.env, &installed.source),
        Some(_) => log::debug!("anonymous session; unread refresh skipped"),
        None => log::debug!("updateUnreadCount before init; skipped"),
    });
}

#[wasm_bindgen(inline_js = "export function variadic(f) { return function (...args) { return f(this, args); }; }")]
extern "C" {
    /// JS function that hands its receiver and full argument list to `f`.
    fn variadic(f: &Function) -> Function;
}

/// Receiver and arguments of one JS call.
type JsCall = (JsValue, Array);

fn apply_quietly(func: &Function, (this, args): &JsCall) {
    if let Err(err) = func.apply(this, args) {
        log::warn!("wrapped callback threw: {}", js_error_text(&err));
    }
}

fn js_wrapper(f: impl Fn(JsCall) + 'static) -> Function {
    let callback =
        Closure::<dyn Fn(JsValue, Array)>::new(move |this: JsValue, args: Array| f((this, args))).into_js_value();
    variadic(callback.unchecked_ref())
}

/// JS-facing debounce. The call that fires gets the latest call's `this`
/// and arguments.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_js(func: Function, wait: u32) -> Function {
    js_wrapper(debounce(shared_timers(), wait, move |call: JsCall| apply_quietly(&func, &call)))
}

/// JS-facing throttle. The leading call runs with its own `this` and
/// arguments.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle_js(func: Function, limit: u32) -> Function {
    js_wrapper(throttle(shared_timers(), limit, move |call: JsCall| apply_quietly(&func, &call)))
}

fn publish_namespace(window: &web_sys::Window, namespace: &str) -> Result<(), JsValue> {
    let exports = Object::new();
    let update = Closure::<dyn Fn()>::new(update_unread_count).into_js_value();
    let debounce = Closure::<dyn Fn(Function, u32) -> Function>::new(debounce_js).into_js_value();
    let throttle = Closure::<dyn Fn(Function, u32) -> Function>::new(throttle_js).into_js_value();
    Reflect::set(&exports, &JsValue::from_str("updateUnreadCount"), &update)?;
    Reflect::set(&exports, &JsValue::from_str("debounce"), &debounce)?;
    Reflect::set(&exports, &JsValue::from_str("throttle"), &throttle)?;
    Reflect::set(window, &JsValue::from_str(namespace), &exports)?;
    Ok(())
}
