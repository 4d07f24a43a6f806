//! Network-facing pieces: the unread-count endpoint and service worker
//! registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both are fire-and-forget from the page's point of view. Failures flow to
//! the caller's `Reporter`; nothing is retried beyond the normal poll.

pub mod unread;
pub mod worker;

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
