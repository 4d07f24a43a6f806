//! Offline-support service worker registration.

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;

use crate::error::{EnhanceError, Reporter};

/// What happened when registration was attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerSupport {
    /// `navigator.serviceWorker` is missing; nothing was attempted.
    Unsupported,
    /// Registration was started; its outcome is reported asynchronously.
    Requested,
}

pub fn registration_failure(url: &str, reason: &str) -> EnhanceError {
    EnhanceError::WorkerRegistration(format!("{url}: {reason}"))
}

/// Log a settled registration; rejections go to `reporter`.
pub fn settle(url: &str, outcome: Result<(), String>, reporter: &Reporter) {
    match outcome {
        Ok(()) => log::debug!("service worker registered: {url}"),
        Err(reason) => reporter(&registration_failure(url, &reason)),
    }
}

/// Start registering `url` as the page's service worker.
#[cfg(feature = "hydrate")]
pub fn register(window: &web_sys::Window, url: &str, reporter: Reporter) -> WorkerSupport {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let navigator = window.navigator();
    if !matches!(js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")), Ok(true)) {
        log::debug!("service worker unsupported; skipping {url}");
        return WorkerSupport::Unsupported;
    }

    let promise = navigator.service_worker().register(url);
    let url = url.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = JsFuture::from(promise).await.map(drop).map_err(|err| crate::net::js_error_text(&err));
        settle(&url, outcome, &reporter);
    });
    WorkerSupport::Requested
}
