//! Signed-in context supplied by the host page.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub signed_in: bool,
}

impl Session {
    #[must_use]
    pub fn signed_in() -> Self {
        Self { signed_in: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { signed_in: false }
    }

    /// Build from the page's `current_user` value using JS truthiness.
    #[cfg(feature = "hydrate")]
    pub fn from_js(current_user: &wasm_bindgen::JsValue) -> Self {
        Self { signed_in: current_user.is_truthy() }
    }
}
