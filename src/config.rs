//! Typed configuration for the page behaviors.
//!
//! The host page may pass a JSON object to `init`; any field it leaves out
//! keeps the forum default below. Selectors and class names are the markup
//! contract with the server templates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::EnhanceError;

pub const DEFAULT_UNREAD_ENDPOINT: &str = "/messages/unread_count";
pub const DEFAULT_WORKER_URL: &str = "/sw.js";
pub const DEFAULT_NAMESPACE: &str = "miniForum";
pub const DEFAULT_DRAFT_KEY_PREFIX: &str = "draft_";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_DRAFT_MIN_ROWS: u32 = 5;
pub const DEFAULT_TEXTAREA_MIN_HEIGHT_PX: i32 = 100;
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2_000;
pub const DEFAULT_SLOW_LOAD_MS: f64 = 2_000.0;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnhanceConfig {
    pub unread_endpoint: String,
    pub poll_interval_ms: u32,
    pub autosave_interval_ms: u32,
    pub draft_key_prefix: String,
    /// A textarea needs strictly more rows than this to get autosave.
    pub draft_min_rows: u32,
    pub textarea_min_height_px: i32,
    pub copy_feedback_ms: u32,
    pub slow_load_ms: f64,
    pub worker_url: String,
    /// Name of the `window` property holding the exported helpers.
    pub namespace: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// `de` selects the German message preset when `messages` is absent.
    pub locale: Option<String>,
    pub selectors: Selectors,
    pub messages: Option<Messages>,
    pub copy_button_style: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            unread_endpoint: DEFAULT_UNREAD_ENDPOINT.to_owned(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            autosave_interval_ms: DEFAULT_AUTOSAVE_INTERVAL_MS,
            draft_key_prefix: DEFAULT_DRAFT_KEY_PREFIX.to_owned(),
            draft_min_rows: DEFAULT_DRAFT_MIN_ROWS,
            textarea_min_height_px: DEFAULT_TEXTAREA_MIN_HEIGHT_PX,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            slow_load_ms: DEFAULT_SLOW_LOAD_MS,
            worker_url: DEFAULT_WORKER_URL.to_owned(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            log_level: "info".to_owned(),
            locale: None,
            selectors: Selectors::default(),
            messages: None,
            copy_button_style: "position: absolute; top: 5px; right: 5px; padding: 2px 8px; font-size: 12px;"
                .to_owned(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a config object, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Config`] when `raw` is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// User-facing strings: explicit `messages` first, then the locale preset.
    pub fn messages(&self) -> Messages {
        if let Some(messages) = &self.messages {
            return messages.clone();
        }
        match self.locale.as_deref() {
            Some(locale) if locale.eq_ignore_ascii_case("de") => Messages::german(),
            _ => Messages::default(),
        }
    }

    /// Parsed log level; unknown names fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Markup contract with the server-rendered templates.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Selectors {
    pub unread_badge: String,
    pub textarea: String,
    pub delete_action: String,
    pub anchor_link: String,
    pub form: String,
    pub required_field: String,
    pub invalid_class: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_active_class: String,
    pub print_action: String,
    pub code_block: String,
    pub copy_button_class: String,
    pub lazy_image: String,
    pub lazy_src_attr: String,
    pub lazy_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            unread_badge: ".unread-badge".to_owned(),
            textarea: "textarea".to_owned(),
            delete_action: ".btn-delete".to_owned(),
            anchor_link: "a[href^=\"#\"]".to_owned(),
            form: "form".to_owned(),
            required_field: "[required]".to_owned(),
            invalid_class: "is-invalid".to_owned(),
            nav_toggle: ".nav-toggle".to_owned(),
            nav_menu: ".nav-menu".to_owned(),
            nav_active_class: "nav-menu-active".to_owned(),
            print_action: ".btn-print".to_owned(),
            code_block: "pre code".to_owned(),
            copy_button_class: "btn-copy".to_owned(),
            lazy_image: "img[data-src]".to_owned(),
            lazy_src_attr: "data-src".to_owned(),
            lazy_class: "lazy".to_owned(),
        }
    }
}

/// Strings shown to the user.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub confirm_delete: String,
    pub required_fields: String,
    pub copy_label: String,
    pub copied_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            confirm_delete: "Do you really want to delete this entry?".to_owned(),
            required_fields: "Please fill in all required fields.".to_owned(),
            copy_label: "Copy".to_owned(),
            copied_label: "Copied!".to_owned(),
        }
    }
}

impl Messages {
    /// The forum's German wording.
    pub fn german() -> Self {
        Self {
            confirm_delete: "Möchten Sie diesen Eintrag wirklich löschen?".to_owned(),
            required_fields: "Bitte füllen Sie alle Pflichtfelder aus.".to_owned(),
            copy_label: "Kopieren".to_owned(),
            copied_label: "Kopiert!".to_owned(),
        }
    }
}
