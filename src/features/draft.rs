//! Draft autosave for long-form textareas.
//!
//! A form qualifies when it holds a textarea with more than
//! `draft_min_rows` rows. Its draft lives under `draft_<page path>`: restored
//! at load, overwritten on every autosave tick while the field has content,
//! and removed once a submit goes through.
//!
//! TRADE-OFFS
//! ==========
//! The key is per path, not per tab, so two tabs on the same thread share
//! one slot and the last save wins.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::rc::Rc;

use crate::env::storage::KeyValueStore;
use crate::env::timers::{TaskHandle, Timers, every};
use crate::error::Reporter;

/// Whether a textarea's `rows` attribute exceeds `min_rows`.
///
/// Missing or non-numeric attributes never qualify.
pub fn qualifies(rows_attr: Option<&str>, min_rows: u32) -> bool {
    rows_attr.is_some_and(|raw| raw.trim().parse::<u32>().is_ok_and(|rows| rows > min_rows))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Blank after trimming; the stored draft is left alone.
    SkippedBlank,
    Failed,
}

pub struct DraftStore<S> {
    store: S,
    prefix: String,
    reporter: Reporter,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, prefix: impl Into<String>, reporter: Reporter) -> Self {
        Self { store, prefix: prefix.into(), reporter }
    }

    pub fn key(&self, path: &str) -> String {
        format!("{}{path}", self.prefix)
    }

    /// Saved draft for `path`; an empty stored string counts as none.
    pub fn restore(&self, path: &str) -> Option<String> {
        self.store.get(&self.key(path)).filter(|draft| !draft.is_empty())
    }

    /// Store the raw value, untrimmed, unless it is blank.
    pub fn save(&self, path: &str, value: &str) -> SaveOutcome {
        if value.trim().is_empty() {
            return SaveOutcome::SkippedBlank;
        }
        match self.store.set(&self.key(path), value) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                (self.reporter)(&err);
                SaveOutcome::Failed
            }
        }
    }

    pub fn discard(&self, path: &str) {
        if let Err(err) = self.store.remove(&self.key(path)) {
            (self.reporter)(&err);
        }
    }
}

/// Text access to the field being drafted.
pub trait DraftField {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// One qualifying field bound to its draft slot.
pub struct DraftBinding<S, F> {
    drafts: Rc<DraftStore<S>>,
    path: String,
    field: Rc<F>,
}

impl<S: KeyValueStore + 'static, F: DraftField + 'static> DraftBinding<S, F> {
    /// Bind `field` and fill it from any saved draft. The flag says whether
    /// a draft was restored.
    pub fn attach(drafts: Rc<DraftStore<S>>, path: impl Into<String>, field: Rc<F>) -> (Self, bool) {
        let path = path.into();
        let restored = match drafts.restore(&path) {
            Some(draft) => {
                field.set_text(&draft);
                true
            }
            None => false,
        };
        (Self { drafts, path, field }, restored)
    }

    pub fn save_now(&self) -> SaveOutcome {
        self.drafts.save(&self.path, &self.field.text())
    }

    /// Save every `period_ms` for the page lifetime or until stopped.
    pub fn start_autosave(&self, timers: &Rc<dyn Timers>, period_ms: u32) -> TaskHandle {
        let drafts = Rc::clone(&self.drafts);
        let field = Rc::clone(&self.field);
        let path = self.path.clone();
        every(timers, period_ms, move || {
            drafts.save(&path, &field.text());
        })
    }

    /// Submit hook; a cancelled submit keeps the draft.
    pub fn on_submit(&self, cancelled: bool) {
        if !cancelled {
            self.drafts.discard(&self.path);
        }
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlTextAreaElement};

    use super::{DraftBinding, DraftField, DraftStore, qualifies};
    use crate::env::page::{PageEnv, query_all_in};
    use crate::env::storage::KeyValueStore;

    pub(crate) struct DomTextArea(HtmlTextAreaElement);

    impl DraftField for DomTextArea {
        fn text(&self) -> String {
            self.0.value()
        }

        fn set_text(&self, text: &str) {
            self.0.set_value(text);
        }
    }

    pub(crate) type PageDrafts = Rc<DraftStore<Rc<dyn KeyValueStore>>>;
    pub(crate) type DomDraft = DraftBinding<Rc<dyn KeyValueStore>, DomTextArea>;

    pub(crate) fn page_drafts(env: &PageEnv) -> PageDrafts {
        Rc::new(DraftStore::new(Rc::clone(&env.store), env.config.draft_key_prefix.clone(), Rc::clone(&env.reporter)))
    }

    /// Bind the form's first qualifying textarea: restore its draft and
    /// start autosave. `None` when the form has no such textarea.
    pub(crate) fn bind_form(env: &PageEnv, drafts: &PageDrafts, path: &str, form: &Element) -> Option<DomDraft> {
        let min_rows = env.config.draft_min_rows;
        let area = query_all_in(form, &env.config.selectors.textarea, &env.reporter)
            .into_iter()
            .filter(|area| qualifies(area.get_attribute("rows").as_deref(), min_rows))
            .find_map(|area| area.dyn_ref::<HtmlTextAreaElement>().cloned())?;

        let (binding, restored) = DraftBinding::attach(Rc::clone(drafts), path, Rc::new(DomTextArea(area)));
        if restored {
            log::debug!("restored draft for {path}");
        }
        binding.start_autosave(&env.timers, env.config.autosave_interval_ms);
        Some(binding)
    }
}

#[cfg(feature = "hydrate")]
pub(crate) use dom::{bind_form, page_drafts};
