//! Form submit pipeline.
//!
//! Every form gets exactly one submit listener. Required-field validation
//! runs first; the form's draft (if it has one) is cleared only when the
//! submit actually goes through.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::draft::{DraftBinding, DraftField};
use super::validation::{RequiredField, Validation, validate_required};
use crate::env::storage::KeyValueStore;

/// Validate one submit, then settle the draft.
///
/// `cancelled_earlier` is true when another page script already cancelled
/// the event; the draft survives that too.
pub fn handle_submit<F, S, D>(fields: &[F], cancelled_earlier: bool, draft: Option<&DraftBinding<S, D>>) -> Validation
where
    F: RequiredField,
    S: KeyValueStore + 'static,
    D: DraftField + 'static,
{
    let validation = validate_required(fields);
    if let Some(draft) = draft {
        draft.on_submit(cancelled_earlier || validation.is_blocked());
    }
    validation
}

#[cfg(feature = "hydrate")]
pub fn install(env: &std::rc::Rc<crate::env::page::PageEnv>) {
    use std::rc::Rc;

    use super::draft::{bind_form, page_drafts};
    use super::validation::{alert_blocked, required_fields};
    use crate::env::page::listen;

    let drafts = page_drafts(env);
    let path = env.path();
    let invalid_class: Rc<str> = Rc::from(env.config.selectors.invalid_class.as_str());

    for form in env.query_all(&env.config.selectors.form) {
        let draft = bind_form(env, &drafts, &path, &form);
        let page = Rc::clone(env);
        let scope = form.clone();
        let invalid_class = Rc::clone(&invalid_class);
        listen(&form, "submit", &env.reporter, move |event| {
            let fields = required_fields(&page, &scope, &invalid_class);
            if handle_submit(&fields, event.default_prevented(), draft.as_ref()).is_blocked() {
                event.prevent_default();
                alert_blocked(&page);
            }
        });
    }
}
