//! Required-field check on every form submit.
//!
//! Runs in full on each attempt: blank fields (after trimming) get the
//! invalid class, filled ones lose it, and any blank field cancels the
//! submit behind a blocking alert.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub trait RequiredField {
    fn value(&self) -> String;
    fn set_invalid(&self, invalid: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Blocked { invalid: usize },
}

impl Validation {
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Mark every field and tell whether the submit may proceed.
pub fn validate_required<F: RequiredField>(fields: &[F]) -> Validation {
    let mut invalid = 0;
    for field in fields {
        let blank = field.value().trim().is_empty();
        field.set_invalid(blank);
        if blank {
            invalid += 1;
        }
    }
    if invalid == 0 { Validation::Valid } else { Validation::Blocked { invalid } }
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

    use super::RequiredField;
    use crate::env::page::{PageEnv, query_all_in, report_dom};
    use crate::error::Reporter;

    pub(crate) struct DomField {
        element: Element,
        invalid_class: Rc<str>,
        reporter: Reporter,
    }

    impl DomField {
        /// Only form controls carry a value; other `[required]` elements are skipped.
        fn wrap(element: Element, invalid_class: &Rc<str>, reporter: &Reporter) -> Option<Self> {
            let is_control = element.is_instance_of::<HtmlInputElement>()
                || element.is_instance_of::<HtmlTextAreaElement>()
                || element.is_instance_of::<HtmlSelectElement>();
            is_control.then(|| Self { element, invalid_class: Rc::clone(invalid_class), reporter: Rc::clone(reporter) })
        }
    }

    impl RequiredField for DomField {
        fn value(&self) -> String {
            if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
                return input.value();
            }
            if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
                return area.value();
            }
            if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
                return select.value();
            }
            String::new()
        }

        fn set_invalid(&self, invalid: bool) {
            let classes = self.element.class_list();
            let result = if invalid { classes.add_1(&self.invalid_class) } else { classes.remove_1(&self.invalid_class) };
            report_dom(&self.reporter, "invalid class", result);
        }
    }

    /// Required controls inside `form`, looked up fresh on every submit.
    pub(crate) fn required_fields(page: &PageEnv, form: &Element, invalid_class: &Rc<str>) -> Vec<DomField> {
        query_all_in(form, &page.config.selectors.required_field, &page.reporter)
            .into_iter()
            .filter_map(|element| DomField::wrap(element, invalid_class, &page.reporter))
            .collect()
    }

    /// Blocking notice for a submit stopped by blank required fields.
    pub(crate) fn alert_blocked(page: &PageEnv) {
        report_dom(&page.reporter, "alert", page.window.alert_with_message(&page.messages.required_fields));
    }
}

#[cfg(feature = "hydrate")]
pub(crate) use dom::{alert_blocked, required_fields};
