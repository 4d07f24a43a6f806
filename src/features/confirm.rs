//! Delete confirmation and print buttons.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Whether a delete click must be cancelled.
///
/// `None` means the dialog could not be shown (blocked by the browser);
/// the delete is cancelled rather than run unconfirmed.
pub fn blocks_delete(confirmed: Option<bool>) -> bool {
    confirmed != Some(true)
}

#[cfg(feature = "hydrate")]
pub fn install(env: &std::rc::Rc<crate::env::page::PageEnv>) {
    use std::rc::Rc;

    use crate::env::page::{listen, report_dom};
    use crate::error::EnhanceError;
    use crate::net::js_error_text;

    for button in env.query_all(&env.config.selectors.delete_action) {
        let page = Rc::clone(env);
        listen(&button, "click", &env.reporter, move |event| {
            let confirmed = match page.window.confirm_with_message(&page.messages.confirm_delete) {
                Ok(answer) => Some(answer),
                Err(err) => {
                    (page.reporter)(&EnhanceError::Dom { context: "confirm", reason: js_error_text(&err) });
                    None
                }
            };
            if blocks_delete(confirmed) {
                event.prevent_default();
            }
        });
    }

    for button in env.query_all(&env.config.selectors.print_action) {
        let page = Rc::clone(env);
        listen(&button, "click", &env.reporter, move |_| {
            report_dom(&page.reporter, "print", page.window.print());
        });
    }
}
