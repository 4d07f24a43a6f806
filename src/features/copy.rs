//! Copy buttons for code blocks.
//!
//! Each `pre code` block at load gets one button in its `pre`. A successful
//! clipboard write shows the confirmation label for `copy_feedback_ms`;
//! a rejected write only reaches the reporter.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use std::rc::Rc;

use crate::config::Messages;
use crate::env::timers::Timers;

pub trait ButtonLabel {
    fn set_label(&self, text: &str);
}

/// Swap to the confirmation label and schedule the revert.
pub fn show_copied<L: ButtonLabel + 'static>(label: &Rc<L>, timers: &Rc<dyn Timers>, messages: &Messages, feedback_ms: u32) {
    label.set_label(&messages.copied_label);
    let label = Rc::clone(label);
    let copy_label = messages.copy_label.clone();
    timers.set_timeout(feedback_ms, Box::new(move || label.set_label(&copy_label)));
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Clipboard, Element, HtmlElement};

    use super::{ButtonLabel, show_copied};
    use crate::env::page::{PageEnv, listen, report_dom};
    use crate::error::EnhanceError;
    use crate::net::js_error_text;

    struct DomButton(Element);

    impl ButtonLabel for DomButton {
        fn set_label(&self, text: &str) {
            self.0.set_text_content(Some(text));
        }
    }

    fn copy_block(env: &Rc<PageEnv>, block: &Element, button: &Rc<DomButton>) {
        let text = block.text_content().unwrap_or_default();
        // Read reflectively: insecure contexts expose no clipboard at all.
        let clipboard = match js_sys::Reflect::get(&env.window.navigator(), &JsValue::from_str("clipboard")) {
            Ok(value) => value.dyn_ref::<Clipboard>().cloned(),
            Err(_) => None,
        };
        let Some(clipboard) = clipboard else {
            (env.reporter)(&EnhanceError::Clipboard("clipboard unavailable".to_owned()));
            return;
        };
        let promise = clipboard.write_text(&text);
        let env = Rc::clone(env);
        let button = Rc::clone(button);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => show_copied(&button, &env.timers, &env.messages, env.config.copy_feedback_ms),
                Err(err) => (env.reporter)(&EnhanceError::Clipboard(js_error_text(&err))),
            }
        });
    }

    fn inject_button(env: &Rc<PageEnv>, block: Element) -> Result<(), JsValue> {
        let Some(container) = block.parent_element() else {
            return Ok(());
        };
        let button = env.document.create_element("button")?;
        button.set_class_name(&env.config.selectors.copy_button_class);
        button.set_text_content(Some(&env.messages.copy_label));
        button.set_attribute("type", "button")?;
        button.set_attribute("style", &env.config.copy_button_style)?;
        if let Some(container) = container.dyn_ref::<HtmlElement>() {
            container.style().set_property("position", "relative")?;
        }
        container.append_child(&button)?;

        let label = Rc::new(DomButton(button.clone()));
        let page = Rc::clone(env);
        listen(&button, "click", &env.reporter, move |_| copy_block(&page, &block, &label));
        Ok(())
    }

    pub fn install(env: &Rc<PageEnv>) {
        for block in env.query_all(&env.config.selectors.code_block) {
            report_dom(&env.reporter, "copy button", inject_button(env, block));
        }
    }
}

#[cfg(feature = "hydrate")]
pub use dom::install;
