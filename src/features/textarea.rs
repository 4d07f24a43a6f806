//! Textareas grow with their content.

#[cfg(test)]
#[path = "textarea_test.rs"]
mod textarea_test;

/// Height in px after an input event: the content height, never below `min_px`.
pub fn auto_height(scroll_height: i32, min_px: i32) -> i32 {
    scroll_height.max(min_px)
}

#[cfg(feature = "hydrate")]
pub fn install(env: &std::rc::Rc<crate::env::page::PageEnv>) {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::env::page::{listen, report_dom};

    let min_px = env.config.textarea_min_height_px;
    for element in env.query_all(&env.config.selectors.textarea) {
        let Some(area) = element.dyn_ref::<HtmlElement>().cloned() else {
            continue;
        };
        let reporter = std::rc::Rc::clone(&env.reporter);
        listen(&element, "input", &env.reporter, move |_| {
            let style = area.style();
            report_dom(&reporter, "textarea height", style.set_property("height", "auto"));
            let height = auto_height(area.scroll_height(), min_px);
            report_dom(&reporter, "textarea height", style.set_property("height", &format!("{height}px")));
        });
    }
}
