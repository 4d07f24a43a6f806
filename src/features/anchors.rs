//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Selector for the link's target, `None` for a bare `#` or a non-fragment
/// href.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(feature = "hydrate")]
pub fn install(env: &std::rc::Rc<crate::env::page::PageEnv>) {
    use std::rc::Rc;

    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    use crate::env::page::listen;

    for link in env.query_all(&env.config.selectors.anchor_link) {
        let page = Rc::clone(env);
        let anchor = link.clone();
        listen(&link, "click", &env.reporter, move |event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            if let Some(target) = page.query(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}
