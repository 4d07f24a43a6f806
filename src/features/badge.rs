//! Unread-message badge and its polling task.
//!
//! Signed-in pages refresh the badge every poll interval, starting one full
//! interval after load. A failed refresh is reported and the badge keeps
//! whatever it showed before.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use std::rc::Rc;

use crate::env::timers::{TaskHandle, Timers, every};
use crate::error::Reporter;
use crate::net::unread::UnreadSource;
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeState {
    Hidden,
    Visible(String),
}

impl BadgeState {
    #[must_use]
    pub fn from_count(count: u32) -> Self {
        if count > 0 { Self::Visible(count.to_string()) } else { Self::Hidden }
    }
}

pub trait BadgeView {
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);

    /// Hiding leaves the previous text in place.
    fn render(&self, state: &BadgeState) {
        match state {
            BadgeState::Hidden => self.set_visible(false),
            BadgeState::Visible(text) => {
                self.set_text(text);
                self.set_visible(true);
            }
        }
    }
}

/// Fetch one count and turn it into a badge state.
///
/// Returns `None` after reporting when the cycle failed.
pub async fn fetch_badge_state(source: &dyn UnreadSource, reporter: &Reporter) -> Option<BadgeState> {
    match source.fetch_unread().await {
        Ok(count) => Some(BadgeState::from_count(count)),
        Err(err) => {
            reporter(&err);
            None
        }
    }
}

/// Start the periodic refresh for signed-in sessions.
///
/// Anonymous sessions get no task at all.
pub fn start_polling(
    session: Session,
    timers: &Rc<dyn Timers>,
    period_ms: u32,
    tick: impl FnMut() + 'static,
) -> Option<TaskHandle> {
    if !session.signed_in {
        log::debug!("anonymous session; unread polling off");
        return None;
    }
    Some(every(timers, period_ms, tick))
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    use super::{BadgeView, fetch_badge_state, start_polling};
    use crate::env::page::{PageEnv, report_dom};
    use crate::env::timers::TaskHandle;
    use crate::net::unread::{HttpUnreadSource, UnreadSource};
    use crate::session::Session;

    struct DomBadge {
        element: Element,
        reporter: crate::error::Reporter,
    }

    impl BadgeView for DomBadge {
        fn set_text(&self, text: &str) {
            self.element.set_text_content(Some(text));
        }

        fn set_visible(&self, visible: bool) {
            let Some(html) = self.element.dyn_ref::<HtmlElement>() else {
                return;
            };
            let display = if visible { "flex" } else { "none" };
            report_dom(&self.reporter, "badge display", html.style().set_property("display", display));
        }
    }

    /// Run one refresh cycle against the page's badge.
    pub fn refresh(env: &Rc<PageEnv>, source: &Rc<dyn UnreadSource>) {
        let env = Rc::clone(env);
        let source = Rc::clone(source);
        wasm_bindgen_futures::spawn_local(async move {
            let Some(state) = fetch_badge_state(&*source, &env.reporter).await else {
                return;
            };
            if let Some(element) = env.query(&env.config.selectors.unread_badge) {
                DomBadge { element, reporter: Rc::clone(&env.reporter) }.render(&state);
            }
        });
    }

    /// The same-origin source for this page's config.
    pub fn http_source(env: &PageEnv) -> Rc<dyn UnreadSource> {
        Rc::new(HttpUnreadSource::new(env.config.unread_endpoint.clone()))
    }

    pub fn install(env: &Rc<PageEnv>, session: Session, source: Rc<dyn UnreadSource>) -> Option<TaskHandle> {
        let env_tick = Rc::clone(env);
        start_polling(session, &env.timers, env.config.poll_interval_ms, move || refresh(&env_tick, &source))
    }
}

#[cfg(feature = "hydrate")]
pub use dom::{http_source, install, refresh};
