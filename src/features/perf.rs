//! Page load timing diagnostics.
//!
//! `loadEventEnd` is still zero while `load` listeners run, so the browser
//! installer measures one zero-delay timeout after the event.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadVerdict {
    Normal,
    Slow,
}

/// Milliseconds from navigation start to load end, if both marks are set.
pub fn load_time_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (navigation_start > 0.0 && load_event_end >= navigation_start).then(|| load_event_end - navigation_start)
}

pub fn verdict(elapsed_ms: f64, slow_ms: f64) -> LoadVerdict {
    if elapsed_ms > slow_ms { LoadVerdict::Slow } else { LoadVerdict::Normal }
}

/// Log the load time, plus a warning past `slow_ms`.
pub fn log_load_time(elapsed_ms: f64, slow_ms: f64) -> LoadVerdict {
    log::info!("page load time: {elapsed_ms:.0}ms");
    let verdict = verdict(elapsed_ms, slow_ms);
    if verdict == LoadVerdict::Slow {
        log::warn!("slow page load detected: {elapsed_ms:.0}ms > {slow_ms:.0}ms");
    }
    verdict
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use super::{load_time_ms, log_load_time};
    use crate::env::page::{PageEnv, listen};

    fn measure(env: &PageEnv) {
        let Some(performance) = env.window.performance() else {
            return;
        };
        let timing = performance.timing();
        match load_time_ms(timing.navigation_start(), timing.load_event_end()) {
            Some(elapsed) => {
                log_load_time(elapsed, env.config.slow_load_ms);
            }
            None => log::debug!("navigation timing incomplete; load time not logged"),
        }
    }

    fn schedule(env: &Rc<PageEnv>) {
        let page = Rc::clone(env);
        env.timers.set_timeout(0, Box::new(move || measure(&page)));
    }

    pub fn install(env: &Rc<PageEnv>) {
        if env.window.performance().is_none() {
            log::debug!("performance API unavailable; load timing off");
            return;
        }
        // The module may finish loading after `load` already fired.
        if env.document.ready_state() == "complete" {
            schedule(env);
            return;
        }
        let page = Rc::clone(env);
        listen(&env.window, "load", &env.reporter, move |_| schedule(&page));
    }
}

#[cfg(feature = "hydrate")]
pub use dom::install;
