//! Debounce and throttle wrappers.
//!
//! Both sit on a [`Timers`] so the same code runs against `gloo-timers` in
//! the page and a virtual clock in tests. The browser build re-exports them
//! to JavaScript through the global namespace (see `boot`).

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::env::timers::{TimerId, Timers};

/// Wrap `f` so only the last call in a burst fires, `wait_ms` after it.
///
/// Every call cancels the pending one and reschedules with its own
/// argument.
pub fn debounce<A: 'static>(timers: Rc<dyn Timers>, wait_ms: u32, f: impl Fn(A) + 'static) -> impl Fn(A) {
    let f = Rc::new(f);
    let pending: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
    move |arg: A| {
        if let Some(id) = pending.take() {
            timers.clear(id);
        }
        let f = Rc::clone(&f);
        let pending_cb = Rc::clone(&pending);
        let id = timers.set_timeout(
            wait_ms,
            Box::new(move || {
                pending_cb.set(None);
                f(arg);
            }),
        );
        pending.set(Some(id));
    }
}

/// Wrap `f` so it runs at most once per `limit_ms`, on the leading edge.
///
/// Calls landing inside the window are dropped, not queued.
pub fn throttle<A: 'static>(timers: Rc<dyn Timers>, limit_ms: u32, f: impl Fn(A) + 'static) -> impl Fn(A) {
    let in_flight = Rc::new(Cell::new(false));
    move |arg: A| {
        if in_flight.get() {
            return;
        }
        f(arg);
        in_flight.set(true);
        let in_flight_cb = Rc::clone(&in_flight);
        timers.set_timeout(limit_ms, Box::new(move || in_flight_cb.set(false)));
    }
}
