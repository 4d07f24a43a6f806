//! `gloo-timers` backed [`Timers`] for the browser build.
//!
//! gloo handles cancel their JS timer and free the closure on drop, so the
//! handles are parked here until cleared. A timeout flags itself as fired
//! once its callback returns instead of removing its own handle: dropping a
//! closure from inside its own invocation is not allowed. Fired handles are
//! swept on the next schedule or clear.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use super::timers::{TimerId, Timers};

enum Handle {
    Timeout { _timeout: Timeout, fired: Rc<Cell<bool>> },
    Interval(Interval),
}

impl Handle {
    fn is_spent(&self) -> bool {
        match self {
            Self::Timeout { fired, .. } => fired.get(),
            Self::Interval(_) => false,
        }
    }
}

#[derive(Default)]
pub struct BrowserTimers {
    next_id: Cell<u64>,
    handles: RefCell<HashMap<TimerId, Handle>>,
}

impl BrowserTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        id
    }

    fn sweep(&self) {
        // Spent timeouts are dropped outside the borrow.
        let spent: Vec<Handle> = {
            let mut handles = self.handles.borrow_mut();
            let ids: Vec<TimerId> = handles.iter().filter(|(_, h)| h.is_spent()).map(|(id, _)| *id).collect();
            ids.into_iter().filter_map(|id| handles.remove(&id)).collect()
        };
        drop(spent);
    }
}

impl Timers for BrowserTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        self.sweep();
        let id = self.allocate();
        let fired = Rc::new(Cell::new(false));
        let fired_cb = Rc::clone(&fired);
        let timeout = Timeout::new(delay_ms, move || {
            callback();
            fired_cb.set(true);
        });
        self.handles.borrow_mut().insert(id, Handle::Timeout { _timeout: timeout, fired });
        id
    }

    fn set_interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> TimerId {
        self.sweep();
        let id = self.allocate();
        let interval = Interval::new(period_ms, move || callback());
        self.handles.borrow_mut().insert(id, Handle::Interval(interval));
        id
    }

    fn clear(&self, id: TimerId) {
        let removed = self.handles.borrow_mut().remove(&id);
        drop(removed);
        self.sweep();
    }
}
