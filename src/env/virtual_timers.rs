//! Deterministic virtual clock implementing [`Timers`].
//!
//! Nothing fires until [`VirtualTimers::advance`] moves the clock. Due
//! callbacks run in `(due time, id)` order and may schedule or clear other
//! timers while running.

#[cfg(test)]
#[path = "virtual_timers_test.rs"]
mod virtual_timers_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::timers::{TimerId, Timers};

enum Callback {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    /// Zero for one-shot timers.
    period: u64,
    /// `None` while the callback is running.
    callback: Option<Callback>,
}

#[derive(Default)]
pub struct VirtualTimers {
    now: Cell<u64>,
    next_id: Cell<u64>,
    entries: RefCell<BTreeMap<TimerId, Entry>>,
}

impl VirtualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of scheduled timers, repeating ones included.
    pub fn pending(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Move the clock forward, firing everything due on the way.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get().saturating_add(ms);
        while let Some(id) = self.next_due(target) {
            self.fire(id);
        }
        self.now.set(target);
    }

    fn next_due(&self, target: u64) -> Option<TimerId> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, entry)| entry.callback.is_some() && entry.due <= target)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)
    }

    fn fire(&self, id: TimerId) {
        let (due, period, callback) = {
            let mut entries = self.entries.borrow_mut();
            let Some(entry) = entries.get_mut(&id) else {
                return;
            };
            (entry.due, entry.period, entry.callback.take())
        };
        self.now.set(due);

        match callback {
            Some(Callback::Once(callback)) => {
                self.entries.borrow_mut().remove(&id);
                callback();
            }
            Some(Callback::Repeat(mut callback)) => {
                if let Some(entry) = self.entries.borrow_mut().get_mut(&id) {
                    entry.due = due + period;
                }
                callback();
                // A callback that cleared its own interval removed the entry.
                if let Some(entry) = self.entries.borrow_mut().get_mut(&id) {
                    entry.callback = Some(Callback::Repeat(callback));
                }
            }
            None => {}
        }
    }

    fn insert(&self, delay_ms: u32, period: u64, callback: Callback) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let due = self.now.get() + u64::from(delay_ms);
        self.entries.borrow_mut().insert(id, Entry { due, period, callback: Some(callback) });
        id
    }
}

impl Timers for VirtualTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        self.insert(delay_ms, 0, Callback::Once(callback))
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId {
        // Zero-period intervals would spin forever inside one advance.
        let period = u64::from(period_ms.max(1));
        self.insert(period_ms.max(1), period, Callback::Repeat(callback))
    }

    fn clear(&self, id: TimerId) {
        self.entries.borrow_mut().remove(&id);
    }
}
