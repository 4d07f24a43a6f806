//! Timer capability and cancellable periodic tasks.

use std::rc::Rc;

/// Opaque handle for a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One-shot and repeating callbacks on the page event loop.
///
/// Implementations must not hold internal borrows while running a
/// callback: callbacks routinely schedule or clear other timers.
pub trait Timers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId;
    /// Cancel a pending timeout or interval. Unknown ids are ignored.
    fn clear(&self, id: TimerId);
}

/// Stop handle for a task started with [`every`].
///
/// Dropping the handle leaves the task running for the page lifetime.
pub struct TaskHandle {
    timers: Rc<dyn Timers>,
    id: TimerId,
}

impl TaskHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn stop(self) {
        self.timers.clear(self.id);
    }
}

/// Run `tick` every `period_ms`, first after one full period.
pub fn every(timers: &Rc<dyn Timers>, period_ms: u32, tick: impl FnMut() + 'static) -> TaskHandle {
    let id = timers.set_interval(period_ms, Box::new(tick));
    TaskHandle { timers: Rc::clone(timers), id }
}
