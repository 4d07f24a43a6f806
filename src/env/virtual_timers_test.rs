use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::env::timers::every;

fn log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn timeout_fires_once_when_due() {
    let timers = VirtualTimers::new();
    let seen = log();
    let seen_cb = Rc::clone(&seen);
    timers.set_timeout(100, Box::new(move || seen_cb.borrow_mut().push("fired".to_owned())));

    timers.advance(99);
    assert!(seen.borrow().is_empty());
    timers.advance(1);
    assert_eq!(seen.borrow().len(), 1);
    timers.advance(1_000);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn zero_delay_timeout_fires_on_zero_advance() {
    let timers = VirtualTimers::new();
    let seen = log();
    let seen_cb = Rc::clone(&seen);
    timers.set_timeout(0, Box::new(move || seen_cb.borrow_mut().push("now".to_owned())));
    timers.advance(0);
    assert_eq!(*seen.borrow(), vec!["now".to_owned()]);
}

#[test]
fn cleared_timeout_never_fires() {
    let timers = VirtualTimers::new();
    let seen = log();
    let seen_cb = Rc::clone(&seen);
    let id = timers.set_timeout(10, Box::new(move || seen_cb.borrow_mut().push("x".to_owned())));
    timers.clear(id);
    timers.advance(50);
    assert!(seen.borrow().is_empty());
}

#[test]
fn callbacks_run_in_due_order_and_see_their_due_time() {
    let timers = Rc::new(VirtualTimers::new());
    let seen = log();
    for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
        let seen_cb = Rc::clone(&seen);
        let clock = Rc::clone(&timers);
        timers.set_timeout(delay, Box::new(move || seen_cb.borrow_mut().push(format!("{name}@{}", clock.now()))));
    }
    timers.advance(100);
    assert_eq!(*seen.borrow(), vec!["a@10".to_owned(), "b@20".to_owned(), "c@30".to_owned()]);
    assert_eq!(timers.now(), 100);
}

#[test]
fn interval_repeats_until_stopped() {
    let concrete = Rc::new(VirtualTimers::new());
    let shared: Rc<dyn Timers> = concrete.clone();
    let ticks = Rc::new(RefCell::new(0_u32));
    let ticks_cb = Rc::clone(&ticks);
    let handle = every(&shared, 30_000, move || *ticks_cb.borrow_mut() += 1);

    concrete.advance(29_999);
    assert_eq!(*ticks.borrow(), 0);
    concrete.advance(1);
    assert_eq!(*ticks.borrow(), 1);
    concrete.advance(60_000);
    assert_eq!(*ticks.borrow(), 3);

    handle.stop();
    concrete.advance(120_000);
    assert_eq!(*ticks.borrow(), 3);
    assert_eq!(concrete.pending(), 0);
}

#[test]
fn callback_may_schedule_more_timers() {
    let timers = Rc::new(VirtualTimers::new());
    let seen = log();
    let seen_cb = Rc::clone(&seen);
    let inner_timers = Rc::clone(&timers);
    timers.set_timeout(
        10,
        Box::new(move || {
            let seen_inner = Rc::clone(&seen_cb);
            inner_timers.set_timeout(5, Box::new(move || seen_inner.borrow_mut().push("nested".to_owned())));
        }),
    );
    timers.advance(15);
    assert_eq!(*seen.borrow(), vec!["nested".to_owned()]);
}

#[test]
fn interval_may_clear_itself() {
    let timers = Rc::new(VirtualTimers::new());
    let ticks = Rc::new(RefCell::new(0_u32));
    let id_slot = Rc::new(RefCell::new(None));
    let ticks_cb = Rc::clone(&ticks);
    let id_cb = Rc::clone(&id_slot);
    let timers_cb = Rc::clone(&timers);
    let id = timers.set_interval(
        10,
        Box::new(move || {
            *ticks_cb.borrow_mut() += 1;
            if let Some(id) = *id_cb.borrow() {
                timers_cb.clear(id);
            }
        }),
    );
    *id_slot.borrow_mut() = Some(id);
    timers.advance(100);
    assert_eq!(*ticks.borrow(), 1);
    assert_eq!(timers.pending(), 0);
}
