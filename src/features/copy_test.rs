use std::cell::RefCell;

use super::*;
use crate::env::virtual_timers::VirtualTimers;

#[derive(Default)]
struct FakeButton {
    label: RefCell<String>,
}

impl ButtonLabel for FakeButton {
    fn set_label(&self, text: &str) {
        *self.label.borrow_mut() = text.to_owned();
    }
}

fn setup() -> (Rc<VirtualTimers>, Rc<dyn Timers>, Rc<FakeButton>, Messages) {
    let clock = Rc::new(VirtualTimers::new());
    let timers: Rc<dyn Timers> = clock.clone();
    let messages = Messages::default();
    let button = Rc::new(FakeButton::default());
    button.set_label(&messages.copy_label);
    (clock, timers, button, messages)
}

#[test]
fn label_confirms_then_reverts_after_feedback_window() {
    let (clock, timers, button, messages) = setup();
    show_copied(&button, &timers, &messages, 2_000);
    assert_eq!(*button.label.borrow(), "Copied!");

    clock.advance(1_999);
    assert_eq!(*button.label.borrow(), "Copied!");
    clock.advance(1);
    assert_eq!(*button.label.borrow(), "Copy");
}

#[test]
fn german_labels_are_used_when_configured() {
    let (clock, timers, button, _) = setup();
    let messages = Messages::german();
    show_copied(&button, &timers, &messages, 2_000);
    assert_eq!(*button.label.borrow(), "Kopiert!");
    clock.advance(2_000);
    assert_eq!(*button.label.borrow(), "Kopieren");
}

#[test]
fn second_copy_is_reverted_by_first_timer() {
    let (clock, timers, button, messages) = setup();
    show_copied(&button, &timers, &messages, 2_000);
    clock.advance(1_500);
    show_copied(&button, &timers, &messages, 2_000);
    clock.advance(500);
    assert_eq!(*button.label.borrow(), "Copy");
    clock.advance(1_500);
    assert_eq!(*button.label.borrow(), "Copy");
    assert_eq!(clock.pending(), 0);
}
