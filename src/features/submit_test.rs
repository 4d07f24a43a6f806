use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::env::storage::MemoryStore;
use crate::error::CollectingReporter;
use crate::features::draft::DraftStore;

// =============================================================
// Helpers
// =============================================================

struct FakeField {
    value: String,
    invalid: Cell<bool>,
}

impl FakeField {
    fn new(value: &str) -> Self {
        Self { value: value.to_owned(), invalid: Cell::new(false) }
    }
}

impl RequiredField for FakeField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_invalid(&self, invalid: bool) {
        self.invalid.set(invalid);
    }
}

#[derive(Default)]
struct FakeArea {
    text: RefCell<String>,
}

impl DraftField for FakeArea {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }
}

fn saved_draft(store: &Rc<MemoryStore>, path: &str, text: &str) -> DraftBinding<Rc<MemoryStore>, FakeArea> {
    let drafts = Rc::new(DraftStore::new(Rc::clone(store), "draft_", CollectingReporter::new().reporter()));
    let area = Rc::new(FakeArea::default());
    let (binding, _) = DraftBinding::attach(drafts, path, Rc::clone(&area));
    area.set_text(text);
    binding.save_now();
    binding
}

// =============================================================
// handle_submit
// =============================================================

#[test]
fn blocked_submit_keeps_draft() {
    let store = Rc::new(MemoryStore::new());
    let draft = saved_draft(&store, "/t/1", "reply in progress");
    let fields = [FakeField::new(""), FakeField::new("body")];

    let outcome = handle_submit(&fields, false, Some(&draft));

    assert_eq!(outcome, Validation::Blocked { invalid: 1 });
    assert!(fields[0].invalid.get());
    assert_eq!(store.get("draft_/t/1").as_deref(), Some("reply in progress"));
}

#[test]
fn valid_submit_clears_draft() {
    let store = Rc::new(MemoryStore::new());
    let draft = saved_draft(&store, "/t/2", "finished reply");
    let fields = [FakeField::new("subject"), FakeField::new("body")];

    assert_eq!(handle_submit(&fields, false, Some(&draft)), Validation::Valid);
    assert_eq!(store.get("draft_/t/2"), None);
}

#[test]
fn submit_cancelled_elsewhere_keeps_draft() {
    let store = Rc::new(MemoryStore::new());
    let draft = saved_draft(&store, "/t/3", "keep");
    let fields = [FakeField::new("subject")];

    assert_eq!(handle_submit(&fields, true, Some(&draft)), Validation::Valid);
    assert_eq!(store.get("draft_/t/3").as_deref(), Some("keep"));
}

#[test]
fn form_without_draft_still_validates() {
    let fields = [FakeField::new(" ")];
    let outcome = handle_submit::<_, Rc<MemoryStore>, FakeArea>(&fields, false, None);
    assert!(outcome.is_blocked());
    assert!(fields[0].invalid.get());
}
