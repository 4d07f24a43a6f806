use std::cell::Cell;

use super::*;

#[derive(Default)]
struct FakeMenu {
    active: Cell<bool>,
    writes: Cell<u32>,
}

impl ActiveFlag for FakeMenu {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
        self.writes.set(self.writes.get() + 1);
    }
}

#[test]
fn toggle_flips_state() {
    let menu = FakeMenu::default();
    on_toggle_click(&menu);
    assert!(menu.is_active());
    on_toggle_click(&menu);
    assert!(!menu.is_active());
}

#[test]
fn toggle_click_bubbling_to_page_keeps_menu_open() {
    let menu = FakeMenu::default();
    on_toggle_click(&menu);
    on_page_click(&menu, true, false);
    assert!(menu.is_active());
}

#[test]
fn click_inside_menu_keeps_it_open() {
    let menu = FakeMenu::default();
    menu.set_active(true);
    on_page_click(&menu, false, true);
    assert!(menu.is_active());
}

#[test]
fn click_outside_closes_open_menu() {
    let menu = FakeMenu::default();
    menu.set_active(true);
    on_page_click(&menu, false, false);
    assert!(!menu.is_active());
}

#[test]
fn click_outside_closed_menu_touches_nothing() {
    let menu = FakeMenu::default();
    on_page_click(&menu, false, false);
    assert_eq!(menu.writes.get(), 0);
}
