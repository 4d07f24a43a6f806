//! Mobile navigation toggle.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The menu's "active" presentation flag.
pub trait ActiveFlag {
    fn is_active(&self) -> bool;
    fn set_active(&self, active: bool);
}

pub fn on_toggle_click(menu: &impl ActiveFlag) {
    menu.set_active(!menu.is_active());
}

/// Any click outside both toggle and menu closes an open menu.
pub fn on_page_click(menu: &impl ActiveFlag, in_toggle: bool, in_menu: bool) {
    if !in_toggle && !in_menu && menu.is_active() {
        menu.set_active(false);
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, Node};

    use super::{ActiveFlag, on_page_click, on_toggle_click};
    use crate::env::page::{PageEnv, listen, report_dom};
    use crate::error::Reporter;

    struct DomMenu {
        element: Element,
        class: String,
        reporter: Reporter,
    }

    impl ActiveFlag for DomMenu {
        fn is_active(&self) -> bool {
            self.element.class_list().contains(&self.class)
        }

        fn set_active(&self, active: bool) {
            let classes = self.element.class_list();
            let result = if active { classes.add_1(&self.class) } else { classes.remove_1(&self.class) };
            report_dom(&self.reporter, "nav class", result);
        }
    }

    fn holds(container: &Element, target: Option<&Node>) -> bool {
        container.contains(target)
    }

    pub fn install(env: &Rc<PageEnv>) {
        let selectors = &env.config.selectors;
        let (Some(toggle), Some(menu)) = (env.query(&selectors.nav_toggle), env.query(&selectors.nav_menu)) else {
            return;
        };
        let menu = Rc::new(DomMenu {
            element: menu,
            class: selectors.nav_active_class.clone(),
            reporter: Rc::clone(&env.reporter),
        });

        let toggle_menu = Rc::clone(&menu);
        listen(&toggle, "click", &env.reporter, move |_| on_toggle_click(&*toggle_menu));

        listen(&env.document, "click", &env.reporter, move |event| {
            let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
            on_page_click(&*menu, holds(&toggle, target.as_ref()), holds(&menu.element, target.as_ref()));
        });
    }
}

#[cfg(feature = "hydrate")]
pub use dom::install;
