//! Deferred image loading.
//!
//! Images carrying a deferred source are watched until they first reach
//! the viewport. At that point the real source is swapped in, the
//! placeholder class dropped, and the image is no longer observed.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

pub trait LazyTarget {
    fn deferred_src(&self) -> Option<String>;
    fn set_src(&self, src: &str);
    fn remove_class(&self, class: &str);
}

pub trait ViewportObserver<T> {
    fn unobserve(&self, target: &T);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Pending,
    Revealed,
}

/// Handle one intersection report for `target`.
pub fn handle_entry<T: LazyTarget>(
    target: &T,
    intersecting: bool,
    lazy_class: &str,
    observer: &impl ViewportObserver<T>,
) -> Reveal {
    if !intersecting {
        return Reveal::Pending;
    }
    reveal(target, lazy_class);
    observer.unobserve(target);
    Reveal::Revealed
}

/// Swap in the deferred source now, without waiting for the viewport.
pub fn reveal<T: LazyTarget>(target: &T, lazy_class: &str) {
    if let Some(src) = target.deferred_src() {
        target.set_src(&src);
    }
    target.remove_class(lazy_class);
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

    use super::{LazyTarget, ViewportObserver, handle_entry, reveal};
    use crate::env::page::{PageEnv, report_dom};
    use crate::error::{EnhanceError, Reporter};
    use crate::net::js_error_text;

    struct DomImage {
        element: Element,
        src_attr: Rc<str>,
        reporter: Reporter,
    }

    impl LazyTarget for DomImage {
        fn deferred_src(&self) -> Option<String> {
            self.element.get_attribute(&self.src_attr)
        }

        fn set_src(&self, src: &str) {
            report_dom(&self.reporter, "lazy src", self.element.set_attribute("src", src));
        }

        fn remove_class(&self, class: &str) {
            report_dom(&self.reporter, "lazy class", self.element.class_list().remove_1(class));
        }
    }

    impl ViewportObserver<DomImage> for IntersectionObserver {
        fn unobserve(&self, target: &DomImage) {
            IntersectionObserver::unobserve(self, &target.element);
        }
    }

    pub fn install(env: &Rc<PageEnv>) {
        let selectors = &env.config.selectors;
        let images = env.query_all(&selectors.lazy_image);
        if images.is_empty() {
            return;
        }
        let src_attr: Rc<str> = Rc::from(selectors.lazy_src_attr.as_str());
        let lazy_class = selectors.lazy_class.clone();
        let reporter = Rc::clone(&env.reporter);

        let callback_class = lazy_class.clone();
        let callback_attr = Rc::clone(&src_attr);
        let callback_reporter = Rc::clone(&reporter);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let image = DomImage {
                        element: entry.target(),
                        src_attr: Rc::clone(&callback_attr),
                        reporter: Rc::clone(&callback_reporter),
                    };
                    handle_entry(&image, entry.is_intersecting(), &callback_class, &observer);
                }
            },
        );

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                // No observer support: load everything up front.
                reporter(&EnhanceError::Dom { context: "IntersectionObserver", reason: js_error_text(&err) });
                for element in images {
                    reveal(&DomImage { element, src_attr: Rc::clone(&src_attr), reporter: Rc::clone(&reporter) }, &lazy_class);
                }
                return;
            }
        };
        callback.forget();
        for image in &images {
            observer.observe(image);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use dom::install;
