//! String key-value storage capability.
//!
//! The browser build wraps `localStorage`; tests share one [`MemoryStore`]
//! between several "tabs" to reproduce last-writer-wins races.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{EnhanceError, Reporter};

pub trait KeyValueStore {
    /// Stored value for `key`. Backends report a failed read and return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`EnhanceError::Storage`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), EnhanceError>;

    /// # Errors
    ///
    /// Returns [`EnhanceError::Storage`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), EnhanceError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), EnhanceError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), EnhanceError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Resolve a backend read. A failed read is reported and reads as absent.
pub fn settle_read(result: Result<Option<String>, EnhanceError>, reporter: &Reporter) -> Option<String> {
    match result {
        Ok(value) => value,
        Err(err) => {
            reporter(&err);
            None
        }
    }
}

/// `window.localStorage` backed store.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
    reporter: Reporter,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// `None` when the page has no usable `localStorage` (privacy modes,
    /// sandboxed frames). Read failures later go to `reporter`.
    pub fn from_window(window: &web_sys::Window, reporter: Reporter) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage, reporter }),
            Ok(None) | Err(_) => None,
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> EnhanceError {
    EnhanceError::Storage { op, key: key.to_owned(), reason: crate::net::js_error_text(err) }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        settle_read(self.storage.get_item(key).map_err(|err| storage_error("get", key, &err)), &self.reporter)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        self.storage.set_item(key, value).map_err(|err| storage_error("set", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), EnhanceError> {
        self.storage.remove_item(key).map_err(|err| storage_error("remove", key, &err))
    }
}
