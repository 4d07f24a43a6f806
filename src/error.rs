//! Failure kinds for page behaviors.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Behaviors hand failures to a [`Reporter`] and
//! carry on, so tests can assert on failure paths while the browser build
//! just logs them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// The configuration JSON handed to `init` could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// The unread-count request never produced a response.
    #[error("unread count request failed: {0}")]
    UnreadRequest(String),

    /// The unread-count endpoint answered with a non-success status.
    #[error("unread count request failed: status {status}")]
    UnreadStatus { status: u16 },

    /// The unread-count body was not `{"unread_count": <integer>}`.
    #[error("unread count response parse failed: {0}")]
    UnreadParse(String),

    /// Persistent storage rejected a read or write.
    #[error("storage {op} failed for {key}: {reason}")]
    Storage { op: &'static str, key: String, reason: String },

    /// The clipboard write promise rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// Service worker registration rejected.
    #[error("service worker registration failed: {0}")]
    WorkerRegistration(String),

    /// A DOM call the behavior depends on threw.
    #[error("dom {context}: {reason}")]
    Dom { context: &'static str, reason: String },
}

/// Sink for non-fatal failures.
pub type Reporter = Rc<dyn Fn(&EnhanceError)>;

/// Default reporter: one `warn` line per failure.
pub fn log_reporter() -> Reporter {
    Rc::new(|err: &EnhanceError| log::warn!("{err}"))
}

/// Reporter that keeps every failure message, for assertions.
#[derive(Clone, Default)]
pub struct CollectingReporter {
    seen: Rc<std::cell::RefCell<Vec<String>>>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter handle feeding this collector.
    pub fn reporter(&self) -> Reporter {
        let seen = Rc::clone(&self.seen);
        Rc::new(move |err: &EnhanceError| seen.borrow_mut().push(err.to_string()))
    }

    /// Messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}
