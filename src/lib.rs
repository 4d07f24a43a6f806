//! # forum-enhance
//!
//! Progressive-enhancement behaviors for the server-rendered forum pages,
//! compiled to WebAssembly and loaded once the page's markup is parsed.
//!
//! Every behavior is independent: it looks up its markup by selector and
//! silently stays off when nothing matches. Behavior logic lives in plain
//! Rust over small capability traits (timers, storage, element views) so it
//! runs and is tested natively; the `hydrate` feature adds the `web-sys`
//! bindings that wire those traits to the real page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Typed configuration with forum defaults |
//! | [`error`] | Failure kinds and the injectable reporter |
//! | [`session`] | Signed-in context handed over by the host page |
//! | [`env`] | Page environment capabilities (timers, storage) |
//! | [`net`] | Unread-count endpoint and service worker registration |
//! | [`features`] | One module per page behavior |
//! | [`util`] | Debounce / throttle helpers |
//! | `boot` | `init` entry point and the global namespace (hydrate only) |

pub mod config;
pub mod env;
pub mod error;
pub mod features;
pub mod net;
pub mod session;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;
