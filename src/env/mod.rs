//! Page environment capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never reach for `window` or `document` directly for time or
//! storage. They take a [`timers::Timers`] and a [`storage::KeyValueStore`],
//! so tests drive a virtual clock and an in-memory store while the browser
//! build plugs in `gloo-timers` and `localStorage`.

pub mod storage;
pub mod timers;
pub mod virtual_timers;

#[cfg(feature = "hydrate")]
pub mod browser_timers;
#[cfg(feature = "hydrate")]
pub mod page;
