//! Page behaviors, one module each.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its decision logic in plain functions over small
//! element traits and adds a hydrate-only `install` that binds the real
//! markup. Installers look up their selectors once at load; no matches means
//! the behavior stays off. Behaviors never talk to each other, except that
//! `submit` sequences validation and draft clearing in one listener.

pub mod anchors;
pub mod badge;
pub mod confirm;
pub mod copy;
pub mod draft;
pub mod lazy;
pub mod nav;
pub mod perf;
pub mod submit;
pub mod textarea;
pub mod validation;
