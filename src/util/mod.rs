//! Small helpers shared with other page scripts.

pub mod rate_limit;
