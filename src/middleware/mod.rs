//! Checks applied to a command invocation before its handler runs.

pub mod auth;
