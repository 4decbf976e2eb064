//! Factories for AGDB wire records.
//!
//! Factories produce `serde_json::Value`s shaped exactly like the AGDB API responses,
//! with sensible defaults that can be overridden per test.

pub mod helpers;
pub mod player;
pub mod server;
