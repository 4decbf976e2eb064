//! Domain models shared by the services and the Discord layer.
//!
//! Models are plain value types. Wire types for the AGDB API deserialize straight
//! into them, and the Discord-facing types (`Notice`, `Invocation`) are
//! kept free of serenity builders so the services can be tested without a gateway.

pub mod command;
pub mod notice;
pub mod player;
pub mod roster;
pub mod server;
