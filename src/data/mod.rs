//! Access to the external systems that own the bot's data.
//!
//! The bot keeps no storage of its own. AGDB is the source of truth for players
//! and registered servers; this layer wraps its HTTP API behind the
//! `PlayerDirectory` trait so services can be exercised against fakes.

pub mod player_directory;
