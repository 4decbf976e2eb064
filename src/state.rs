//! Shared bot state.
//!
//! Built once at startup and handed to the event handler and the roster scheduler.
//! Both fields are reference counted, so cloning is cheap.

use std::sync::Arc;

use crate::{config::Config, data::player_directory::PlayerDirectory};

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// AGDB player directory, shared by every command and the roster job.
    pub directory: Arc<dyn PlayerDirectory>,
}

impl BotState {
    pub fn new(config: Config, directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            config: Arc::new(config),
            directory,
        }
    }
}
