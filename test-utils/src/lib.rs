//! AGDB Bot Test Utils
//!
//! Provides shared testing utilities for the bot. The centrepiece is an in-process
//! fake of the AGDB player directory API, served by axum on an ephemeral local port,
//! so the real HTTP client can be tested end to end without network access.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for seeding the fake API and injecting failures
//! - **TestContext**: Running fake API with its base URL and request log
//! - **factory**: Builders for player and server JSON records
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::player::PlayerFactory};
//!
//! #[tokio::test]
//! async fn test_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_player(PlayerFactory::new().steam_id("76561198000000001"))
//!         .build()
//!         .await?;
//!
//!     // Point a PlayerDirectoryClient at test.base_url...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fake_api;
