//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_team(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, team, poll) =
//!         factory::helpers::create_poll_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .name("CustomUser")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let member = factory::create_team_manager(&db, team.id, user.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `team` - Create team entities
//! - `team_member` - Create team membership entities
//! - `poll` - Create poll entities
//! - `poll_slot` - Create poll slot entities
//! - `poll_response` - Create poll response entities
//! - `notification` - Create notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod notification;
pub mod poll;
pub mod poll_response;
pub mod poll_slot;
pub mod team;
pub mod team_member;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use notification::create_notification;
pub use poll::create_poll;
pub use poll_response::{create_poll_response, create_poll_response_with};
pub use poll_slot::create_poll_slot;
pub use team::create_team;
pub use team_member::{create_team_manager, create_team_member};
pub use user::{create_user, create_user_with_email};
