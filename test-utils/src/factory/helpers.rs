//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team with its creator enrolled as a manager.
///
/// This is a convenience method that creates:
/// 1. User (as team creator)
/// 2. Team
/// 3. Manager membership for the creator
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, team, membership))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_manager(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::team_member::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db, user.id).await?;
    let membership = crate::factory::team_member::create_team_manager(db, team.id, user.id).await?;

    Ok((user, team, membership))
}

/// Creates a poll with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as team creator and poll creator, enrolled as manager)
/// 2. Team
/// 3. Poll
///
/// Slots are not materialized; add them with the poll slot factory or by
/// going through the poll service.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, team, poll))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_poll_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::poll::Model,
    ),
    DbErr,
> {
    let (user, team, _membership) = create_team_with_manager(db).await?;
    let poll = crate::factory::poll::create_poll(db, team.id, user.id).await?;

    Ok((user, team, poll))
}

/// Creates an additional member enrolled in an existing team.
///
/// Creates a fresh user and a `member`-role membership for the given team.
/// Useful for tests that need participants beyond the team creator.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team to enroll the new user in
///
/// # Returns
/// - `Ok((user, membership))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_for_team(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<(entity::user::Model, entity::team_member::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let membership = crate::factory::team_member::create_team_member(db, team_id, user.id).await?;

    Ok((user, membership))
}
