//! Team member factory for creating test membership entities.

use chrono::Utc;
use entity::team_member::TeamRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test team memberships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::team_member::TeamRole;
/// use test_utils::factory::team_member::TeamMemberFactory;
///
/// let membership = TeamMemberFactory::new(&db, team.id, user.id)
///     .role(TeamRole::Manager)
///     .build()
///     .await?;
/// ```
pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    user_id: i32,
    role: TeamRole,
}

impl<'a> TeamMemberFactory<'a> {
    /// Creates a new TeamMemberFactory with default values.
    ///
    /// Defaults:
    /// - role: `TeamRole::Member`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Team the membership belongs to
    /// - `user_id` - User being enrolled
    ///
    /// # Returns
    /// - `TeamMemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, team_id: i32, user_id: i32) -> Self {
        Self {
            db,
            team_id,
            user_id,
            role: TeamRole::Member,
        }
    }

    /// Sets the member's role.
    ///
    /// # Arguments
    /// - `role` - Role within the team
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the membership entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team_member::Model)` - Created membership entity
    /// - `Err(DbErr)` - Database error during insert (including unique
    ///   violations when the user is already enrolled)
    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `member`-role membership.
///
/// Shorthand for `TeamMemberFactory::new(db, team_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the membership belongs to
/// - `user_id` - User being enrolled
///
/// # Returns
/// - `Ok(entity::team_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db, team_id, user_id).build().await
}

/// Creates a `manager`-role membership.
///
/// Shorthand for `TeamMemberFactory::new(db, team_id, user_id).role(TeamRole::Manager)`.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the membership belongs to
/// - `user_id` - User being enrolled as manager
///
/// # Returns
/// - `Ok(entity::team_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team_manager(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db, team_id, user_id)
        .role(TeamRole::Manager)
        .build()
        .await
}
