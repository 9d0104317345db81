//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db, user.id)
///     .name("Custom Team")
///     .description(Some("My team".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    creator_id: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - description: `Some("Test team description")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - User ID of the team creator
    ///
    /// # Returns
    /// - `TeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            description: Some("Test team description".to_string()),
            creator_id,
        }
    }

    /// Sets the team name.
    ///
    /// # Arguments
    /// - `name` - Display name for the team
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the team description.
    ///
    /// # Arguments
    /// - `description` - Optional team description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the specified creator.
///
/// Shorthand for `TeamFactory::new(db, creator_id).build().await`. Note that
/// this does not enroll the creator as a member; use
/// `helpers::create_team_with_manager` for that.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_id` - User ID of the team creator
///
/// # Returns
/// - `Ok(entity::team::Model)` - Created team entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, creator_id).build().await
}
