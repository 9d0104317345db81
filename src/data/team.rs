//! Team data repository for database operations.
//!
//! This module provides the `TeamRepository` for managing team records in the database.
//! Team creation enrolls the creator as a manager in the same transaction; team deletion
//! removes polls, slots, responses, and memberships explicitly before the team row so
//! no orphan rows survive.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use entity::team_member::TeamRole;

use crate::model::team::{CreateTeamParams, Team, UpdateTeamParams};

/// Repository providing database operations for team management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting team records.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeamRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team and enrolls the creator as a manager.
    ///
    /// Both rows are written in one transaction so a team can never exist
    /// without at least one manager.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing name, description, and creator
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error; nothing is persisted on failure
    pub async fn create(&self, param: CreateTeamParams) -> Result<Team, DbErr> {
        let txn = self.db.begin().await?;

        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            creator_id: ActiveValue::Set(param.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(param.creator_id),
            role: ActiveValue::Set(TeamRole::Manager),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Team::from_entity(team))
    }

    /// Gets a team by id.
    ///
    /// # Arguments
    /// - `id` - ID of the team to look up
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets all teams the user is a member of, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose memberships to resolve
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Teams the user belongs to, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_for_user(&self, user_id: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .join(JoinType::InnerJoin, entity::team::Relation::TeamMember.def())
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Updates a team's name and description.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing id, new name, and new description
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(DbErr::RecordNotFound)` - No team exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, param: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);

        let entity = active_model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes a team together with its polls, slots, responses, and memberships.
    ///
    /// All deletes run in one transaction, from the leaves of the schema
    /// upward, so a failure leaves the team fully intact.
    ///
    /// # Arguments
    /// - `id` - ID of the team to delete
    ///
    /// # Returns
    /// - `Ok(())` - Team and all dependent rows deleted
    /// - `Err(DbErr)` - Database error; nothing is deleted on failure
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let polls = entity::prelude::Poll::find()
            .filter(entity::poll::Column::TeamId.eq(id))
            .all(&txn)
            .await?;
        let poll_ids: Vec<i32> = polls.into_iter().map(|p| p.id).collect();

        if !poll_ids.is_empty() {
            entity::prelude::PollResponse::delete_many()
                .filter(entity::poll_response::Column::PollId.is_in(poll_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::PollSlot::delete_many()
                .filter(entity::poll_slot::Column::PollId.is_in(poll_ids))
                .exec(&txn)
                .await?;

            entity::prelude::Poll::delete_many()
                .filter(entity::poll::Column::TeamId.eq(id))
                .exec(&txn)
                .await?;
        }

        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Team::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
