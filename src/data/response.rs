//! Poll response repository for database operations.
//!
//! This module provides the `PollResponseRepository` for recording and querying
//! participant availability. Writes go through an upsert on the (user_id, slot_id)
//! unique key, so resubmission overwrites in place and never duplicates rows or
//! needs application-level locking.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use entity::poll_response::Availability;

use crate::model::poll::{PollResponse, SubmitResponseParams};
use crate::model::user::User;

/// Repository providing database operations for poll responses.
pub struct PollResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollResponseRepository<'a> {
    /// Creates a new PollResponseRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a participant's availability for a slot.
    ///
    /// Inserts a new response, or overwrites the availability of the existing
    /// one through the (user_id, slot_id) conflict target. Submitting the same
    /// availability twice leaves a single unchanged row.
    ///
    /// # Arguments
    /// - `param` - Response parameters containing poll, slot, user, and availability
    ///
    /// # Returns
    /// - `Ok(PollResponse)` - The stored response after the write
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn upsert(&self, param: SubmitResponseParams) -> Result<PollResponse, DbErr> {
        let entity = entity::prelude::PollResponse::insert(entity::poll_response::ActiveModel {
            poll_id: ActiveValue::Set(param.poll_id),
            slot_id: ActiveValue::Set(param.slot_id),
            user_id: ActiveValue::Set(param.user_id),
            availability: ActiveValue::Set(param.availability),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::poll_response::Column::UserId,
                entity::poll_response::Column::SlotId,
            ])
            .update_columns([entity::poll_response::Column::Availability])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(PollResponse::from_entity(entity))
    }

    /// Gets all responses for a poll.
    ///
    /// # Returns
    /// - `Ok(Vec<PollResponse>)` - All responses, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_poll(&self, poll_id: i32) -> Result<Vec<PollResponse>, DbErr> {
        let entities = entity::prelude::PollResponse::find()
            .filter(entity::poll_response::Column::PollId.eq(poll_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PollResponse::from_entity).collect())
    }

    /// Gets all responses for a poll paired with the responding user.
    ///
    /// Used by the grouped response listing, which needs participant names.
    ///
    /// # Returns
    /// - `Ok(Vec<(PollResponse, User)>)` - Response and user pairs
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_poll_with_users(
        &self,
        poll_id: i32,
    ) -> Result<Vec<(PollResponse, User)>, DbErr> {
        let rows = entity::prelude::PollResponse::find()
            .filter(entity::poll_response::Column::PollId.eq(poll_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(response, user)| {
                user.map(|user| (PollResponse::from_entity(response), User::from_entity(user)))
            })
            .collect())
    }

    /// Clears the participant's other `available` responses in a poll.
    ///
    /// Supports single-selection polls: after an `available` response is
    /// recorded for `keep_slot_id`, every other `available` row by the same
    /// participant in the same poll is removed. `maybe` and `unavailable`
    /// rows stay untouched.
    ///
    /// # Arguments
    /// - `poll_id` - ID of the poll
    /// - `user_id` - ID of the responding user
    /// - `keep_slot_id` - The slot whose response survives
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_other_available(
        &self,
        poll_id: i32,
        user_id: i32,
        keep_slot_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::PollResponse::delete_many()
            .filter(entity::poll_response::Column::PollId.eq(poll_id))
            .filter(entity::poll_response::Column::UserId.eq(user_id))
            .filter(entity::poll_response::Column::Availability.eq(Availability::Available))
            .filter(entity::poll_response::Column::SlotId.ne(keep_slot_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a user's responses for a team's open polls.
    ///
    /// Called when a member leaves or is removed from a team. Closed polls
    /// keep their historical responses.
    ///
    /// # Arguments
    /// - `team_id` - ID of the team the user is leaving
    /// - `user_id` - ID of the departing user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of responses removed
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete_for_user_in_open_polls(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        let open_polls = entity::prelude::Poll::find()
            .filter(entity::poll::Column::TeamId.eq(team_id))
            .filter(entity::poll::Column::IsActive.eq(true))
            .all(self.db)
            .await?;

        let poll_ids: Vec<i32> = open_polls.into_iter().map(|p| p.id).collect();
        if poll_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PollResponse::delete_many()
            .filter(entity::poll_response::Column::UserId.eq(user_id))
            .filter(entity::poll_response::Column::PollId.is_in(poll_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
