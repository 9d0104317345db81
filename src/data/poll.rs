//! Poll data repository for database operations.
//!
//! This module provides the `PollRepository` for managing polls and their generated
//! slots. Poll creation persists the poll and all slots in one transaction; deletion
//! removes responses and slots explicitly before the poll row. Slot queries always
//! return rows in (date, start time) order.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::poll::{CandidateSlot, CreatePollParams, Poll, PollSlot, PollWithSlots};

/// Repository providing database operations for polls and slots.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, closing, and deleting poll records with their slots.
pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    /// Creates a new PollRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PollRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a poll and persists its generated slots in one transaction.
    ///
    /// The poll starts open (is_active = true, closed_at = NULL). Slots are
    /// inserted in the order given, which the generator guarantees to be
    /// (date, start time) ascending.
    ///
    /// # Arguments
    /// - `param` - Create parameters with parsed dates, window, and interval
    /// - `slots` - Generated slot coordinates for the poll
    ///
    /// # Returns
    /// - `Ok(PollWithSlots)` - The created poll with its persisted slots
    /// - `Err(DbErr)` - Database error; nothing is persisted on failure
    pub async fn create_with_slots(
        &self,
        param: CreatePollParams,
        slots: &[CandidateSlot],
    ) -> Result<PollWithSlots, DbErr> {
        let txn = self.db.begin().await?;

        let poll = entity::poll::ActiveModel {
            team_id: ActiveValue::Set(param.team_id),
            creator_id: ActiveValue::Set(param.creator_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            interval_minutes: ActiveValue::Set(param.interval_minutes),
            deadline: ActiveValue::Set(param.deadline),
            allow_multiple_selection: ActiveValue::Set(param.allow_multiple_selection),
            is_active: ActiveValue::Set(true),
            closed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut persisted = Vec::with_capacity(slots.len());
        for slot in slots {
            let entity = entity::poll_slot::ActiveModel {
                poll_id: ActiveValue::Set(poll.id),
                slot_date: ActiveValue::Set(slot.slot_date),
                start_time: ActiveValue::Set(slot.start_time),
                end_time: ActiveValue::Set(slot.end_time),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            persisted.push(PollSlot::from_entity(entity));
        }

        txn.commit().await?;

        Ok(PollWithSlots {
            poll: Poll::from_entity(poll),
            slots: persisted,
        })
    }

    /// Gets a poll by id.
    ///
    /// # Returns
    /// - `Ok(Some(Poll))` - Poll found
    /// - `Ok(None)` - No poll with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Poll>, DbErr> {
        let entity = entity::prelude::Poll::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Poll::from_entity))
    }

    /// Gets a poll together with its slots in (date, start time) order.
    ///
    /// # Returns
    /// - `Ok(Some(PollWithSlots))` - Poll and ordered slots
    /// - `Ok(None)` - No poll with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_slots(&self, id: i32) -> Result<Option<PollWithSlots>, DbErr> {
        let poll = entity::prelude::Poll::find_by_id(id).one(self.db).await?;

        let Some(poll) = poll else {
            return Ok(None);
        };

        let slots = self.get_slots(poll.id).await?;

        Ok(Some(PollWithSlots {
            poll: Poll::from_entity(poll),
            slots,
        }))
    }

    /// Gets a poll's slots in (date, start time) order.
    pub async fn get_slots(&self, poll_id: i32) -> Result<Vec<PollSlot>, DbErr> {
        let entities = entity::prelude::PollSlot::find()
            .filter(entity::poll_slot::Column::PollId.eq(poll_id))
            .order_by_asc(entity::poll_slot::Column::SlotDate)
            .order_by_asc(entity::poll_slot::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PollSlot::from_entity).collect())
    }

    /// Finds a slot by id within a specific poll.
    ///
    /// Returns None when the slot does not exist or belongs to another poll.
    pub async fn find_slot_in_poll(
        &self,
        poll_id: i32,
        slot_id: i32,
    ) -> Result<Option<PollSlot>, DbErr> {
        let entity = entity::prelude::PollSlot::find_by_id(slot_id)
            .filter(entity::poll_slot::Column::PollId.eq(poll_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PollSlot::from_entity))
    }

    /// Gets paginated polls for a team, newest first.
    ///
    /// # Arguments
    /// - `team_id` - ID of the team whose polls to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of polls to return per page
    ///
    /// # Returns
    /// - `Ok((polls, total))` - Vector of polls and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated_by_team(
        &self,
        team_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Poll>, u64), DbErr> {
        let paginator = entity::prelude::Poll::find()
            .filter(entity::poll::Column::TeamId.eq(team_id))
            .order_by_desc(entity::poll::Column::CreatedAt)
            .order_by_desc(entity::poll::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let polls = entities.into_iter().map(Poll::from_entity).collect();

        Ok((polls, total))
    }

    /// Marks a poll closed at the given timestamp.
    ///
    /// # Arguments
    /// - `id` - ID of the poll to close
    /// - `closed_at` - Timestamp to record for the closure
    ///
    /// # Returns
    /// - `Ok(Poll)` - The closed poll
    /// - `Err(DbErr::RecordNotFound)` - No poll exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn close(&self, id: i32, closed_at: DateTime<Utc>) -> Result<Poll, DbErr> {
        let poll = entity::prelude::Poll::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Poll with id {} not found",
                id
            )))?;

        let mut active_model: entity::poll::ActiveModel = poll.into();
        active_model.is_active = ActiveValue::Set(false);
        active_model.closed_at = ActiveValue::Set(Some(closed_at));

        let entity = active_model.update(self.db).await?;

        Ok(Poll::from_entity(entity))
    }

    /// Closes every open poll whose deadline has passed.
    ///
    /// Used by the periodic deadline sweep. Polls without a deadline are
    /// never touched.
    ///
    /// # Arguments
    /// - `now` - Timestamp to compare deadlines against and record as closed_at
    ///
    /// # Returns
    /// - `Ok(Vec<Poll>)` - The polls transitioned to closed, possibly empty
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn close_expired(&self, now: DateTime<Utc>) -> Result<Vec<Poll>, DbErr> {
        let expired = entity::prelude::Poll::find()
            .filter(entity::poll::Column::IsActive.eq(true))
            .filter(entity::poll::Column::Deadline.is_not_null())
            .filter(entity::poll::Column::Deadline.lte(now))
            .all(self.db)
            .await?;

        let mut closed = Vec::with_capacity(expired.len());
        for poll in expired {
            let mut active_model: entity::poll::ActiveModel = poll.into();
            active_model.is_active = ActiveValue::Set(false);
            active_model.closed_at = ActiveValue::Set(Some(now));

            closed.push(Poll::from_entity(active_model.update(self.db).await?));
        }

        Ok(closed)
    }

    /// Deletes a poll together with its slots and responses in one transaction.
    ///
    /// # Arguments
    /// - `id` - ID of the poll to delete
    ///
    /// # Returns
    /// - `Ok(())` - Poll, slots, and responses deleted
    /// - `Err(DbErr)` - Database error; nothing is deleted on failure
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PollResponse::delete_many()
            .filter(entity::poll_response::Column::PollId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::PollSlot::delete_many()
            .filter(entity::poll_slot::Column::PollId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Poll::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
