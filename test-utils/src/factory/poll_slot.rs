//! Poll slot factory for creating test slot entities.
//!
//! Default slots are spread across distinct (date, start time) pairs using the
//! shared ID counter, so creating several default slots for one poll never
//! trips the unique (poll_id, slot_date, start_time) index.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test poll slots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{NaiveDate, NaiveTime};
/// use test_utils::factory::poll_slot::PollSlotFactory;
///
/// let slot = PollSlotFactory::new(&db, poll.id)
///     .slot_date(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap())
///     .start_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
///     .build()
///     .await?;
/// ```
pub struct PollSlotFactory<'a> {
    db: &'a DatabaseConnection,
    poll_id: i32,
    slot_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl<'a> PollSlotFactory<'a> {
    /// Creates a new PollSlotFactory with default values.
    ///
    /// Defaults: one-hour slot on a date/time derived from the shared ID
    /// counter, starting at 2026-09-07 09:00. Consecutive default slots get
    /// consecutive hours (09:00 through 16:00), rolling over to the next day.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `poll_id` - Poll the slot belongs to
    ///
    /// # Returns
    /// - `PollSlotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, poll_id: i32) -> Self {
        let id = next_id();
        let slot_date =
            NaiveDate::from_ymd_opt(2026, 9, 7).unwrap() + Duration::days((id / 8) as i64);
        let start_time = NaiveTime::from_hms_opt(9 + (id % 8) as u32, 0, 0).unwrap();
        Self {
            db,
            poll_id,
            slot_date,
            start_time,
            end_time: start_time + Duration::hours(1),
        }
    }

    /// Sets the slot date.
    pub fn slot_date(mut self, slot_date: NaiveDate) -> Self {
        self.slot_date = slot_date;
        self
    }

    /// Sets the slot start time. The end time is not adjusted.
    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the slot end time.
    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the slot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::poll_slot::Model)` - Created slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::poll_slot::Model, DbErr> {
        entity::poll_slot::ActiveModel {
            id: ActiveValue::NotSet,
            poll_id: ActiveValue::Set(self.poll_id),
            slot_date: ActiveValue::Set(self.slot_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a slot with default values for the specified poll.
///
/// Shorthand for `PollSlotFactory::new(db, poll_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `poll_id` - Poll the slot belongs to
///
/// # Returns
/// - `Ok(entity::poll_slot::Model)` - Created slot entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_poll_slot(
    db: &DatabaseConnection,
    poll_id: i32,
) -> Result<entity::poll_slot::Model, DbErr> {
    PollSlotFactory::new(db, poll_id).build().await
}
