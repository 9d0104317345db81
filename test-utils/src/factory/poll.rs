//! Poll factory for creating test poll entities.
//!
//! This module provides factory methods for creating poll entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.
//!
//! Polls are created without slots; materialize slots through the poll slot
//! factory or by exercising the poll service.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test polls with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::poll::PollFactory;
///
/// let poll = PollFactory::new(&db, team.id, user.id)
///     .title("Sprint planning")
///     .interval_minutes(30)
///     .build()
///     .await?;
/// ```
pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    creator_id: i32,
    title: String,
    description: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    interval_minutes: i32,
    deadline: Option<chrono::DateTime<Utc>>,
    allow_multiple_selection: bool,
    is_active: bool,
    closed_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> PollFactory<'a> {
    /// Creates a new PollFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Poll {id}"` where id is auto-incremented
    /// - description: `Some("Test poll description")`
    /// - date range: 2026-09-07 through 2026-09-08
    /// - daily window: 09:00 to 17:00, interval 60 minutes
    /// - deadline: `None`
    /// - allow_multiple_selection: `true`
    /// - is_active: `true`, closed_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Team the poll belongs to
    /// - `creator_id` - User ID of the poll creator
    ///
    /// # Returns
    /// - `PollFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, team_id: i32, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            creator_id,
            title: format!("Poll {}", id),
            description: Some("Test poll description".to_string()),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            interval_minutes: 60,
            deadline: None,
            allow_multiple_selection: true,
            is_active: true,
            closed_at: None,
        }
    }

    /// Sets the poll title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the poll description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the candidate date range (inclusive on both ends).
    pub fn date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Sets the daily time window.
    pub fn time_window(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the slot interval in minutes.
    pub fn interval_minutes(mut self, interval_minutes: i32) -> Self {
        self.interval_minutes = interval_minutes;
        self
    }

    /// Sets the response deadline.
    pub fn deadline(mut self, deadline: Option<chrono::DateTime<Utc>>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets whether a participant may mark multiple slots `available`.
    pub fn allow_multiple_selection(mut self, allow: bool) -> Self {
        self.allow_multiple_selection = allow;
        self
    }

    /// Marks the poll closed at the given time.
    pub fn closed(mut self, closed_at: chrono::DateTime<Utc>) -> Self {
        self.is_active = false;
        self.closed_at = Some(closed_at);
        self
    }

    /// Builds and inserts the poll entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::poll::Model)` - Created poll entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::poll::Model, DbErr> {
        entity::poll::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            creator_id: ActiveValue::Set(self.creator_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            interval_minutes: ActiveValue::Set(self.interval_minutes),
            deadline: ActiveValue::Set(self.deadline),
            allow_multiple_selection: ActiveValue::Set(self.allow_multiple_selection),
            is_active: ActiveValue::Set(self.is_active),
            closed_at: ActiveValue::Set(self.closed_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a poll with default values for the specified team and creator.
///
/// Shorthand for `PollFactory::new(db, team_id, creator_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the poll belongs to
/// - `creator_id` - User ID of the poll creator
///
/// # Returns
/// - `Ok(entity::poll::Model)` - Created poll entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_poll(
    db: &DatabaseConnection,
    team_id: i32,
    creator_id: i32,
) -> Result<entity::poll::Model, DbErr> {
    PollFactory::new(db, team_id, creator_id).build().await
}
