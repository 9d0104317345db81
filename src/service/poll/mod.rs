//! Poll service for availability aggregation business logic.
//!
//! This module provides the `PollService` for the poll lifecycle: creating
//! polls with generated candidate slots, recording participant availability,
//! ranking slots, and closing polls. It orchestrates the poll, response, and
//! notification repositories and works with domain models rather than DTOs.
//!
//! The service is organized into separate modules by concern:
//! - `slots` - Candidate slot generation from a date range and daily window
//! - `create` - Poll creation with validation and team notification
//! - `response` - Availability submission and the grouped response listing
//! - `ranking` - Score aggregation, ranking, and best-slot selection
//! - `close` - Closing, deletion, and the deadline sweep

pub mod close;
pub mod create;
pub mod ranking;
pub mod response;
pub mod slots;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use entity::notification::NotificationKind;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        notification::NotificationRepository, poll::PollRepository,
        team_member::TeamMemberRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParams,
        poll::{PaginatedPolls, Poll, PollWithSlots},
    },
};

/// Service providing business logic for polls and their responses.
///
/// This struct holds a reference to the database connection and provides
/// methods for poll creation, response recording, aggregation, and closure.
pub struct PollService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    /// Creates a new PollService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PollService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a poll with its slots in (date, start time) order.
    ///
    /// # Arguments
    /// - `poll_id` - ID of the poll to fetch
    ///
    /// # Returns
    /// - `Ok(PollWithSlots)` - The poll with its ordered slots
    /// - `Err(AppError::NotFound)` - No poll with that id
    pub async fn get_poll_with_slots(&self, poll_id: i32) -> Result<PollWithSlots, AppError> {
        let poll_repo = PollRepository::new(self.db);

        poll_repo
            .get_with_slots(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Retrieves a team's polls with pagination, newest first.
    ///
    /// # Arguments
    /// - `team_id` - Team whose polls to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of polls per page
    ///
    /// # Returns
    /// - `Ok(PaginatedPolls)` - Polls for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_polls_for_team(
        &self,
        team_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPolls, AppError> {
        let poll_repo = PollRepository::new(self.db);

        let (polls, total) = poll_repo
            .get_paginated_by_team(team_id, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedPolls {
            polls,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Fetches a poll or fails with a not-found error.
    ///
    /// # Arguments
    /// - `poll_id` - ID of the poll to fetch
    ///
    /// # Returns
    /// - `Ok(Poll)` - The poll
    /// - `Err(AppError::NotFound)` - No poll with that id
    async fn require_poll(&self, poll_id: i32) -> Result<Poll, AppError> {
        let poll_repo = PollRepository::new(self.db);

        poll_repo
            .get_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Records a notification for every member of a team, fire-and-forget.
    ///
    /// Failures are logged and never propagated; a notification write must
    /// not fail the poll operation that triggered it.
    ///
    /// # Arguments
    /// - `team_id` - Team whose members to notify
    /// - `exclude_user_id` - Member to skip (typically the acting user)
    /// - `kind` - Notification kind to record
    /// - `title` - Notification title
    /// - `message` - Notification message body
    /// - `related_id` - Entity id the notification refers to
    async fn notify_team_members(
        &self,
        team_id: i32,
        exclude_user_id: Option<i32>,
        kind: NotificationKind,
        title: String,
        message: String,
        related_id: Option<i32>,
    ) {
        let member_repo = TeamMemberRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let member_ids = match member_repo.get_member_user_ids(team_id).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("Failed to load team {} members for notification: {}", team_id, e);
                return;
            }
        };

        let params: Vec<CreateNotificationParams> = member_ids
            .into_iter()
            .filter(|id| Some(*id) != exclude_user_id)
            .map(|user_id| CreateNotificationParams {
                user_id,
                kind: kind.clone(),
                title: title.clone(),
                message: message.clone(),
                related_id,
            })
            .collect();

        if let Err(e) = notification_repo.create_many(params).await {
            tracing::error!("Failed to record notifications for team {}: {}", team_id, e);
        }
    }

    /// Parses a calendar date in `YYYY-MM-DD` format.
    ///
    /// # Arguments
    /// - `date_str` - Date string to parse
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - Parsed date
    /// - `Err(AppError::BadRequest)` - Malformed date string
    fn parse_poll_date(date_str: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid date format. Expected YYYY-MM-DD, got '{}': {}",
                date_str, e
            ))
        })
    }

    /// Parses a time of day in `HH:MM` format.
    ///
    /// # Arguments
    /// - `time_str` - Time string to parse
    ///
    /// # Returns
    /// - `Ok(NaiveTime)` - Parsed time
    /// - `Err(AppError::BadRequest)` - Malformed time string
    fn parse_poll_time(time_str: &str) -> Result<NaiveTime, AppError> {
        NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid time format. Expected HH:MM, got '{}': {}",
                time_str, e
            ))
        })
    }

    /// Parses a response deadline in `YYYY-MM-DD HH:MM` format, UTC.
    ///
    /// # Arguments
    /// - `deadline_str` - Deadline string to parse
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - Parsed deadline
    /// - `Err(AppError::BadRequest)` - Malformed deadline string
    fn parse_poll_deadline(deadline_str: &str) -> Result<DateTime<Utc>, AppError> {
        NaiveDateTime::parse_from_str(deadline_str, "%Y-%m-%d %H:%M")
            .map(|naive| naive.and_utc())
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Invalid deadline format. Expected YYYY-MM-DD HH:MM in UTC, got '{}': {}",
                    deadline_str, e
                ))
            })
    }
}
