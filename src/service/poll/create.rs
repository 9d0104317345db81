//! Poll creation.

use entity::notification::NotificationKind;

use crate::{
    data::poll::PollRepository,
    dto::poll::CreatePollDto,
    error::AppError,
    model::poll::{CreatePollParams, PollWithSlots},
};

use super::{slots, PollService};

impl<'a> PollService<'a> {
    /// Creates a poll, generates its slots, and notifies team members.
    ///
    /// Dates, times, and the optional deadline arrive in their wire string
    /// forms and are parsed here. Slot generation validates the date range,
    /// daily window, and interval before anything is persisted; the poll and
    /// its slots are then written in one transaction. Team members other than
    /// the creator receive a `poll_created` notification.
    ///
    /// # Arguments
    /// - `team_id` - Team the poll belongs to
    /// - `creator_id` - User creating the poll
    /// - `dto` - Wire form of the poll to create
    ///
    /// # Returns
    /// - `Ok(PollWithSlots)` - The created poll with its persisted slots
    /// - `Err(AppError::BadRequest)` - Malformed date, time, or deadline string
    /// - `Err(AppError::PollErr)` - Inverted range, inverted window, or
    ///   non-positive interval
    pub async fn create_poll(
        &self,
        team_id: i32,
        creator_id: i32,
        dto: CreatePollDto,
    ) -> Result<PollWithSlots, AppError> {
        let start_date = Self::parse_poll_date(&dto.start_date)?;
        let end_date = Self::parse_poll_date(&dto.end_date)?;
        let start_time = Self::parse_poll_time(&dto.start_time)?;
        let end_time = Self::parse_poll_time(&dto.end_time)?;
        let deadline = dto
            .deadline
            .as_deref()
            .map(Self::parse_poll_deadline)
            .transpose()?;

        let slots = slots::generate_slots(
            start_date,
            end_date,
            start_time,
            end_time,
            dto.interval_minutes,
        )?;

        let poll_repo = PollRepository::new(self.db);
        let created = poll_repo
            .create_with_slots(
                CreatePollParams {
                    team_id,
                    creator_id,
                    title: dto.title,
                    description: dto.description,
                    start_date,
                    end_date,
                    start_time,
                    end_time,
                    interval_minutes: dto.interval_minutes,
                    deadline,
                    allow_multiple_selection: dto.allow_multiple_selection,
                },
                &slots,
            )
            .await?;

        self.notify_team_members(
            team_id,
            Some(creator_id),
            NotificationKind::PollCreated,
            format!("New poll: {}", created.poll.title),
            format!("'{}' is open for responses.", created.poll.title),
            Some(created.poll.id),
        )
        .await;

        Ok(created)
    }
}
