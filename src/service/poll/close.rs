//! Poll closure, deletion, and the deadline sweep.

use chrono::Utc;
use entity::notification::NotificationKind;

use crate::{
    data::poll::PollRepository,
    error::{poll::PollError, AppError},
    model::poll::Poll,
};

use super::PollService;

impl<'a> PollService<'a> {
    /// Closes a poll ahead of its deadline.
    ///
    /// Only the creator may close a poll, and only once. All team members,
    /// the creator included, receive a `poll_closed` notification.
    ///
    /// # Arguments
    /// - `poll_id` - Poll to close
    /// - `user_id` - User requesting the close
    ///
    /// # Returns
    /// - `Ok(Poll)` - The poll in its closed state
    /// - `Err(AppError::NotFound)` - No poll with that id
    /// - `Err(PollError::Unauthorized)` - Requester is not the creator
    /// - `Err(PollError::PollClosed)` - Poll was already closed
    pub async fn close_poll(&self, poll_id: i32, user_id: i32) -> Result<Poll, AppError> {
        let poll = self.require_poll(poll_id).await?;

        if poll.creator_id != user_id {
            return Err(PollError::Unauthorized.into());
        }
        if !poll.is_active {
            return Err(PollError::PollClosed.into());
        }

        let poll_repo = PollRepository::new(self.db);
        let closed = poll_repo.close(poll.id, Utc::now()).await?;

        self.notify_team_members(
            closed.team_id,
            None,
            NotificationKind::PollClosed,
            format!("Poll closed: {}", closed.title),
            format!("'{}' is no longer accepting responses.", closed.title),
            Some(closed.id),
        )
        .await;

        Ok(closed)
    }

    /// Deletes a poll together with its slots and responses.
    ///
    /// Only the creator may delete a poll.
    ///
    /// # Arguments
    /// - `poll_id` - Poll to delete
    /// - `user_id` - User requesting the deletion
    ///
    /// # Returns
    /// - `Ok(())` - Poll and dependents removed
    /// - `Err(AppError::NotFound)` - No poll with that id
    /// - `Err(PollError::Unauthorized)` - Requester is not the creator
    pub async fn delete_poll(&self, poll_id: i32, user_id: i32) -> Result<(), AppError> {
        let poll = self.require_poll(poll_id).await?;

        if poll.creator_id != user_id {
            return Err(PollError::Unauthorized.into());
        }

        let poll_repo = PollRepository::new(self.db);
        poll_repo.delete(poll.id).await?;

        Ok(())
    }

    /// Closes every open poll whose deadline has passed.
    ///
    /// Run by the minutely sweep. Each closed poll fans out a `poll_closed`
    /// notification to its whole team.
    ///
    /// # Returns
    /// - `Ok(Vec<Poll>)` - The polls this sweep closed, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during the sweep query
    pub async fn close_expired_polls(&self) -> Result<Vec<Poll>, AppError> {
        let poll_repo = PollRepository::new(self.db);
        let closed = poll_repo.close_expired(Utc::now()).await?;

        for poll in &closed {
            self.notify_team_members(
                poll.team_id,
                None,
                NotificationKind::PollClosed,
                format!("Poll closed: {}", poll.title),
                format!(
                    "'{}' reached its deadline and is no longer accepting responses.",
                    poll.title
                ),
                Some(poll.id),
            )
            .await;
        }

        Ok(closed)
    }
}
