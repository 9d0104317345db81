//! Availability submission and the grouped response listing.

use std::collections::HashMap;

use chrono::Utc;
use entity::poll_response::Availability;

use crate::{
    data::{
        poll::PollRepository, response::PollResponseRepository, team_member::TeamMemberRepository,
    },
    dto::poll::SubmitResponseDto,
    error::{poll::PollError, AppError},
    model::poll::{
        availability_from_dto, PollResponse, ResponseEntry, SlotResponses, SubmitResponseParams,
    },
};

use super::PollService;

impl<'a> PollService<'a> {
    /// Records one participant's availability for a slot.
    ///
    /// Checks run in a fixed order so the caller always learns the most
    /// fundamental problem first: poll existence, then poll state, then slot
    /// existence, then membership. A poll whose deadline has passed is closed
    /// here and the submission rejected; that close is persisted, it is not
    /// just a rejection.
    ///
    /// Resubmitting for the same slot overwrites the previous answer. On a
    /// single-selection poll an `available` answer clears the participant's
    /// other `available` rows.
    ///
    /// # Arguments
    /// - `poll_id` - Poll being responded to
    /// - `user_id` - Responding user
    /// - `dto` - Wire form of the response
    ///
    /// # Returns
    /// - `Ok(PollResponse)` - The recorded response
    /// - `Err(AppError::NotFound)` - No poll with that id
    /// - `Err(PollError::PollClosed)` - Poll is closed or past its deadline
    /// - `Err(PollError::SlotNotFound)` - Slot missing or not in this poll
    /// - `Err(PollError::ParticipantNotAuthorized)` - User not on the team
    pub async fn submit_response(
        &self,
        poll_id: i32,
        user_id: i32,
        dto: SubmitResponseDto,
    ) -> Result<PollResponse, AppError> {
        let poll_repo = PollRepository::new(self.db);
        let member_repo = TeamMemberRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        let poll = self.require_poll(poll_id).await?;

        if !poll.is_active {
            return Err(PollError::PollClosed.into());
        }

        if let Some(deadline) = poll.deadline {
            let now = Utc::now();
            if deadline <= now {
                poll_repo.close(poll.id, now).await?;
                return Err(PollError::PollClosed.into());
            }
        }

        let slot = poll_repo
            .find_slot_in_poll(poll_id, dto.slot_id)
            .await?
            .ok_or(PollError::SlotNotFound(dto.slot_id))?;

        if member_repo.find(poll.team_id, user_id).await?.is_none() {
            return Err(PollError::ParticipantNotAuthorized.into());
        }

        let availability = availability_from_dto(dto.availability);
        let response = response_repo
            .upsert(SubmitResponseParams {
                poll_id,
                slot_id: slot.id,
                user_id,
                availability: availability.clone(),
            })
            .await?;

        if !poll.allow_multiple_selection && availability == Availability::Available {
            response_repo
                .clear_other_available(poll_id, user_id, slot.id)
                .await?;
        }

        Ok(response)
    }

    /// Lists a poll's responses grouped per slot.
    ///
    /// Every slot appears in (date, start time) order, answered or not.
    /// Within a slot the entries are sorted by participant id.
    ///
    /// # Arguments
    /// - `poll_id` - Poll whose responses to list
    ///
    /// # Returns
    /// - `Ok(Vec<SlotResponses>)` - One group per slot, in slot order
    /// - `Err(AppError::NotFound)` - No poll with that id
    pub async fn list_responses(&self, poll_id: i32) -> Result<Vec<SlotResponses>, AppError> {
        let poll_repo = PollRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        self.require_poll(poll_id).await?;

        let slots = poll_repo.get_slots(poll_id).await?;
        let pairs = response_repo.get_by_poll_with_users(poll_id).await?;

        let mut by_slot: HashMap<i32, Vec<ResponseEntry>> = HashMap::new();
        for (response, user) in pairs {
            by_slot.entry(response.slot_id).or_default().push(ResponseEntry {
                user_id: user.id,
                user_name: user.name,
                availability: response.availability,
            });
        }

        Ok(slots
            .into_iter()
            .map(|slot| {
                let mut responses = by_slot.remove(&slot.id).unwrap_or_default();
                responses.sort_by_key(|entry| entry.user_id);

                SlotResponses { slot, responses }
            })
            .collect())
    }
}
