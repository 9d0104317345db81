//! Score aggregation and slot ranking.
//!
//! Folds recorded responses into one ranked entry per slot. An `available`
//! response is worth a full point and a `maybe` half a point; `unavailable`
//! responses are handled by the configured policy, either excluding the slot
//! from the ranking or charging -1000 points each. Scores are tallied in
//! integer half-points so the ordering never compares floats.

use std::collections::HashMap;

use entity::poll_response::Availability;

use crate::{
    data::{poll::PollRepository, response::PollResponseRepository},
    error::{poll::PollError, AppError},
    model::poll::{PollResponse, PollSlot, RankedSlot, ScorePolicy},
};

use super::PollService;

/// Half-point charge for one `unavailable` response under the penalize policy.
const UNAVAILABLE_PENALTY_HALF_POINTS: i64 = 2000;

/// Ranks the given slots by their aggregated response scores.
///
/// Every slot appears once, in rank order; slots nobody answered score zero.
/// Under `ScorePolicy::Exclude` a slot with any `unavailable` response is
/// omitted entirely. Ties break by higher `available` count, then by earlier
/// (date, start time), so the result is a total order.
///
/// # Arguments
/// - `slots` - The poll's slots in (date, start time) order
/// - `responses` - All recorded responses for the poll
/// - `policy` - How `unavailable` responses affect the ranking
///
/// # Returns
/// - `Vec<RankedSlot>` - Ranked entries, best first
pub(crate) fn rank_slots(
    slots: &[PollSlot],
    responses: &[PollResponse],
    policy: ScorePolicy,
) -> Vec<RankedSlot> {
    let mut tallies: HashMap<i32, (u64, u64, u64)> = HashMap::new();
    for response in responses {
        let tally = tallies.entry(response.slot_id).or_default();
        match response.availability {
            Availability::Available => tally.0 += 1,
            Availability::Maybe => tally.1 += 1,
            Availability::Unavailable => tally.2 += 1,
        }
    }

    let mut ranked: Vec<RankedSlot> = slots
        .iter()
        .filter_map(|slot| {
            let (available, maybe, unavailable) =
                tallies.get(&slot.id).copied().unwrap_or((0, 0, 0));

            if policy == ScorePolicy::Exclude && unavailable > 0 {
                return None;
            }

            let mut score_half_points = 2 * available as i64 + maybe as i64;
            if policy == ScorePolicy::Penalize {
                score_half_points -= UNAVAILABLE_PENALTY_HALF_POINTS * unavailable as i64;
            }

            Some(RankedSlot {
                slot_id: slot.id,
                slot_date: slot.slot_date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                score_half_points,
                available_count: available,
                maybe_count: maybe,
                unavailable_count: unavailable,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score_half_points
            .cmp(&a.score_half_points)
            .then(b.available_count.cmp(&a.available_count))
            .then(a.slot_date.cmp(&b.slot_date))
            .then(a.start_time.cmp(&b.start_time))
    });

    ranked
}

impl<'a> PollService<'a> {
    /// Computes the ranked aggregation for a poll.
    ///
    /// # Arguments
    /// - `poll_id` - ID of the poll to rank
    /// - `policy` - How `unavailable` responses affect the ranking
    ///
    /// # Returns
    /// - `Ok(Vec<RankedSlot>)` - Ranked entries, best first
    /// - `Err(AppError::NotFound)` - No poll with that id
    pub async fn rank_poll_slots(
        &self,
        poll_id: i32,
        policy: ScorePolicy,
    ) -> Result<Vec<RankedSlot>, AppError> {
        self.require_poll(poll_id).await?;

        let poll_repo = PollRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        let slots = poll_repo.get_slots(poll_id).await?;
        let responses = response_repo.get_by_poll(poll_id).await?;

        Ok(rank_slots(&slots, &responses, policy))
    }

    /// Picks the top-ranked slot for a poll.
    ///
    /// # Arguments
    /// - `poll_id` - ID of the poll
    /// - `policy` - How `unavailable` responses affect the ranking
    ///
    /// # Returns
    /// - `Ok(RankedSlot)` - The best slot
    /// - `Err(PollError::NoResponses)` - The poll has no responses at all, or
    ///   the exclusion policy filtered every slot out
    /// - `Err(AppError::NotFound)` - No poll with that id
    pub async fn best_slot(
        &self,
        poll_id: i32,
        policy: ScorePolicy,
    ) -> Result<RankedSlot, AppError> {
        self.require_poll(poll_id).await?;

        let poll_repo = PollRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        let slots = poll_repo.get_slots(poll_id).await?;
        let responses = response_repo.get_by_poll(poll_id).await?;

        if responses.is_empty() {
            return Err(PollError::NoResponses.into());
        }

        rank_slots(&slots, &responses, policy)
            .into_iter()
            .next()
            .ok_or_else(|| PollError::NoResponses.into())
    }
}
