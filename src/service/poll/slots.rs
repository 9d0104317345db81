//! Candidate slot generation.
//!
//! Expands a poll's date range and daily time window into the concrete
//! candidate slots participants respond to. Each date contributes
//! back-to-back slots of the configured interval starting at the window
//! start; a trailing remainder shorter than the interval yields no slot.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::{error::poll::PollError, model::poll::CandidateSlot};

/// Generates candidate slots for every date in the inclusive range.
///
/// Slots are emitted in (date, start time) order. A window too short for a
/// single interval produces an empty list, which is valid: such a poll simply
/// has nothing to respond to.
///
/// # Arguments
/// - `start_date` - First candidate date, inclusive
/// - `end_date` - Last candidate date, inclusive
/// - `start_time` - Daily window start
/// - `end_time` - Daily window end
/// - `interval_minutes` - Length of each slot in minutes
///
/// # Returns
/// - `Ok(Vec<CandidateSlot>)` - Generated slots, possibly empty
/// - `Err(PollError::InvalidRange)` - Inverted date range or daily window
/// - `Err(PollError::InvalidInterval)` - Zero or negative interval
pub(crate) fn generate_slots(
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    interval_minutes: i32,
) -> Result<Vec<CandidateSlot>, PollError> {
    if interval_minutes <= 0 {
        return Err(PollError::InvalidInterval(format!(
            "interval must be positive, got {}",
            interval_minutes
        )));
    }

    if start_date > end_date {
        return Err(PollError::InvalidRange(format!(
            "start date {} is after end date {}",
            start_date, end_date
        )));
    }

    if start_time >= end_time {
        return Err(PollError::InvalidRange(format!(
            "daily window start {} is not before end {}",
            start_time, end_time
        )));
    }

    let interval = Duration::minutes(interval_minutes as i64);
    let mut slots = Vec::new();

    for slot_date in start_date.iter_days() {
        if slot_date > end_date {
            break;
        }

        let mut cursor = start_time;
        loop {
            // NaiveTime addition wraps at midnight; a wrapped end means the
            // slot would cross into the next day and cannot fit the window.
            let (slot_end, wrapped) = cursor.overflowing_add_signed(interval);
            if wrapped != 0 || slot_end > end_time {
                break;
            }

            slots.push(CandidateSlot {
                slot_date,
                start_time: cursor,
                end_time: slot_end,
            });
            cursor = slot_end;
        }
    }

    Ok(slots)
}
