//! Poll domain models and parameters.
//!
//! Covers the scheduling poll itself, its generated time slots, participant
//! responses, and the ranked aggregation output.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::poll_response::Availability;

use crate::dto::poll::{
    AvailabilityDto, PaginatedPollsDto, PollDto, PollListItemDto, PollResponseDto, PollSlotDto,
    RankedSlotDto, ResponseEntryDto, SlotResponsesDto,
};

/// Scheduling poll with its date range, daily window, and lifecycle state.
///
/// Slots are generated from the date range and daily window at creation time
/// and stay fixed for the poll's lifetime. A poll accepts responses while
/// `is_active` is true and the deadline, if any, has not passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    /// Unique identifier for the poll.
    pub id: i32,
    /// ID of the team the poll belongs to.
    pub team_id: i32,
    /// ID of the user who created the poll.
    pub creator_id: i32,
    /// Title shown to participants.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// First calendar date slots were generated for.
    pub start_date: NaiveDate,
    /// Last calendar date slots were generated for (inclusive).
    pub end_date: NaiveDate,
    /// Start of the daily time window.
    pub start_time: NaiveTime,
    /// End of the daily time window.
    pub end_time: NaiveTime,
    /// Slot length in minutes.
    pub interval_minutes: i32,
    /// Optional response deadline. Polls past the deadline close lazily.
    pub deadline: Option<DateTime<Utc>>,
    /// Whether a participant may mark more than one slot `available`.
    pub allow_multiple_selection: bool,
    /// Whether the poll still accepts responses.
    pub is_active: bool,
    /// Timestamp when the poll was closed, if it has been.
    pub closed_at: Option<DateTime<Utc>>,
    /// Timestamp when the poll was created.
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Converts an entity model to a poll domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Poll` - The converted poll domain model
    pub fn from_entity(entity: entity::poll::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            creator_id: entity.creator_id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            interval_minutes: entity.interval_minutes,
            deadline: entity.deadline,
            allow_multiple_selection: entity.allow_multiple_selection,
            is_active: entity.is_active,
            closed_at: entity.closed_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the poll to a list item DTO for paginated listings.
    pub fn into_list_item_dto(self) -> PollListItemDto {
        PollListItemDto {
            id: self.id,
            team_id: self.team_id,
            creator_id: self.creator_id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            deadline: self.deadline,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Concrete meeting time slot generated from a poll's window.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSlot {
    /// Unique identifier for the slot.
    pub id: i32,
    /// ID of the poll the slot belongs to.
    pub poll_id: i32,
    /// Calendar date of the slot.
    pub slot_date: NaiveDate,
    /// Start time of the slot.
    pub start_time: NaiveTime,
    /// End time of the slot.
    pub end_time: NaiveTime,
}

impl PollSlot {
    /// Converts an entity model to a slot domain model at the repository boundary.
    pub fn from_entity(entity: entity::poll_slot::Model) -> Self {
        Self {
            id: entity.id,
            poll_id: entity.poll_id,
            slot_date: entity.slot_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    /// Converts the slot domain model to a DTO for API responses.
    pub fn into_dto(self) -> PollSlotDto {
        PollSlotDto {
            id: self.id,
            slot_date: self.slot_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Slot coordinates produced by the generator before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSlot {
    /// Calendar date of the slot.
    pub slot_date: NaiveDate,
    /// Start time of the slot.
    pub start_time: NaiveTime,
    /// End time of the slot.
    pub end_time: NaiveTime,
}

/// Poll together with its generated slots, in (date, start time) order.
#[derive(Debug, Clone, PartialEq)]
pub struct PollWithSlots {
    /// The poll itself.
    pub poll: Poll,
    /// All slots generated for the poll.
    pub slots: Vec<PollSlot>,
}

impl PollWithSlots {
    /// Converts the poll and its slots to a detail DTO for API responses.
    pub fn into_dto(self) -> PollDto {
        PollDto {
            id: self.poll.id,
            team_id: self.poll.team_id,
            creator_id: self.poll.creator_id,
            title: self.poll.title,
            description: self.poll.description,
            start_date: self.poll.start_date,
            end_date: self.poll.end_date,
            start_time: self.poll.start_time,
            end_time: self.poll.end_time,
            interval_minutes: self.poll.interval_minutes,
            deadline: self.poll.deadline,
            allow_multiple_selection: self.poll.allow_multiple_selection,
            is_active: self.poll.is_active,
            closed_at: self.poll.closed_at,
            created_at: self.poll.created_at,
            slots: self.slots.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

/// Paginated collection of polls with metadata.
///
/// Contains a page of polls along with pagination metadata for building
/// paginated poll listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPolls {
    /// Polls for this page.
    pub polls: Vec<Poll>,
    /// Total number of polls across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of polls per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedPolls {
    /// Converts the paginated polls domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedPollsDto {
        PaginatedPollsDto {
            polls: self.polls.into_iter().map(|p| p.into_list_item_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// One participant response to a single slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    /// Unique identifier for the response.
    pub id: i32,
    /// ID of the poll the response belongs to.
    pub poll_id: i32,
    /// ID of the slot the response is for.
    pub slot_id: i32,
    /// ID of the responding user.
    pub user_id: i32,
    /// The recorded availability.
    pub availability: Availability,
}

impl PollResponse {
    /// Converts an entity model to a response domain model at the repository boundary.
    pub fn from_entity(entity: entity::poll_response::Model) -> Self {
        Self {
            id: entity.id,
            poll_id: entity.poll_id,
            slot_id: entity.slot_id,
            user_id: entity.user_id,
            availability: entity.availability,
        }
    }

    /// Converts the response domain model to a DTO for API responses.
    pub fn into_dto(self) -> PollResponseDto {
        PollResponseDto {
            id: self.id,
            poll_id: self.poll_id,
            slot_id: self.slot_id,
            user_id: self.user_id,
            availability: availability_to_dto(self.availability),
        }
    }
}

/// One participant's availability within a slot listing, enriched with the
/// participant's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    /// ID of the responding user.
    pub user_id: i32,
    /// Display name of the responding user.
    pub user_name: String,
    /// The recorded availability.
    pub availability: Availability,
}

impl ResponseEntry {
    /// Converts the entry domain model to a DTO for API responses.
    pub fn into_dto(self) -> ResponseEntryDto {
        ResponseEntryDto {
            user_id: self.user_id,
            user_name: self.user_name,
            availability: availability_to_dto(self.availability),
        }
    }
}

/// All responses recorded for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotResponses {
    /// The slot the responses belong to.
    pub slot: PollSlot,
    /// Responses for the slot, ordered by participant id.
    pub responses: Vec<ResponseEntry>,
}

impl SlotResponses {
    /// Converts the grouped responses to a DTO for API responses.
    pub fn into_dto(self) -> SlotResponsesDto {
        SlotResponsesDto {
            slot: self.slot.into_dto(),
            responses: self.responses.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a poll once wire fields have been parsed.
///
/// Dates, times, and the deadline arrive already parsed from their string
/// wire forms; range and interval validation happens in the service before
/// slots are generated.
#[derive(Debug, Clone)]
pub struct CreatePollParams {
    /// ID of the team the poll belongs to.
    pub team_id: i32,
    /// ID of the user creating the poll.
    pub creator_id: i32,
    /// Title shown to participants.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// First calendar date to generate slots for.
    pub start_date: NaiveDate,
    /// Last calendar date to generate slots for (inclusive).
    pub end_date: NaiveDate,
    /// Start of the daily time window.
    pub start_time: NaiveTime,
    /// End of the daily time window.
    pub end_time: NaiveTime,
    /// Slot length in minutes.
    pub interval_minutes: i32,
    /// Optional response deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Whether a participant may mark more than one slot `available`.
    pub allow_multiple_selection: bool,
}

/// Parameters for recording one participant's availability for a slot.
#[derive(Debug, Clone)]
pub struct SubmitResponseParams {
    /// ID of the poll being responded to.
    pub poll_id: i32,
    /// ID of the slot being responded to.
    pub slot_id: i32,
    /// ID of the responding user.
    pub user_id: i32,
    /// The availability to record.
    pub availability: Availability,
}

/// One entry of the ranked slot aggregation.
///
/// The score is kept in integer half-points (two per `available`, one per
/// `maybe`) so ordering never depends on float comparison. Conversion to the
/// wire form divides by two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSlot {
    /// ID of the ranked slot.
    pub slot_id: i32,
    /// Calendar date of the slot.
    pub slot_date: NaiveDate,
    /// Start time of the slot.
    pub start_time: NaiveTime,
    /// End time of the slot.
    pub end_time: NaiveTime,
    /// Aggregate score in half-points.
    pub score_half_points: i64,
    /// Number of `available` responses.
    pub available_count: u64,
    /// Number of `maybe` responses.
    pub maybe_count: u64,
    /// Number of `unavailable` responses.
    pub unavailable_count: u64,
}

impl RankedSlot {
    /// Converts the ranked entry to a DTO for API responses.
    pub fn into_dto(self) -> RankedSlotDto {
        RankedSlotDto {
            slot_id: self.slot_id,
            slot_date: self.slot_date,
            start_time: self.start_time,
            end_time: self.end_time,
            score: self.score_half_points as f64 / 2.0,
            available_count: self.available_count,
            maybe_count: self.maybe_count,
            unavailable_count: self.unavailable_count,
        }
    }
}

/// How the aggregator treats slots that received `unavailable` responses.
///
/// Configured through the `SCORE_POLICY` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Drop slots with at least one `unavailable` response from the ranking.
    #[default]
    Exclude,
    /// Keep such slots but subtract 1000 points per `unavailable` response.
    Penalize,
}

impl FromStr for ScorePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "exclude" => Ok(Self::Exclude),
            "penalize" => Ok(Self::Penalize),
            other => Err(format!("unknown score policy '{}'", other)),
        }
    }
}

/// Maps the wire availability enum to the stored availability enum.
pub fn availability_from_dto(value: AvailabilityDto) -> Availability {
    match value {
        AvailabilityDto::Available => Availability::Available,
        AvailabilityDto::Maybe => Availability::Maybe,
        AvailabilityDto::Unavailable => Availability::Unavailable,
    }
}

/// Maps the stored availability enum to the wire availability enum.
pub fn availability_to_dto(value: Availability) -> AvailabilityDto {
    match value {
        Availability::Available => AvailabilityDto::Available,
        Availability::Maybe => AvailabilityDto::Maybe,
        Availability::Unavailable => AvailabilityDto::Unavailable,
    }
}
