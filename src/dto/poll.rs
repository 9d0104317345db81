use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire form of a participant's availability for a slot.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityDto {
    Available,
    Maybe,
    Unavailable,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePollDto {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String, // Format: "YYYY-MM-DD"
    pub end_date: String,   // Format: "YYYY-MM-DD"
    pub start_time: String, // Format: "HH:MM"
    pub end_time: String,   // Format: "HH:MM"
    pub interval_minutes: i32,
    #[serde(default)]
    pub deadline: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    #[serde(default = "default_allow_multiple_selection")]
    pub allow_multiple_selection: bool,
}

fn default_allow_multiple_selection() -> bool {
    true
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubmitResponseDto {
    pub slot_id: i32,
    pub availability: AvailabilityDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PollSlotDto {
    pub id: i32,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PollDto {
    pub id: i32,
    pub team_id: i32,
    pub creator_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub interval_minutes: i32,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline: Option<DateTime<Utc>>,
    pub allow_multiple_selection: bool,
    pub is_active: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub slots: Vec<PollSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PollListItemDto {
    pub id: i32,
    pub team_id: i32,
    pub creator_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPollsDto {
    pub polls: Vec<PollListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PollResponseDto {
    pub id: i32,
    pub poll_id: i32,
    pub slot_id: i32,
    pub user_id: i32,
    pub availability: AvailabilityDto,
}

/// One participant's availability within a grouped slot listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ResponseEntryDto {
    pub user_id: i32,
    pub user_name: String,
    pub availability: AvailabilityDto,
}

/// All responses for one slot, in slot order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SlotResponsesDto {
    pub slot: PollSlotDto,
    pub responses: Vec<ResponseEntryDto>,
}

/// One entry of the ranked aggregation.
///
/// `score` is `available + 0.5 * maybe`, adjusted by the configured policy
/// for `unavailable` responses. Slots excluded by the policy do not appear.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankedSlotDto {
    pub slot_id: i32,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub score: f64,
    pub available_count: u64,
    pub maybe_count: u64,
    pub unavailable_count: u64,
}
