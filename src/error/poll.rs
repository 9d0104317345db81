use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Domain errors for poll operations.
///
/// These cover the validation and lifecycle failures of slot generation,
/// response submission, aggregation, and closing. Storage failures are not
/// represented here; they surface as `AppError::DbErr`.
#[derive(Error, Debug)]
pub enum PollError {
    /// The candidate date range or daily time window is empty or inverted.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The slot interval is zero, negative, or otherwise unusable.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// The poll is closed, or its deadline has passed.
    ///
    /// Responses and repeated close attempts both land here.
    #[error("Poll is closed")]
    PollClosed,

    /// The referenced slot does not exist within the poll.
    #[error("Slot {0} not found in this poll")]
    SlotNotFound(i32),

    /// The caller is not a member of the team the poll belongs to.
    #[error("User is not a member of this poll's team")]
    ParticipantNotAuthorized,

    /// The operation is reserved for the poll creator.
    #[error("Only the poll creator may perform this operation")]
    Unauthorized,

    /// Aggregation was requested but no slot carries a usable score.
    ///
    /// Raised when the poll has no responses at all, and also when the
    /// exclusion policy filters every slot out of the ranking.
    #[error("Poll has no responses")]
    NoResponses,
}

/// Converts poll domain errors into HTTP responses.
///
/// - `InvalidRange` / `InvalidInterval` → 400 Bad Request
/// - `PollClosed` → 409 Conflict
/// - `SlotNotFound` / `NoResponses` → 404 Not Found
/// - `ParticipantNotAuthorized` / `Unauthorized` → 403 Forbidden
impl IntoResponse for PollError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRange(_) | Self::InvalidInterval(_) => StatusCode::BAD_REQUEST,
            Self::PollClosed => StatusCode::CONFLICT,
            Self::SlotNotFound(_) | Self::NoResponses => StatusCode::NOT_FOUND,
            Self::ParticipantNotAuthorized | Self::Unauthorized => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
