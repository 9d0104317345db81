use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        poll::{
            CreatePollDto, PaginatedPollsDto, PollDto, PollListItemDto, PollResponseDto,
            RankedSlotDto, SlotResponsesDto, SubmitResponseDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::poll::PollService,
    state::AppState,
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "poll";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Create a new availability poll.
///
/// Generates the candidate slot grid from the date range, daily time window,
/// and interval, then stores the poll and its slots in one step. Team members
/// other than the creator are notified.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to create the poll in
/// - `payload` - Poll creation data (title, date range, time window, interval)
///
/// # Returns
/// - `201 Created` - Successfully created poll with its slots
/// - `400 Bad Request` - Malformed dates, inverted range, or non-positive interval
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/polls",
    tag = POLL_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = CreatePollDto,
    responses(
        (status = 201, description = "Successfully created poll", body = PollDto),
        (status = 400, description = "Invalid poll data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamMember(team_id)])
        .await?;

    let service = PollService::new(&state.db);

    let poll = service.create_poll(team_id, user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(poll.into_dto())))
}

/// Get paginated polls for a team.
///
/// Returns the team's polls newest first.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to fetch polls for
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of polls
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/polls",
    tag = POLL_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved polls", body = PaginatedPollsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_polls(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamMember(team_id)])
        .await?;

    let service = PollService::new(&state.db);

    let polls = service
        .get_polls_for_team(team_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(polls.into_dto())))
}

/// Get a poll with its slots.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the poll's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to fetch
///
/// # Returns
/// - `200 OK` - Poll with its slots in chronological order
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the poll's team
/// - `404 Not Found` - Poll not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved poll", body = PollDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the poll's team", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let _ = guard.require(&[]).await?;

    let service = PollService::new(&state.db);

    let poll = service.get_poll_with_slots(poll_id).await?;

    let _ = guard
        .require(&[Permission::TeamMember(poll.poll.team_id)])
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Submit or revise an availability response.
///
/// Each user has at most one response per slot; submitting again overwrites
/// the previous choice. When the poll disallows multiple selection, marking a
/// slot `available` clears the user's `available` marks on every other slot.
/// A poll past its deadline is closed on the spot and the submission is
/// rejected.
///
/// # Access Control
/// - Any authenticated user; membership in the poll's team is checked after
///   the slot is validated
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID being answered
/// - `payload` - Slot ID and availability level
///
/// # Returns
/// - `200 OK` - Stored response
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the poll's team
/// - `404 Not Found` - Poll not found, or slot not part of the poll
/// - `409 Conflict` - Poll is closed or past its deadline
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/polls/{poll_id}/responses",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    request_body = SubmitResponseDto,
    responses(
        (status = 200, description = "Successfully stored response", body = PollResponseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the poll's team", body = ErrorDto),
        (status = 404, description = "Poll or slot not found", body = ErrorDto),
        (status = 409, description = "Poll is closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_response(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
    Json(payload): Json<SubmitResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PollService::new(&state.db);

    let response = service.submit_response(poll_id, user.id, payload).await?;

    Ok((StatusCode::OK, Json(response.into_dto())))
}

/// Get all responses for a poll grouped by slot.
///
/// Every slot appears in the listing, including slots nobody has answered
/// yet.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the poll's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to fetch responses for
///
/// # Returns
/// - `200 OK` - Responses grouped per slot
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the poll's team
/// - `404 Not Found` - Poll not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}/responses",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved responses", body = Vec<SlotResponsesDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the poll's team", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll_responses(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let _ = guard.require(&[]).await?;

    let service = PollService::new(&state.db);

    let poll = service.get_poll_with_slots(poll_id).await?;

    let _ = guard
        .require(&[Permission::TeamMember(poll.poll.team_id)])
        .await?;

    let responses = service.list_responses(poll_id).await?;
    let responses: Vec<SlotResponsesDto> = responses
        .into_iter()
        .map(|slot| slot.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(responses)))
}

/// Get the ranked aggregation for a poll.
///
/// Scores every slot from its responses and returns the ranking best first.
/// How `unavailable` responses are treated depends on the server's scoring
/// policy: they either drop the slot from the ranking or penalize its score.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the poll's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to rank
///
/// # Returns
/// - `200 OK` - Slots ranked best first
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the poll's team
/// - `404 Not Found` - Poll not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}/ranking",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully ranked slots", body = Vec<RankedSlotDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the poll's team", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll_ranking(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let _ = guard.require(&[]).await?;

    let service = PollService::new(&state.db);

    let poll = service.get_poll_with_slots(poll_id).await?;

    let _ = guard
        .require(&[Permission::TeamMember(poll.poll.team_id)])
        .await?;

    let ranked = service.rank_poll_slots(poll_id, state.score_policy).await?;
    let ranked: Vec<RankedSlotDto> = ranked.into_iter().map(|slot| slot.into_dto()).collect();

    Ok((StatusCode::OK, Json(ranked)))
}

/// Get the single best slot for a poll.
///
/// Returns the top-ranked slot, or 404 when the poll has no responses at all
/// or the scoring policy excluded every slot.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the poll's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to pick the best slot for
///
/// # Returns
/// - `200 OK` - The best slot
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the poll's team
/// - `404 Not Found` - Poll not found, or no responses to rank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}/best-slot",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully picked the best slot", body = RankedSlotDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the poll's team", body = ErrorDto),
        (status = 404, description = "Poll not found or has no responses", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_best_slot(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let _ = guard.require(&[]).await?;

    let service = PollService::new(&state.db);

    let poll = service.get_poll_with_slots(poll_id).await?;

    let _ = guard
        .require(&[Permission::TeamMember(poll.poll.team_id)])
        .await?;

    let best = service.best_slot(poll_id, state.score_policy).await?;

    Ok((StatusCode::OK, Json(best.into_dto())))
}

/// Close a poll to further responses.
///
/// Team members are notified that the poll closed.
///
/// # Access Control
/// - Poll creator only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to close
///
/// # Returns
/// - `200 OK` - The closed poll
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not the poll's creator
/// - `404 Not Found` - Poll not found
/// - `409 Conflict` - Poll is already closed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/polls/{poll_id}/close",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully closed poll", body = PollListItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the poll's creator", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 409, description = "Poll is already closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_poll(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PollService::new(&state.db);

    let poll = service.close_poll(poll_id, user.id).await?;

    Ok((StatusCode::OK, Json(poll.into_list_item_dto())))
}

/// Delete a poll.
///
/// Removes the poll along with its slots and responses.
///
/// # Access Control
/// - Poll creator only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `poll_id` - Poll ID to delete
///
/// # Returns
/// - `204 No Content` - Poll deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not the poll's creator
/// - `404 Not Found` - Poll not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/polls/{poll_id}",
    tag = POLL_TAG,
    params(
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted poll"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the poll's creator", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_poll(
    State(state): State<AppState>,
    session: Session,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PollService::new(&state.db);

    service.delete_poll(poll_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
