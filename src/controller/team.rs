use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::team_member::TeamRole;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        team::{
            AddTeamMemberDto, CreateTeamDto, TeamDetailDto, TeamDto, TeamMemberDto, UpdateTeamDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::team::{team_role_from_dto, AddTeamMemberParams, CreateTeamParams, UpdateTeamParams},
    service::team::TeamService,
    state::AppState,
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a new team.
///
/// Creates a team with the caller as its first manager. Any logged-in user
/// may create teams.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Team creation data (name and optional description)
///
/// # Returns
/// - `201 Created` - Successfully created team
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TeamService::new(&state.db);

    let team = service
        .create_team(CreateTeamParams {
            name: payload.name,
            description: payload.description,
            creator_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Get the caller's teams.
///
/// Returns every team the logged-in user belongs to, in any role.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of teams the user belongs to
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TeamService::new(&state.db);

    let teams = service.get_teams_for_user(user.id).await?;
    let teams: Vec<TeamDto> = teams.into_iter().map(|team| team.into_dto()).collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get a team with its member roster.
///
/// Returns the team and its full roster with managers listed first. Only
/// members of the team can view it.
///
/// # Access Control
/// - `TeamMember` - Caller must belong to the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to fetch
///
/// # Returns
/// - `200 OK` - Team details with member roster
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamMember(team_id)])
        .await?;

    let service = TeamService::new(&state.db);

    let detail = service.get_team_detail(team_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update a team's name and description.
///
/// # Access Control
/// - `TeamManager` - Only managers can rename the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to update
/// - `payload` - New name and description
///
/// # Returns
/// - `200 OK` - Updated team
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a manager of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let service = TeamService::new(&state.db);

    let team = service
        .update_team(UpdateTeamParams {
            id: team_id,
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team.
///
/// Removes the team along with its memberships, polls, slots, responses, and
/// notifications that reference it.
///
/// # Access Control
/// - `TeamManager` - Only managers can delete the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to delete
///
/// # Returns
/// - `204 No Content` - Team deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a manager of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let service = TeamService::new(&state.db);

    service.delete_team(team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to a team by email.
///
/// Looks up the user by their account email and enrolls them with the given
/// role (member when omitted). The added user is notified.
///
/// # Access Control
/// - `TeamManager` - Only managers can add members
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to add the member to
/// - `payload` - Email of the user to add and optional role
///
/// # Returns
/// - `201 Created` - Member added to the team
/// - `400 Bad Request` - User is already a member
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a manager of the team
/// - `404 Not Found` - No account with the given email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/members",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = AddTeamMemberDto,
    responses(
        (status = 201, description = "Successfully added member", body = TeamMemberDto),
        (status = 400, description = "User is already a member", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager of the team", body = ErrorDto),
        (status = 404, description = "No account with the given email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<AddTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let service = TeamService::new(&state.db);

    let role = payload
        .role
        .map(team_role_from_dto)
        .unwrap_or(TeamRole::Member);

    let member = service
        .add_member(AddTeamMemberParams {
            team_id,
            email: payload.email,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Remove a member from a team.
///
/// Drops the membership and the user's responses in the team's open polls.
/// Managers cannot remove themselves with this endpoint; leaving is a
/// separate operation.
///
/// # Access Control
/// - `TeamManager` - Only managers can remove members
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to remove the member from
/// - `user_id` - User ID of the member to remove
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `400 Bad Request` - Attempted self-removal
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a manager of the team
/// - `404 Not Found` - Target user is not on the roster
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/members/{user_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID of the member to remove")
    ),
    responses(
        (status = 204, description = "Successfully removed member"),
        (status = 400, description = "Attempted self-removal", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager of the team", body = ErrorDto),
        (status = 404, description = "Target user is not on the roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let acting_user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let service = TeamService::new(&state.db);

    service.remove_member(team_id, user_id, acting_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a team.
///
/// Drops the caller's membership and their responses in the team's open
/// polls. The last remaining manager cannot leave.
///
/// # Access Control
/// - Any authenticated user who belongs to the team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `team_id` - Team ID to leave
///
/// # Returns
/// - `204 No Content` - Left the team
/// - `400 Bad Request` - Caller is the last manager
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Caller is not a member of the team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/leave",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully left the team"),
        (status = 400, description = "Caller is the last manager", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TeamService::new(&state.db);

    service.leave_team(team_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
