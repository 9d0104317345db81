use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{api::ErrorDto, notification::PaginatedNotificationsDto},
    error::AppError,
    middleware::auth::AuthGuard,
    service::notification::NotificationService,
    state::AppState,
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

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

/// Get the caller's notifications.
///
/// Returns the logged-in user's notifications newest first.
///
/// # Access Control
/// - Any authenticated user; the listing is scoped to the caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of notifications
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let notifications = service
        .get_notifications(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark a notification as read.
///
/// Only the notification's owner can mark it; anyone else gets a 404 so that
/// notification ids are not probeable.
///
/// # Access Control
/// - Notification owner only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `notification_id` - Notification ID to mark as read
///
/// # Returns
/// - `204 No Content` - Notification marked as read
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Notification not found or owned by someone else
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Successfully marked as read"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.mark_read(notification_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
