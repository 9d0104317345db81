use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::{get_user, login, logout, request_verification_code, signup, verify_code},
        notification::{
            __path_get_notifications, __path_mark_notification_read, get_notifications,
            mark_notification_read, NOTIFICATION_TAG,
        },
        poll::{
            __path_close_poll, __path_create_poll, __path_delete_poll, __path_get_best_slot,
            __path_get_poll, __path_get_poll_ranking, __path_get_poll_responses,
            __path_get_team_polls, __path_submit_response, close_poll, create_poll, delete_poll,
            get_best_slot, get_poll, get_poll_ranking, get_poll_responses, get_team_polls,
            submit_response, POLL_TAG,
        },
        team::{
            __path_add_team_member, __path_create_team, __path_delete_team, __path_get_team,
            __path_get_teams, __path_leave_team, __path_remove_team_member, __path_update_team,
            add_team_member, create_team, delete_team, get_team, get_teams, leave_team,
            remove_team_member, update_team, TEAM_TAG,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = TEAM_TAG, description = "Team and membership management"),
    (name = POLL_TAG, description = "Availability polls, responses, and results"),
    (name = NOTIFICATION_TAG, description = "Per-user notifications")
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let auth_routes = Router::new()
        .route(
            "/api/auth/verification-code",
            post(request_verification_code),
        )
        .route("/api/auth/verify-code", post(verify_code))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/user", get(get_user));

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_team, get_teams))
        .routes(routes!(get_team, update_team, delete_team))
        .routes(routes!(add_team_member))
        .routes(routes!(remove_team_member))
        .routes(routes!(leave_team))
        .routes(routes!(create_poll, get_team_polls))
        .routes(routes!(get_poll, delete_poll))
        .routes(routes!(submit_response, get_poll_responses))
        .routes(routes!(get_poll_ranking))
        .routes(routes!(get_best_slot))
        .routes(routes!(close_poll))
        .routes(routes!(get_notifications))
        .routes(routes!(mark_notification_read))
        .split_for_parts();

    auth_routes
        .merge(api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
