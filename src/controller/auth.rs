use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::auth::{LoginDto, RequestVerificationDto, SignupDto, VerifyCodeDto},
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::{LoginParams, SignupParams},
    service::auth::AuthService,
    state::AppState,
};

pub async fn request_verification_code(
    State(state): State<AppState>,
    Json(payload): Json<RequestVerificationDto>,
) -> impl IntoResponse {
    let auth_service = AuthService::new(&state.db);

    auth_service
        .request_verification(&state.verification_codes, &payload.email)
        .await;

    StatusCode::OK
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    auth_service
        .verify_code(&state.verification_codes, &payload.email, &payload.code)
        .await?;

    Ok(StatusCode::OK)
}

pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .signup(
            &state.verification_codes,
            SignupParams {
                email: payload.email,
                password: payload.password,
                name: payload.name,
            },
        )
        .await?;

    // Log the new account in right away
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .login(LoginParams {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::OK
}

pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
