use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// The caller must log in before accessing the resource. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Usually a stale session surviving a user deletion. Results in a
    /// 401 Unauthorized response.
    #[error("Authenticated user {0} no longer exists")]
    UserNotInDatabase(i32),

    /// The caller is authenticated but lacks the required team role.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User lacks the required team role")]
    AccessDenied,

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// Both cases map to the same variant so responses do not reveal which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email address is already registered")]
    EmailTaken,

    /// Submitted verification code is wrong, expired, or was never issued.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired verification code")]
    VerificationFailed,

    /// Signup attempted without completing email verification first.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email address has not been verified")]
    EmailNotVerified,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages:
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `EmailTaken` → 409 Conflict
/// - `VerificationFailed` / `EmailNotVerified` → 400 Bad Request
///
/// Client-facing messages stay generic to avoid leaking which emails exist or
/// why exactly a login was rejected.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "This email address is already registered.".to_string(),
                }),
            )
                .into_response(),
            Self::VerificationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired verification code.".to_string(),
                }),
            )
                .into_response(),
            Self::EmailNotVerified => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Please verify your email address before signing up.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
