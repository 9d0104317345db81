//! User domain models and parameters.
//!
//! Provides domain models for application users with credential and login tracking.
//! Includes parameter types for account creation during signup.

use chrono::{DateTime, Utc};

use crate::dto::auth::UserDto;

/// Application user with login credentials and activity metadata.
///
/// Tracks the user's email identity, password hash, display name, and the last
/// time they logged in. The password hash stays inside the domain layer and is
/// never exposed through DTO conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Email address used for login. Unique across all users.
    pub email: String,
    /// Argon2 hash of the user's password in PHC string format.
    pub password_hash: String,
    /// Display name of the user.
    pub name: String,
    /// Last time the user logged in, if ever.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            name: entity.name,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped during conversion.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new user account during signup.
///
/// The password arrives already hashed; plaintext passwords never cross the
/// repository boundary.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Email address for the new account.
    pub email: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    /// Display name for the new account.
    pub name: String,
}

/// Parameters for a signup attempt.
///
/// Carries the plaintext password from the request; the auth service hashes
/// it before anything is persisted.
#[derive(Debug, Clone)]
pub struct SignupParams {
    /// Email address to register. Must have passed verification.
    pub email: String,
    /// Plaintext password chosen by the user.
    pub password: String,
    /// Display name for the new account.
    pub name: String,
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParams {
    /// Email address of the account.
    pub email: String,
    /// Plaintext password to check against the stored hash.
    pub password: String,
}
