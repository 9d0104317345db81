//! Authentication service for business logic.
//!
//! This module provides the `AuthService` for signup and login flows. It owns
//! password hashing (argon2, PHC string format) and the verification handshake
//! that gates account creation. Session state is managed by the controllers
//! through `AuthSession`; this service only touches credentials and users.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, SignupParams, User},
    service::verification::VerificationCodeService,
};

/// Service providing business logic for signup, verification, and login.
///
/// This struct holds a reference to the database connection and provides
/// methods for the account lifecycle. The verification code store is passed
/// in per call since it lives in the shared application state.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a signup verification code for an email address.
    ///
    /// The code is logged rather than emailed; delivery is an external
    /// concern. Reissuing replaces any previous code for the address.
    ///
    /// # Arguments
    /// - `codes` - The shared verification code store
    /// - `email` - Email address to issue the code for
    pub async fn request_verification(&self, codes: &VerificationCodeService, email: &str) {
        let code = codes.issue(email).await;
        tracing::info!("Issued verification code {} for {}", code, email);
    }

    /// Checks a submitted verification code and marks the email verified.
    ///
    /// # Arguments
    /// - `codes` - The shared verification code store
    /// - `email` - Email address the code was issued for
    /// - `code` - The submitted code
    ///
    /// # Returns
    /// - `Ok(())` - Code matched; the email may sign up for the next 30 minutes
    /// - `Err(AuthError::VerificationFailed)` - Wrong, expired, or missing code
    pub async fn verify_code(
        &self,
        codes: &VerificationCodeService,
        email: &str,
        code: &str,
    ) -> Result<(), AppError> {
        if !codes.verify(email, code).await {
            return Err(AuthError::VerificationFailed.into());
        }

        Ok(())
    }

    /// Creates a new user account.
    ///
    /// Consumes the email's verified marker, rejects emails that already have
    /// an account, hashes the password, and persists the user.
    ///
    /// # Arguments
    /// - `codes` - The shared verification code store
    /// - `param` - Signup parameters with email, plaintext password, and name
    ///
    /// # Returns
    /// - `Ok(User)` - The newly created user
    /// - `Err(AuthError::EmailNotVerified)` - Verification was skipped or expired
    /// - `Err(AuthError::EmailTaken)` - An account with the email exists
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn signup(
        &self,
        codes: &VerificationCodeService,
        param: SignupParams,
    ) -> Result<User, AppError> {
        if !codes.consume_verified(&param.email).await {
            return Err(AuthError::EmailNotVerified.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = Self::hash_password(&param.password)?;
        let user = user_repo
            .create(CreateUserParams {
                email: param.email,
                password_hash,
                name: param.name,
            })
            .await?;

        Ok(user)
    }

    /// Authenticates a user by email and password.
    ///
    /// Unknown emails and wrong passwords fail identically so responses never
    /// reveal which addresses are registered. On success the login timestamp
    /// is stamped; the returned model still carries the previous login time.
    ///
    /// # Arguments
    /// - `param` - Login parameters with email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup or stamp
    pub async fn login(&self, param: LoginParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !Self::verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        user_repo.record_login(user.id).await?;

        Ok(user)
    }

    /// Hashes a plaintext password into PHC string format.
    ///
    /// # Arguments
    /// - `password` - The plaintext password
    ///
    /// # Returns
    /// - `Ok(String)` - Argon2 hash with embedded salt and parameters
    /// - `Err(AppError::InternalError)` - Hashing failed
    fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Checks a plaintext password against a stored PHC hash.
    ///
    /// # Arguments
    /// - `password` - The plaintext password to check
    /// - `stored_hash` - The PHC format hash from the database
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::InternalError)` - Stored hash could not be parsed
    fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| {
            AppError::InternalError(format!("Stored password hash is invalid: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
