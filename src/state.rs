//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::{model::poll::ScorePolicy, service::verification::VerificationCodeService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `VerificationCodeService` uses `Arc` for shared state
/// - `ScorePolicy` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Service for managing pending email verification codes.
    ///
    /// Holds codes issued during signup and the verified markers they turn
    /// into, so that account creation can check that the email was confirmed.
    pub verification_codes: VerificationCodeService,

    /// How poll result scoring treats `unavailable` responses.
    ///
    /// Read once from the `SCORE_POLICY` environment variable at startup and
    /// applied to every results and best-slot computation.
    pub score_policy: ScorePolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verification_codes` - Service for managing verification codes
    /// - `score_policy` - Scoring policy for poll results
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        verification_codes: VerificationCodeService,
        score_policy: ScorePolicy,
    ) -> Self {
        Self {
            db,
            verification_codes,
            score_policy,
        }
    }
}
