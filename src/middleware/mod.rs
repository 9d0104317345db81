//! Request processing and authentication guards.
//!
//! This module provides the session wrapper used to track the authenticated
//! user and the `AuthGuard` controllers use to enforce login and team-role
//! requirements before handling a request.

pub mod auth;
pub mod session;
