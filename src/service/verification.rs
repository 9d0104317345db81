//! Verification code service for signup email verification.
//!
//! This module provides the `VerificationCodeService` for generating and validating
//! temporary signup codes. A code is issued per email address with a short TTL,
//! and a successful check marks the email verified for a longer window during
//! which the signup must complete. Codes and markers live in memory; email
//! delivery is an external concern and the issued code is only logged.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for pending verification codes in seconds.
const CODE_TTL_SECONDS: u64 = 5 * 60;

/// Time-to-live for verified email markers in seconds.
const VERIFIED_TTL_SECONDS: u64 = 30 * 60;

/// Stored verification code with expiration timestamp.
#[derive(Clone)]
struct PendingCode {
    /// The verification code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl PendingCode {
    /// Checks if the code has expired.
    ///
    /// # Returns
    /// - `true` - Code has expired
    /// - `false` - Code is still valid
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Checks if the provided input matches this code.
    ///
    /// # Arguments
    /// - `input` - The code string to compare against
    ///
    /// # Returns
    /// - `true` - Input matches the stored code
    /// - `false` - Input does not match
    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing temporary signup verification codes.
///
/// Provides methods for issuing one-time numeric codes per email address and
/// tracking which emails recently passed verification. The store is injected
/// into the application state, so every handler shares the same maps and tests
/// can construct isolated instances with short TTLs.
#[derive(Clone)]
pub struct VerificationCodeService {
    /// How long an issued code stays valid.
    code_ttl: Duration,
    /// How long a verified email may complete signup.
    verified_ttl: Duration,
    /// Pending codes keyed by email address.
    pending: Arc<RwLock<HashMap<String, PendingCode>>>,
    /// Verified email markers with their expiration timestamps.
    verified: Arc<RwLock<HashMap<String, Instant>>>,
}

impl VerificationCodeService {
    /// Creates a new VerificationCodeService with the default TTLs.
    ///
    /// Codes expire after 5 minutes; a verified email has 30 minutes to
    /// complete signup.
    ///
    /// # Returns
    /// - `VerificationCodeService` - New service instance with empty stores
    pub fn new() -> Self {
        Self::with_ttls(
            Duration::from_secs(CODE_TTL_SECONDS),
            Duration::from_secs(VERIFIED_TTL_SECONDS),
        )
    }

    /// Creates a service with custom TTLs.
    ///
    /// Used by tests to exercise expiry without multi-minute sleeps.
    ///
    /// # Arguments
    /// - `code_ttl` - Lifetime of issued codes
    /// - `verified_ttl` - Lifetime of verified email markers
    ///
    /// # Returns
    /// - `VerificationCodeService` - New service instance with empty stores
    pub fn with_ttls(code_ttl: Duration, verified_ttl: Duration) -> Self {
        Self {
            code_ttl,
            verified_ttl,
            pending: Arc::new(RwLock::new(HashMap::new())),
            verified: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a new 6-digit code for the given email.
    ///
    /// Any previously issued code for the email is replaced, so only the most
    /// recent code verifies.
    ///
    /// # Arguments
    /// - `email` - Email address the code is issued for
    ///
    /// # Returns
    /// - `String` - The issued 6-digit numeric code
    pub async fn issue(&self, email: &str) -> String {
        let code = Self::generate_numeric_code();
        let pending = PendingCode {
            code: code.clone(),
            expires_at: Instant::now() + self.code_ttl,
        };
        self.pending.write().await.insert(email.to_string(), pending);
        code
    }

    /// Validates a code and marks the email verified on success.
    ///
    /// A matching, unexpired code is consumed and the email gains a verified
    /// marker for the verified TTL. Expired codes are removed and fail
    /// validation; a wrong code leaves the stored one in place for another
    /// attempt.
    ///
    /// # Arguments
    /// - `email` - Email address the code was issued for
    /// - `input_code` - The code string to validate
    ///
    /// # Returns
    /// - `true` - Code matched and the email is now verified
    /// - `false` - Code doesn't match, is expired, or none was issued
    pub async fn verify(&self, email: &str, input_code: &str) -> bool {
        let mut pending = self.pending.write().await;

        let Some(stored) = pending.get(email) else {
            return false;
        };

        if stored.is_expired() {
            pending.remove(email);
            return false;
        }

        if !stored.matches(input_code) {
            return false;
        }

        pending.remove(email);
        self.verified
            .write()
            .await
            .insert(email.to_string(), Instant::now() + self.verified_ttl);

        true
    }

    /// Consumes the verified marker for an email.
    ///
    /// Called during signup: the marker is removed whether or not it is still
    /// valid, so each verification admits exactly one signup attempt.
    ///
    /// # Arguments
    /// - `email` - Email address to check
    ///
    /// # Returns
    /// - `true` - The email was verified and the marker was still valid
    /// - `false` - The email was never verified or the marker expired
    pub async fn consume_verified(&self, email: &str) -> bool {
        let mut verified = self.verified.write().await;

        match verified.remove(email) {
            Some(expires_at) => Instant::now() < expires_at,
            None => false,
        }
    }

    /// Generates a random 6-digit numeric code.
    ///
    /// Leading zeros are allowed, so the code is always six characters.
    ///
    /// # Returns
    /// - `String` - A 6-character string of digits
    fn generate_numeric_code() -> String {
        let mut rng = rand::rng();

        (0..6)
            .map(|_| {
                let digit = rng.random_range(0..10u32);
                char::from_digit(digit, 10).unwrap_or('0')
            })
            .collect()
    }

    /// Checks if a pending, unexpired code exists for the email.
    ///
    /// Used in tests to verify code state.
    ///
    /// # Returns
    /// - `true` - A valid code is stored for the email
    /// - `false` - No code exists or it has expired
    #[cfg(test)]
    pub async fn has_pending_code(&self, email: &str) -> bool {
        let mut pending = self.pending.write().await;

        if let Some(stored) = pending.get(email) {
            if stored.is_expired() {
                pending.remove(email);
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for VerificationCodeService {
    fn default() -> Self {
        Self::new()
    }
}
