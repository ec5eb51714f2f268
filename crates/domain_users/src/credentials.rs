//! Credential issuance
//!
//! The desk never stores passwords; it only issues opaque one-time secrets
//! that an external identity system consumes. A temporary credential is
//! returned exactly once at account creation, and a password-reset token is
//! valid for 24 hours.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Validity window for password-reset tokens
pub const RESET_TOKEN_VALIDITY_HOURS: i64 = 24;

/// A one-time credential handed back at account creation
#[derive(Debug, Clone, Serialize)]
pub struct TemporaryCredential {
    pub secret: String,
    pub issued_at: DateTime<Utc>,
}

impl TemporaryCredential {
    pub fn issue() -> Self {
        Self {
            secret: random_secret(),
            issued_at: Utc::now(),
        }
    }
}

/// A time-boxed password-reset token
#[derive(Debug, Clone, Serialize)]
pub struct PasswordResetToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn issue() -> Self {
        let now = Utc::now();
        Self {
            token: random_secret(),
            issued_at: now,
            expires_at: now + Duration::hours(RESET_TOKEN_VALIDITY_HOURS),
        }
    }

    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }
}

// Opaque random string; uniqueness matters here, cryptographic strength is
// the identity system's concern.
fn random_secret() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_credentials_are_distinct() {
        let a = TemporaryCredential::issue();
        let b = TemporaryCredential::issue();
        assert_ne!(a.secret, b.secret);
        assert_eq!(a.secret.len(), 32);
    }

    #[test]
    fn test_reset_token_valid_for_24_hours() {
        let token = PasswordResetToken::issue();
        assert!(!token.is_expired(token.issued_at + Duration::hours(23)));
        assert!(token.is_expired(token.issued_at + Duration::hours(24)));
    }
}
