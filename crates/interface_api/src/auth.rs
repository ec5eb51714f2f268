//! Authentication and authorization

use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;
use domain_audit::Actor;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name, carried into audit entries
    pub name: String,
    /// Desk role (EDITOR or MANAGER)
    pub role: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    /// The audit actor this token represents
    pub fn actor(&self) -> Result<Actor, AuthError> {
        let id = UserId::from_str(&self.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(Actor::user(id, self.name.clone()))
    }

    pub fn user_id(&self) -> Result<UserId, AuthError> {
        UserId::from_str(&self.sub).map_err(|_| AuthError::InvalidToken)
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// Creates a new JWT token
pub fn create_token(
    user_id: UserId,
    name: &str,
    role: &str,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.as_uuid().to_string(),
        name: name.to_string(),
        role: role.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let user_id = UserId::new_v7();
        let token = create_token(user_id, "Mara Chen", "MANAGER", "test-secret", 60).unwrap();

        let claims = validate_token(&token, "test-secret").unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.actor().unwrap().display_name(), "Mara Chen");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(UserId::new_v7(), "x", "EDITOR", "secret-a", 60).unwrap();
        assert!(validate_token(&token, "secret-b").is_err());
    }
}
