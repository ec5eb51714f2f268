//! User domain errors

use thiserror::Error;

use core_kernel::UserId;

/// Errors that can occur in the user registry domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User {user_id} is already active")]
    AlreadyActive { user_id: UserId },

    #[error("User {user_id} is already inactive")]
    AlreadyInactive { user_id: UserId },

    #[error("A user with email {0} already exists")]
    EmailExists(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),
}

impl UserError {
    /// Stable error code for the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            UserError::UserNotFound(_) => "USER_NOT_FOUND",
            UserError::AlreadyActive { .. } => "ALREADY_ACTIVE",
            UserError::AlreadyInactive { .. } => "ALREADY_INACTIVE",
            UserError::EmailExists(_) => "EMAIL_EXISTS",
            UserError::InvalidEmail(_) => "INVALID_EMAIL",
            UserError::InvalidName(_) => "INVALID_NAME",
        }
    }
}
