//! User aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::UserId;

use crate::error::UserError;

/// Role of a desk account, immutable after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Works claim edits; may hold claim assignments
    Editor,
    /// Runs the desk; may not hold claim assignments
    Manager,
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A desk account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name, 2-100 characters
    pub name: String,
    /// Email, unique case-insensitively across the registry
    pub email: String,
    /// Role, immutable after creation
    pub role: Role,
    /// Active/inactive status
    pub status: UserStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new_v7(),
            name: name.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn is_editor(&self) -> bool {
        self.role == Role::Editor
    }

    /// Lowercased email used for uniqueness comparisons
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }

    /// Deactivates the account; claims held by the user are redistributed
    /// by the service layer as part of the same operation
    pub fn deactivate(&mut self) -> Result<(), UserError> {
        if self.status == UserStatus::Inactive {
            return Err(UserError::AlreadyInactive { user_id: self.id });
        }
        self.status = UserStatus::Inactive;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Re-activates a deactivated account
    pub fn activate(&mut self) -> Result<(), UserError> {
        if self.status == UserStatus::Active {
            return Err(UserError::AlreadyActive { user_id: self.id });
        }
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
        Ok(())
    }
}
