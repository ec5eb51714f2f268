//! Append-only audit records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AuditEventId, ClaimId, UserId};

/// Event types recorded by the desk, one per state-changing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    ClaimReassigned,
    ClaimForceReassigned,
    ClaimAutoReassigned,
    ClaimReAdjudicated,
    UserCreated,
    UserActivated,
    UserDeactivated,
    PasswordResetInitiated,
}

/// Who performed an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Actor {
    /// A signed-in desk user
    User { id: UserId, name: String },
    /// The system itself, e.g. automatic redistribution
    System,
}

impl Actor {
    pub fn user(id: UserId, name: impl Into<String>) -> Self {
        Actor::User {
            id,
            name: name.into(),
        }
    }

    /// The actor's user id, if it is a user
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Actor::User { id, .. } => Some(*id),
            Actor::System => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Actor::User { name, .. } => name,
            Actor::System => "system",
        }
    }
}

/// An immutable audit record
///
/// `details` carries structured before/after values as JSON, matching
/// whatever the event type mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEventId,
    pub event_type: AuditEventType,
    /// Subject claim, when the event concerns one
    pub claim_id: Option<ClaimId>,
    /// Subject user, when the event concerns one
    pub user_id: Option<UserId>,
    pub actor: Actor,
    pub recorded_at: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl AuditEntry {
    /// Creates an entry stamped with the current time; the audit log may
    /// still nudge `recorded_at` forward to preserve monotonic ordering
    pub fn new(event_type: AuditEventType, actor: Actor) -> Self {
        Self {
            id: AuditEventId::new_v7(),
            event_type,
            claim_id: None,
            user_id: None,
            actor,
            recorded_at: Utc::now(),
            details: serde_json::Value::Null,
        }
    }

    pub fn for_claim(mut self, claim_id: ClaimId) -> Self {
        self.claim_id = Some(claim_id);
        self
    }

    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}
