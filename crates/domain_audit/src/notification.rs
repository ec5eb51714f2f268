//! Per-user notifications
//!
//! Ephemeral, read/unread, optionally expiring. Not part of durable
//! history; the audit log is the record of truth.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{NotificationId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient: UserId,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn new(recipient: UserId, body: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new_v7(),
            recipient,
            body: body.into(),
            read: false,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Sets an expiry relative to creation
    pub fn expiring_after(mut self, ttl: Duration) -> Self {
        self.expires_at = Some(self.created_at + ttl);
        self
    }

    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| at >= expiry)
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
