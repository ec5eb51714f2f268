//! Audit trail and notification DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, NotificationId, UserId};
use domain_audit::{AuditEntry, AuditEventType, AuditTrailFilter, AuditTrailPage, Notification, Page};

/// Query parameters for the audit trail
#[derive(Debug, Default, Deserialize)]
pub struct AuditTrailQuery {
    pub event_type: Option<AuditEventType>,
    pub claim_id: Option<ClaimId>,
    pub user_id: Option<UserId>,
    pub actor_id: Option<UserId>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl AuditTrailQuery {
    pub fn filter(&self) -> AuditTrailFilter {
        AuditTrailFilter {
            event_type: self.event_type,
            claim_id: self.claim_id,
            user_id: self.user_id,
            actor_id: self.actor_id,
            from: self.from,
            to: self.to,
        }
    }

    pub fn page(&self) -> Page {
        let default = Page::default();
        Page {
            limit: self.limit.unwrap_or(default.limit),
            offset: self.offset.unwrap_or(default.offset),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuditTrailResponse {
    pub entries: Vec<AuditEntry>,
    pub total: usize,
    pub limit: u32,
    pub offset: u32,
}

impl From<AuditTrailPage> for AuditTrailResponse {
    fn from(page: AuditTrailPage) -> Self {
        Self {
            entries: page.entries,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

/// Query parameters for the notification inbox
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    #[serde(default)]
    pub include_read: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            body: notification.body,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
