//! Audit trail querying
//!
//! Filtering and pagination types shared by the audit-log port and the API
//! layer. Matching lives here so every adapter filters identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, UserId};

use crate::audit::{AuditEntry, AuditEventType};

/// Filter criteria for the audit trail; all fields are conjunctive
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditTrailFilter {
    pub event_type: Option<AuditEventType>,
    pub claim_id: Option<ClaimId>,
    pub user_id: Option<UserId>,
    /// Matches entries whose actor is this user; `System` entries never match
    pub actor_id: Option<UserId>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl AuditTrailFilter {
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(event_type) = self.event_type {
            if entry.event_type != event_type {
                return false;
            }
        }
        if let Some(claim_id) = self.claim_id {
            if entry.claim_id != Some(claim_id) {
                return false;
            }
        }
        if let Some(user_id) = self.user_id {
            if entry.user_id != Some(user_id) {
                return false;
            }
        }
        if let Some(actor_id) = self.actor_id {
            if entry.actor.user_id() != Some(actor_id) {
                return false;
            }
        }
        if let Some(from) = self.from {
            if entry.recorded_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.recorded_at >= to {
                return false;
            }
        }
        true
    }
}

/// Offset/limit pagination
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// One page of audit trail results, newest first
#[derive(Debug, Clone, Serialize)]
pub struct AuditTrailPage {
    pub entries: Vec<AuditEntry>,
    /// Total entries matching the filter, across all pages
    pub total: usize,
    pub limit: u32,
    pub offset: u32,
}
