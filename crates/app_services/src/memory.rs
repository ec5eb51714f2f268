//! In-memory reference adapters
//!
//! One adapter per port, each a `HashMap` (or `Vec` for the audit log)
//! behind `Arc<RwLock>`. These back the test suite and the standalone
//! server when no external claims system is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use core_kernel::{ClaimId, DomainPort, NotificationId, OperationMetadata, PortError, UserId};
use domain_audit::{AuditEntry, AuditTrailFilter, AuditTrailPage, Notification, Page};
use domain_claims::Claim;
use domain_users::User;

use crate::ports::{AuditLogPort, ClaimPort, ClaimQuery, NotificationPort, UserPort, UserQuery};

/// Concrete handles to a set of in-memory adapters, for seeding in tests
/// and the standalone server
#[derive(Clone)]
pub struct InMemoryHandles {
    pub claims: Arc<InMemoryClaimPort>,
    pub users: Arc<InMemoryUserPort>,
    pub audit: Arc<InMemoryAuditLog>,
    pub notifications: Arc<InMemoryNotificationOutbox>,
}

impl InMemoryHandles {
    pub fn new() -> Self {
        Self {
            claims: Arc::new(InMemoryClaimPort::new()),
            users: Arc::new(InMemoryUserPort::new()),
            audit: Arc::new(InMemoryAuditLog::new()),
            notifications: Arc::new(InMemoryNotificationOutbox::new()),
        }
    }
}

impl Default for InMemoryHandles {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory claim registry
#[derive(Debug, Default)]
pub struct InMemoryClaimPort {
    claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
}

impl InMemoryClaimPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the registry
    pub async fn seed(&self, claims: Vec<Claim>) {
        let mut store = self.claims.write().await;
        for claim in claims {
            store.insert(claim.id, claim);
        }
    }
}

impl DomainPort for InMemoryClaimPort {}

#[async_trait]
impl ClaimPort for InMemoryClaimPort {
    async fn get_claim(
        &self,
        id: ClaimId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError> {
        self.claims
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn find_claims(
        &self,
        query: ClaimQuery,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        let mut results: Vec<_> = claims
            .values()
            .filter(|c| {
                if let Some(status) = query.edit_status {
                    if c.edit_status != status {
                        return false;
                    }
                }
                if let Some(assignee) = query.assigned_to {
                    if c.assigned_to != Some(assignee) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        results.sort_by_key(|c| c.created_at);

        if let Some(offset) = query.offset {
            results = results.into_iter().skip(offset as usize).collect();
        }
        if let Some(limit) = query.limit {
            results.truncate(limit as usize);
        }

        Ok(results)
    }

    async fn insert_claim(
        &self,
        claim: Claim,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;
        if claims.contains_key(&claim.id) {
            return Err(PortError::conflict(format!(
                "claim {} already exists",
                claim.id
            )));
        }
        claims.insert(claim.id, claim);
        Ok(())
    }

    async fn update_claim(
        &self,
        claim: Claim,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;
        if !claims.contains_key(&claim.id) {
            return Err(PortError::not_found("Claim", claim.id));
        }
        claims.insert(claim.id, claim.clone());
        Ok(claim)
    }

    async fn count_assigned_to(
        &self,
        user_id: UserId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<usize, PortError> {
        let claims = self.claims.read().await;
        Ok(claims
            .values()
            .filter(|c| c.assigned_to == Some(user_id))
            .count())
    }
}

/// In-memory user registry
#[derive(Debug, Default)]
pub struct InMemoryUserPort {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the registry
    pub async fn seed(&self, users: Vec<User>) {
        let mut store = self.users.write().await;
        for user in users {
            store.insert(user.id, user);
        }
    }
}

impl DomainPort for InMemoryUserPort {}

#[async_trait]
impl UserPort for InMemoryUserPort {
    async fn get_user(
        &self,
        id: UserId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<User, PortError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("User", id))
    }

    async fn find_users(
        &self,
        query: UserQuery,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<User>, PortError> {
        let users = self.users.read().await;
        let mut results: Vec<_> = users
            .values()
            .filter(|u| {
                if let Some(role) = query.role {
                    if u.role != role {
                        return false;
                    }
                }
                if let Some(status) = query.status {
                    if u.status != status {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(results)
    }

    async fn find_by_email(
        &self,
        email: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Option<User>, PortError> {
        let needle = email.to_lowercase();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.normalized_email() == needle)
            .cloned())
    }

    async fn insert_user(
        &self,
        user: User,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(PortError::conflict(format!(
                "user {} already exists",
                user.id
            )));
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn update_user(
        &self,
        user: User,
        _metadata: Option<OperationMetadata>,
    ) -> Result<User, PortError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(PortError::not_found("User", user.id));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory append-only audit log
///
/// Keeps insertion order and enforces monotonically increasing
/// `recorded_at` values: an entry stamped at or before its predecessor is
/// nudged one microsecond past it.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
    last_recorded_at: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryAuditLog {}

#[async_trait]
impl AuditLogPort for InMemoryAuditLog {
    async fn append(
        &self,
        mut entry: AuditEntry,
        _metadata: Option<OperationMetadata>,
    ) -> Result<AuditEntry, PortError> {
        let mut last = self.last_recorded_at.write().await;
        if let Some(previous) = *last {
            if entry.recorded_at <= previous {
                entry.recorded_at = previous + Duration::microseconds(1);
            }
        }
        *last = Some(entry.recorded_at);

        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn trail(
        &self,
        filter: AuditTrailFilter,
        page: Page,
        _metadata: Option<OperationMetadata>,
    ) -> Result<AuditTrailPage, PortError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<_> = entries.iter().filter(|e| filter.matches(e)).collect();
        matching.reverse();

        let total = matching.len();
        let page_entries = matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok(AuditTrailPage {
            entries: page_entries,
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }
}

/// In-memory notification outbox
#[derive(Debug, Default)]
pub struct InMemoryNotificationOutbox {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationOutbox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryNotificationOutbox {}

#[async_trait]
impl NotificationPort for InMemoryNotificationOutbox {
    async fn push(
        &self,
        notification: Notification,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.notifications.write().await.push(notification);
        Ok(())
    }

    async fn for_recipient(
        &self,
        recipient: UserId,
        include_read: bool,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Notification>, PortError> {
        let now = Utc::now();
        let notifications = self.notifications.read().await;
        let mut results: Vec<_> = notifications
            .iter()
            .filter(|n| n.recipient == recipient && !n.is_expired(now))
            .filter(|n| include_read || !n.read)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }

    async fn mark_read(
        &self,
        id: NotificationId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.mark_read();
                Ok(())
            }
            None => Err(PortError::not_found("Notification", id)),
        }
    }
}
