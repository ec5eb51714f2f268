//! Desk registry ports
//!
//! Port traits for the four registries the desk depends on: claims, users,
//! the audit log, and the notification outbox. Adapters implement these
//! traits; the in-memory reference adapters live in [`crate::memory`], and a
//! deployment backed by an external claims system would implement `ClaimPort`
//! against its API instead.
//!
//! All methods are async and return `Result<T, PortError>` so the service
//! layer handles storage failures uniformly across adapters. The optional
//! `OperationMetadata` carries correlation ids for tracing.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, NotificationId, OperationMetadata, PortError, UserId};
use domain_audit::{AuditEntry, AuditTrailFilter, AuditTrailPage, Notification, Page};
use domain_claims::{Claim, EditStatus};
use domain_users::{Role, User, UserStatus};

/// Query parameters for finding claims
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    /// Filter by workflow status
    pub edit_status: Option<EditStatus>,
    /// Filter by current assignee
    pub assigned_to: Option<UserId>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl ClaimQuery {
    /// Creates a query for all claims held by a user
    pub fn by_assignee(user_id: UserId) -> Self {
        Self {
            assigned_to: Some(user_id),
            ..Default::default()
        }
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Query parameters for finding users
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Filter by role
    pub role: Option<Role>,
    /// Filter by account status
    pub status: Option<UserStatus>,
}

impl UserQuery {
    /// Creates a query for all active editors
    pub fn active_editors() -> Self {
        Self {
            role: Some(Role::Editor),
            status: Some(UserStatus::Active),
        }
    }
}

/// Port for the claim registry
#[async_trait]
pub trait ClaimPort: DomainPort {
    /// Retrieves a claim by id, or `PortError::NotFound`
    async fn get_claim(
        &self,
        id: ClaimId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError>;

    /// Finds claims matching the query, ordered by creation time
    async fn find_claims(
        &self,
        query: ClaimQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Claim>, PortError>;

    /// Inserts a new claim; `PortError::Conflict` if the id already exists
    async fn insert_claim(
        &self,
        claim: Claim,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Replaces an existing claim; `PortError::NotFound` if absent
    async fn update_claim(
        &self,
        claim: Claim,
        metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError>;

    /// Counts claims currently held by a user
    async fn count_assigned_to(
        &self,
        user_id: UserId,
        metadata: Option<OperationMetadata>,
    ) -> Result<usize, PortError>;
}

/// Port for the user registry
#[async_trait]
pub trait UserPort: DomainPort {
    /// Retrieves a user by id, or `PortError::NotFound`
    async fn get_user(
        &self,
        id: UserId,
        metadata: Option<OperationMetadata>,
    ) -> Result<User, PortError>;

    /// Finds users matching the query, ordered by name
    async fn find_users(
        &self,
        query: UserQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<User>, PortError>;

    /// Finds a user by email, compared case-insensitively
    async fn find_by_email(
        &self,
        email: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<User>, PortError>;

    /// Inserts a new user; `PortError::Conflict` if the id already exists
    async fn insert_user(
        &self,
        user: User,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Replaces an existing user; `PortError::NotFound` if absent
    async fn update_user(
        &self,
        user: User,
        metadata: Option<OperationMetadata>,
    ) -> Result<User, PortError>;
}

/// Port for the append-only audit log
#[async_trait]
pub trait AuditLogPort: DomainPort {
    /// Appends an entry and returns it as recorded
    ///
    /// Adapters may nudge `recorded_at` forward so the log stays
    /// monotonically ordered even when the clock does not.
    async fn append(
        &self,
        entry: AuditEntry,
        metadata: Option<OperationMetadata>,
    ) -> Result<AuditEntry, PortError>;

    /// Queries the trail, newest entries first
    async fn trail(
        &self,
        filter: AuditTrailFilter,
        page: Page,
        metadata: Option<OperationMetadata>,
    ) -> Result<AuditTrailPage, PortError>;
}

/// Port for the notification outbox
#[async_trait]
pub trait NotificationPort: DomainPort {
    /// Queues a notification for delivery
    async fn push(
        &self,
        notification: Notification,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Lists a user's unexpired notifications, newest first
    async fn for_recipient(
        &self,
        recipient: UserId,
        include_read: bool,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Notification>, PortError>;

    /// Marks a notification as read; `PortError::NotFound` if absent
    async fn mark_read(
        &self,
        id: NotificationId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}
