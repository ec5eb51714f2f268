//! Application Services
//!
//! Orchestration for the claims edit desk. The domain crates hold the pure
//! rules; this crate wires them to the registries through port traits,
//! appends audit entries, and queues notifications, so every state change
//! goes through one place.
//!
//! The reference adapters in [`memory`] keep everything in process memory;
//! a production deployment implements the same ports against a durable
//! store.

pub mod error;
pub mod memory;
pub mod ports;
pub mod service;

pub use error::ServiceError;
pub use memory::{
    InMemoryAuditLog, InMemoryClaimPort, InMemoryHandles, InMemoryNotificationOutbox,
    InMemoryUserPort,
};
pub use ports::{AuditLogPort, ClaimPort, ClaimQuery, NotificationPort, UserPort, UserQuery};
pub use service::{
    BulkItem, BulkItemStatus, BulkReassignmentReport, CreatedUser, DeactivationResult,
    EditDeskService, EditorCapacity, NewUserRequest, PasswordReset, ReAdjudicationResult,
    ReassignmentResult, RedistributionOutcome, RedistributionReport,
};
