//! Audit & Notification Domain
//!
//! Every state-changing operation on the desk appends one immutable audit
//! entry and queues notifications for the affected users. Entries are never
//! mutated or deleted; notifications are ephemeral and may expire.

pub mod audit;
pub mod notification;
pub mod trail;

pub use audit::{Actor, AuditEntry, AuditEventType};
pub use notification::Notification;
pub use trail::{AuditTrailFilter, AuditTrailPage, Page};
