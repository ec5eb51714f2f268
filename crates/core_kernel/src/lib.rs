//! Core Kernel - Foundational types and utilities for the claims edit desk
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Ports infrastructure shared by repository adapters
//! - The data-source registry (in-memory vs. external backend)

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;
pub mod registry;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimId, UserId, AuditEventId, NotificationId};
pub use error::CoreError;
pub use ports::{DomainPort, PortError, OperationMetadata};
pub use registry::{DataSource, DataSourceConfig, ExternalConfig};
