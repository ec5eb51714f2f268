//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the claims
//! edit desk. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, Currency, Money, UserId};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard requested amount for a test claim
    pub fn usd_requested() -> Money {
        Money::new(dec!(1200.00), Currency::USD)
    }

    /// Standard approved amount, slightly below the requested amount
    pub fn usd_approved() -> Money {
        Money::new(dec!(1000.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard intake timestamp (Jan 15, 2024)
    pub fn intake_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    /// Timestamp one hour after intake, for assignment events
    pub fn assignment_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    /// Start of an audit trail query window
    pub fn window_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// End of an audit trail query window
    pub fn window_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic claim ID for testing
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a second deterministic user ID for reassignment targets
    pub fn other_user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard visit number
    pub fn visit_number() -> &'static str {
        "V-1001"
    }

    /// Standard patient name
    pub fn patient_name() -> &'static str {
        "Amina Hassan"
    }

    /// Standard hospital name
    pub fn hospital_name() -> &'static str {
        "City General"
    }

    /// Standard editor email
    pub fn editor_email() -> &'static str {
        "editor@desk.example"
    }

    /// Standard manager email
    pub fn manager_email() -> &'static str {
        "manager@desk.example"
    }
}
