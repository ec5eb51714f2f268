//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::collections::HashMap;

use core_kernel::UserId;
use domain_audit::AuditEntry;
use domain_claims::{Claim, EditStatus};

/// Asserts that a claim is currently held by the given user
pub fn assert_claim_held_by(claim: &Claim, user_id: &UserId) {
    assert!(
        claim.is_assigned_to(user_id),
        "Claim {} held by {:?}, expected {}",
        claim.id,
        claim.assigned_to,
        user_id
    );
}

/// Asserts that a claim has no assignee
pub fn assert_claim_unassigned(claim: &Claim) {
    assert!(
        claim.assigned_to.is_none(),
        "Claim {} unexpectedly held by {:?}",
        claim.id,
        claim.assigned_to
    );
}

/// Asserts that a claim is in the given workflow status
pub fn assert_claim_status(claim: &Claim, expected: EditStatus) {
    assert_eq!(
        claim.edit_status, expected,
        "Claim {} is {:?}, expected {:?}",
        claim.id, claim.edit_status, expected
    );
}

/// Asserts that audit entries are in strictly increasing `recorded_at` order
///
/// # Panics
///
/// Panics naming the first out-of-order pair
pub fn assert_audit_chronological(entries: &[AuditEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].recorded_at < pair[1].recorded_at,
            "Audit entries out of order: {:?} at {} followed by {:?} at {}",
            pair[0].event_type,
            pair[0].recorded_at,
            pair[1].event_type,
            pair[1].recorded_at
        );
    }
}

/// Asserts that a set of claims is spread evenly across editors: no editor
/// holds more than one claim above any other
pub fn assert_balanced_distribution(claims: &[Claim]) {
    let mut counts: HashMap<UserId, usize> = HashMap::new();
    for claim in claims {
        if let Some(assignee) = claim.assigned_to {
            *counts.entry(assignee).or_default() += 1;
        }
    }
    if counts.len() < 2 {
        return;
    }
    let max = counts.values().max().copied().unwrap_or(0);
    let min = counts.values().min().copied().unwrap_or(0);
    assert!(
        max - min <= 1,
        "Unbalanced distribution: editor loads range from {} to {}",
        min,
        max
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{ClaimBuilder, UserBuilder};
    use domain_audit::{Actor, AuditEventType};

    #[test]
    fn test_assert_claim_held_by_passes() {
        let editor = UserBuilder::editor("Omar Reed").build();
        let claim = ClaimBuilder::new().assigned_to(&editor).build();
        assert_claim_held_by(&claim, &editor.id);
        assert_claim_status(&claim, EditStatus::Pending);
    }

    #[test]
    #[should_panic(expected = "unexpectedly held")]
    fn test_assert_unassigned_panics_for_held_claim() {
        let editor = UserBuilder::editor("Omar Reed").build();
        let claim = ClaimBuilder::new().assigned_to(&editor).build();
        assert_claim_unassigned(&claim);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_assert_chronological_catches_regression() {
        let first = AuditEntry::new(AuditEventType::ClaimReassigned, Actor::System);
        let mut second = AuditEntry::new(AuditEventType::ClaimReassigned, Actor::System);
        second.recorded_at = first.recorded_at - chrono::Duration::seconds(1);
        assert_audit_chronological(&[first, second]);
    }

    #[test]
    fn test_balanced_distribution() {
        let a = UserBuilder::editor("Editor A").build();
        let b = UserBuilder::editor("Editor B").build();
        let claims = vec![
            ClaimBuilder::new().assigned_to(&a).build(),
            ClaimBuilder::new().assigned_to(&b).build(),
            ClaimBuilder::new().assigned_to(&a).build(),
        ];
        assert_balanced_distribution(&claims);
    }
}
