//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Money, UserId};

/// Maximum number of times a completed claim may be re-opened for
/// re-adjudication (the LCT submission cap).
pub const MAX_LCT_SUBMISSIONS: u8 = 3;

/// Workflow state of a claim edit
///
/// A closed enumeration: the source system compared free-form status
/// strings case-insensitively, which is exactly the bug class this type
/// removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditStatus {
    /// No editor holds the claim yet
    Unassigned,
    /// Assigned, no work started
    Pending,
    /// An editor has begun work
    InProgress,
    /// Adjudication decision recorded
    Adjudicated,
    /// Adjudicated again after a re-adjudication cycle
    ReAdjudicated,
    /// Fully settled, no further edits
    Completed,
    /// Edits saved but not yet submitted for adjudication
    Edited,
}

impl EditStatus {
    /// True when an editor has started work that a standard reassignment
    /// would discard
    pub fn work_started(&self) -> bool {
        matches!(self, EditStatus::InProgress | EditStatus::Edited)
    }

    /// True when the claim has left the edit flow and can only re-enter it
    /// through re-adjudication
    pub fn reassignment_closed(&self) -> bool {
        matches!(
            self,
            EditStatus::Adjudicated | EditStatus::ReAdjudicated | EditStatus::Completed
        )
    }

    /// True when the re-adjudication operation may target this claim
    pub fn re_adjudicable(&self) -> bool {
        matches!(self, EditStatus::Adjudicated | EditStatus::ReAdjudicated)
    }
}

/// A claim record in the edit registry
///
/// Claims are created by intake, mutated by assignment, reassignment, and
/// re-adjudication, and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Hospital visit number
    pub visit_number: String,
    /// Patient name
    pub patient_name: String,
    /// Hospital name
    pub hospital_name: String,
    /// Workflow state
    pub edit_status: EditStatus,
    /// Current assignee (weak reference into the user registry)
    pub assigned_to: Option<UserId>,
    /// Display name of the current assignee
    pub assigned_to_name: Option<String>,
    /// Re-adjudication submission counter, never exceeds [`MAX_LCT_SUBMISSIONS`]
    pub lct_submission_count: u8,
    /// Amount requested by the hospital
    pub requested_amount: Money,
    /// Amount approved by adjudication, if any
    pub approved_amount: Option<Money>,
    /// When the current assignee received the claim; reset on every
    /// successful assignment
    pub assigned_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new unassigned claim as intake would deliver it
    pub fn intake(
        visit_number: impl Into<String>,
        patient_name: impl Into<String>,
        hospital_name: impl Into<String>,
        requested_amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ClaimId::new_v7(),
            visit_number: visit_number.into(),
            patient_name: patient_name.into(),
            hospital_name: hospital_name.into(),
            edit_status: EditStatus::Unassigned,
            assigned_to: None,
            assigned_to_name: None,
            lct_submission_count: 0,
            requested_amount,
            approved_amount: None,
            assigned_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the claim to the given assignee and resets the elapsed-time
    /// counter
    ///
    /// An unassigned claim becomes `Pending`; every other status is
    /// preserved, since reassignment changes who holds the claim, not where
    /// it is in the workflow.
    pub fn assign_to(&mut self, user_id: UserId, user_name: impl Into<String>) {
        let now = Utc::now();
        self.assigned_to = Some(user_id);
        self.assigned_to_name = Some(user_name.into());
        self.assigned_at = Some(now);
        if self.edit_status == EditStatus::Unassigned {
            self.edit_status = EditStatus::Pending;
        }
        self.updated_at = now;
    }

    /// True when the claim is currently held by the given user
    pub fn is_assigned_to(&self, user_id: &UserId) -> bool {
        self.assigned_to.as_ref() == Some(user_id)
    }

    /// True when another re-adjudication submission is still permitted
    pub fn lct_remaining(&self) -> bool {
        self.lct_submission_count < MAX_LCT_SUBMISSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn intake_claim() -> Claim {
        Claim::intake(
            "V-1001",
            "Amina Hassan",
            "City General",
            Money::new(dec!(1200), Currency::USD),
        )
    }

    #[test]
    fn test_intake_starts_unassigned() {
        let claim = intake_claim();
        assert_eq!(claim.edit_status, EditStatus::Unassigned);
        assert!(claim.assigned_to.is_none());
        assert_eq!(claim.lct_submission_count, 0);
        assert!(claim.assigned_at.is_none());
    }

    #[test]
    fn test_assign_moves_unassigned_to_pending() {
        let mut claim = intake_claim();
        let editor = UserId::new_v7();

        claim.assign_to(editor, "Lena Ortiz");

        assert_eq!(claim.edit_status, EditStatus::Pending);
        assert!(claim.is_assigned_to(&editor));
        assert_eq!(claim.assigned_to_name.as_deref(), Some("Lena Ortiz"));
        assert!(claim.assigned_at.is_some());
    }

    #[test]
    fn test_assign_preserves_in_progress_status() {
        let mut claim = intake_claim();
        claim.assign_to(UserId::new_v7(), "First Editor");
        claim.edit_status = EditStatus::InProgress;

        claim.assign_to(UserId::new_v7(), "Second Editor");

        assert_eq!(claim.edit_status, EditStatus::InProgress);
    }

    #[test]
    fn test_status_predicates() {
        assert!(EditStatus::InProgress.work_started());
        assert!(EditStatus::Edited.work_started());
        assert!(!EditStatus::Pending.work_started());

        assert!(EditStatus::Adjudicated.reassignment_closed());
        assert!(EditStatus::Completed.reassignment_closed());
        assert!(!EditStatus::Unassigned.reassignment_closed());

        assert!(EditStatus::ReAdjudicated.re_adjudicable());
        assert!(!EditStatus::Completed.re_adjudicable());
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&EditStatus::ReAdjudicated).unwrap();
        assert_eq!(json, "\"RE_ADJUDICATED\"");
    }
}
