//! Assignment and reassignment state machine
//!
//! Which reassignments are legal depends on the claim's current status:
//!
//! - `Unassigned`/`Pending`: standard reassignment, subject to target checks
//! - `InProgress`/`Edited`: force only; standard fails with
//!   `CLAIM_ALREADY_STARTED`
//! - `Adjudicated`/`ReAdjudicated`/`Completed`: closed to reassignment,
//!   fails with `CLAIM_COMPLETED`; re-adjudication is the only way back in
//!
//! The functions here are pure over `(claim, mode, target)` so the rules are
//! unit-testable without repositories.

use serde::{Deserialize, Serialize};

use core_kernel::UserId;
use domain_users::User;

use crate::claim::Claim;
use crate::error::ClaimError;

/// How a reassignment is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReassignMode {
    /// Normal reassignment of a claim that has no work started
    Standard,
    /// Takes over a claim mid-work, discarding the holder's unsaved edits
    Force,
}

impl ReassignMode {
    /// Selects the mode a bulk operation would use for the claim's current
    /// status: force once work has started, standard otherwise
    pub fn auto_for(claim: &Claim) -> Self {
        if claim.edit_status.work_started() {
            ReassignMode::Force
        } else {
            ReassignMode::Standard
        }
    }
}

/// Assignment fields of a claim before a mutation, kept for audit details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousAssignment {
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
}

impl PreviousAssignment {
    pub fn of(claim: &Claim) -> Self {
        Self {
            user_id: claim.assigned_to,
            user_name: claim.assigned_to_name.clone(),
        }
    }
}

/// Checks that a user may receive claim assignments at all
///
/// Managers coordinate the desk but do not hold claims.
pub fn ensure_assignable_editor(target: &User) -> Result<(), ClaimError> {
    if !target.is_editor() {
        return Err(ClaimError::EditorRoleRequired {
            user_id: target.id,
        });
    }
    if !target.is_active() {
        return Err(ClaimError::EditorInactive {
            user_id: target.id,
        });
    }
    Ok(())
}

/// Validates a reassignment without mutating anything
pub fn authorize_reassignment(
    claim: &Claim,
    mode: ReassignMode,
    target: &User,
) -> Result<(), ClaimError> {
    if claim.edit_status.reassignment_closed() {
        return Err(ClaimError::ClaimCompleted {
            claim_id: claim.id,
            status: claim.edit_status,
        });
    }
    if claim.edit_status.work_started() && mode == ReassignMode::Standard {
        return Err(ClaimError::ClaimAlreadyStarted { claim_id: claim.id });
    }

    ensure_assignable_editor(target)?;

    if claim.is_assigned_to(&target.id) {
        return Err(ClaimError::SameEditor);
    }

    Ok(())
}

/// Applies an authorized reassignment, returning the displaced assignment
/// for auditing
pub fn apply_reassignment(claim: &mut Claim, target: &User) -> PreviousAssignment {
    let previous = PreviousAssignment::of(claim);
    claim.assign_to(target.id, target.name.clone());
    previous
}
