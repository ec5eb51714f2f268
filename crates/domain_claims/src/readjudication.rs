//! Re-adjudication (LCT) engine
//!
//! An adjudicated claim may be re-opened for editing at most
//! [`MAX_LCT_SUBMISSIONS`] times. Each successful re-adjudication increments
//! the submission counter, returns the claim to `Pending`, and hands it to a
//! target editor.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, UserId};
use domain_users::User;

use crate::assignment::ensure_assignable_editor;
use crate::claim::{Claim, EditStatus, MAX_LCT_SUBMISSIONS};
use crate::error::ClaimError;

/// Fields a re-adjudication may change on the claim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjudicationPatch {
    /// New approved amount; `None` leaves the current value in place
    pub approved_amount: Option<Money>,
    /// Free-form reviewer notes, carried into the audit entry
    pub notes: Option<String>,
}

/// What a successful re-adjudication changed, for auditing and notification
#[derive(Debug, Clone)]
pub struct ReAdjudicationOutcome {
    pub previous_assignee: Option<UserId>,
    pub previous_assignee_name: Option<String>,
    pub previous_approved_amount: Option<Money>,
    pub new_approved_amount: Option<Money>,
    pub lct_submission_count: u8,
    /// True when the counter just hit the cap: this is the final re-review
    pub max_reached: bool,
}

/// Validates a re-adjudication without mutating anything
pub fn authorize_readjudication(claim: &Claim, target: &User) -> Result<(), ClaimError> {
    if !claim.edit_status.re_adjudicable() {
        return Err(ClaimError::ClaimNotAdjudicated {
            claim_id: claim.id,
            status: claim.edit_status,
        });
    }
    if !claim.lct_remaining() {
        return Err(ClaimError::MaxLctReached {
            claim_id: claim.id,
            max: MAX_LCT_SUBMISSIONS,
        });
    }
    ensure_assignable_editor(target)
}

/// Applies an authorized re-adjudication: bumps the counter, re-opens the
/// claim as `Pending`, assigns the target editor, and patches the approved
/// amount when the patch carries one
pub fn apply_readjudication(
    claim: &mut Claim,
    patch: &AdjudicationPatch,
    target: &User,
) -> ReAdjudicationOutcome {
    let previous_assignee = claim.assigned_to;
    let previous_assignee_name = claim.assigned_to_name.clone();
    let previous_approved_amount = claim.approved_amount;

    claim.lct_submission_count += 1;
    claim.edit_status = EditStatus::Pending;
    if let Some(amount) = patch.approved_amount {
        claim.approved_amount = Some(amount);
    }
    claim.assign_to(target.id, target.name.clone());

    ReAdjudicationOutcome {
        previous_assignee,
        previous_assignee_name,
        previous_approved_amount,
        new_approved_amount: claim.approved_amount,
        lct_submission_count: claim.lct_submission_count,
        max_reached: claim.lct_submission_count == MAX_LCT_SUBMISSIONS,
    }
}
