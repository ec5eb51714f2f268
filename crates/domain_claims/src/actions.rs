//! Allowed-action derivation
//!
//! The source system derived its context menus from status strings scattered
//! across view code. Here it is one pure function over the claim state,
//! unit-testable without any rendering.

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, EditStatus};

/// Operations the desk may offer for a claim in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimAction {
    AssignEditor,
    Reassign,
    ForceReassign,
    ReAdjudicate,
    ViewHistory,
}

/// Maps a claim's state to the set of legal actions
pub fn allowed_actions(claim: &Claim) -> Vec<ClaimAction> {
    let mut actions = match claim.edit_status {
        EditStatus::Unassigned => vec![ClaimAction::AssignEditor],
        EditStatus::Pending => vec![ClaimAction::Reassign],
        EditStatus::InProgress | EditStatus::Edited => vec![ClaimAction::ForceReassign],
        EditStatus::Adjudicated | EditStatus::ReAdjudicated => {
            if claim.lct_remaining() {
                vec![ClaimAction::ReAdjudicate]
            } else {
                Vec::new()
            }
        }
        EditStatus::Completed => Vec::new(),
    };
    actions.push(ClaimAction::ViewHistory);
    actions
}
