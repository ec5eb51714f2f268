//! Claims domain errors
//!
//! Every variant carries a stable SCREAMING_SNAKE code surfaced through the
//! API envelope; callers branch on codes, not messages.

use thiserror::Error;

use core_kernel::{ClaimId, UserId};

use crate::claim::EditStatus;

/// Errors that can occur in the claims edit domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Claim {claim_id} is already being worked on; use force reassignment")]
    ClaimAlreadyStarted { claim_id: ClaimId },

    #[error("Claim {claim_id} is {status:?} and can only change through re-adjudication")]
    ClaimCompleted {
        claim_id: ClaimId,
        status: EditStatus,
    },

    #[error("Claim {claim_id} is {status:?}; only adjudicated claims can be re-adjudicated")]
    ClaimNotAdjudicated {
        claim_id: ClaimId,
        status: EditStatus,
    },

    #[error("Claim {claim_id} has reached the maximum of {max} re-adjudication submissions")]
    MaxLctReached { claim_id: ClaimId, max: u8 },

    #[error("Claim is already assigned to this editor")]
    SameEditor,

    #[error("Editor not found: {0}")]
    EditorNotFound(String),

    #[error("Editor {user_id} is inactive")]
    EditorInactive { user_id: UserId },

    #[error("User {user_id} does not have the editor role")]
    EditorRoleRequired { user_id: UserId },

    #[error("No active editors available for redistribution")]
    NoActiveEditors,
}

impl ClaimError {
    /// Stable error code for the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            ClaimError::ClaimNotFound(_) => "CLAIM_NOT_FOUND",
            ClaimError::ClaimAlreadyStarted { .. } => "CLAIM_ALREADY_STARTED",
            ClaimError::ClaimCompleted { .. } => "CLAIM_COMPLETED",
            ClaimError::ClaimNotAdjudicated { .. } => "CLAIM_NOT_ADJUDICATED",
            ClaimError::MaxLctReached { .. } => "MAX_LCT_REACHED",
            ClaimError::SameEditor => "SAME_EDITOR",
            ClaimError::EditorNotFound(_) => "EDITOR_NOT_FOUND",
            ClaimError::EditorInactive { .. } => "EDITOR_INACTIVE",
            ClaimError::EditorRoleRequired { .. } => "EDITOR_ROLE_REQUIRED",
            ClaimError::NoActiveEditors => "NO_ACTIVE_EDITORS",
        }
    }
}
