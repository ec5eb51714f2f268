//! Claims Edit Domain
//!
//! The workflow rules for claim edits: who may hold a claim, when
//! reassignment requires forcing, how re-adjudication re-opens an
//! adjudicated claim, and how a deactivated user's queue redistributes.
//!
//! All rules are pure functions over the aggregates; persistence and
//! orchestration live in `app_services`.

pub mod claim;
pub mod assignment;
pub mod readjudication;
pub mod redistribution;
pub mod actions;
pub mod error;

pub use claim::{Claim, EditStatus, MAX_LCT_SUBMISSIONS};
pub use assignment::{
    apply_reassignment, authorize_reassignment, ensure_assignable_editor, PreviousAssignment,
    ReassignMode,
};
pub use readjudication::{
    apply_readjudication, authorize_readjudication, AdjudicationPatch, ReAdjudicationOutcome,
};
pub use redistribution::{plan_round_robin, EditorLoad, PlannedAssignment};
pub use actions::{allowed_actions, ClaimAction};
pub use error::ClaimError;
