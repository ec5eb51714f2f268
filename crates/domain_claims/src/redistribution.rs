//! Round-robin redistribution planner
//!
//! When a user is deactivated, their claim queue is spread across the
//! remaining active editors. Planning is pure: given the claims to move and
//! the candidate editors with their current load, produce the assignment
//! list. Execution against the registries happens in the service layer.

use core_kernel::{ClaimId, UserId};

use crate::error::ClaimError;

/// An active editor candidate with their current derived load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLoad {
    pub user_id: UserId,
    pub name: String,
    pub assigned_count: usize,
}

/// One planned claim move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAssignment {
    pub claim_id: ClaimId,
    pub to_user_id: UserId,
    pub to_user_name: String,
}

/// Plans a round-robin redistribution of `claims` across `editors`
///
/// Editors are ordered ascending by current load (name as tiebreak so the
/// plan is deterministic), then claim *i* goes to editor `i mod n`. Fails
/// with `NO_ACTIVE_EDITORS` when no candidates remain and there are claims
/// to move.
pub fn plan_round_robin(
    claims: &[ClaimId],
    editors: &[EditorLoad],
) -> Result<Vec<PlannedAssignment>, ClaimError> {
    if claims.is_empty() {
        return Ok(Vec::new());
    }
    if editors.is_empty() {
        return Err(ClaimError::NoActiveEditors);
    }

    let mut ordered: Vec<&EditorLoad> = editors.iter().collect();
    ordered.sort_by(|a, b| {
        a.assigned_count
            .cmp(&b.assigned_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(claims
        .iter()
        .enumerate()
        .map(|(i, claim_id)| {
            let editor = ordered[i % ordered.len()];
            PlannedAssignment {
                claim_id: *claim_id,
                to_user_id: editor.user_id,
                to_user_name: editor.name.clone(),
            }
        })
        .collect())
}
