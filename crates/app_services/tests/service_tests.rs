//! End-to-end tests for the desk service over the in-memory adapters

use rust_decimal_macros::dec;

use app_services::{
    ClaimQuery, EditDeskService, InMemoryHandles, NewUserRequest, RedistributionOutcome,
    ServiceError,
};
use core_kernel::{ClaimId, Currency, Money, UserId};
use domain_audit::{Actor, AuditEventType, AuditTrailFilter, Page};
use domain_claims::{
    AdjudicationPatch, Claim, ClaimAction, EditStatus, ReassignMode, MAX_LCT_SUBMISSIONS,
};
use domain_users::{Role, User, UserStatus};

fn claim_with_status(status: EditStatus) -> Claim {
    let mut claim = Claim::intake(
        "V-1001",
        "Amina Hassan",
        "City General",
        Money::new(dec!(1500), Currency::USD),
    );
    claim.edit_status = status;
    claim
}

fn editor(name: &str) -> User {
    User::new(
        name,
        format!("{}@desk.example", name.to_lowercase().replace(' ', ".")),
        Role::Editor,
    )
}

fn manager_actor() -> Actor {
    Actor::user(UserId::new_v7(), "Desk Manager")
}

fn desk() -> (EditDeskService, InMemoryHandles) {
    EditDeskService::in_memory()
}

fn code(err: &ServiceError) -> &'static str {
    err.code()
}

// ============================================================================
// Reassignment
// ============================================================================

#[tokio::test]
async fn test_reassign_pending_claim() {
    let (service, handles) = desk();
    let from = editor("Iris Vale");
    let to = editor("Omar Reed");
    handles.users.seed(vec![from.clone(), to.clone()]).await;

    let mut claim = claim_with_status(EditStatus::Unassigned);
    claim.assign_to(from.id, from.name.clone());
    handles.claims.seed(vec![claim.clone()]).await;

    let result = service
        .reassign(claim.id, to.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap();

    assert_eq!(result.claim.assigned_to, Some(to.id));
    assert_eq!(result.previous_assignee, Some(from.id));
    assert_eq!(result.claim.edit_status, EditStatus::Pending);
    assert!(result.claim.assigned_at.is_some());

    // One audit entry for the move
    let trail = service
        .audit_trail(
            AuditTrailFilter {
                claim_id: Some(claim.id),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert_eq!(trail.total, 1);
    assert_eq!(trail.entries[0].event_type, AuditEventType::ClaimReassigned);

    // Both sides are notified
    let to_inbox = service.notifications_for(to.id, false).await.unwrap();
    assert_eq!(to_inbox.len(), 1);
    assert!(to_inbox[0].body.contains("assigned to you"));

    let from_inbox = service.notifications_for(from.id, false).await.unwrap();
    assert_eq!(from_inbox.len(), 1);
    assert!(from_inbox[0].body.contains(&to.name));
}

#[tokio::test]
async fn test_standard_reassign_rejected_once_work_started() {
    let (service, handles) = desk();
    let to = editor("Omar Reed");
    handles.users.seed(vec![to.clone()]).await;

    let claim = claim_with_status(EditStatus::InProgress);
    handles.claims.seed(vec![claim.clone()]).await;

    let err = service
        .reassign(claim.id, to.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "CLAIM_ALREADY_STARTED");

    // Force takes it over
    let result = service
        .reassign(claim.id, to.id, ReassignMode::Force, None, manager_actor())
        .await
        .unwrap();
    assert_eq!(result.claim.assigned_to, Some(to.id));
    assert_eq!(result.claim.edit_status, EditStatus::InProgress);

    let trail = service
        .audit_trail(
            AuditTrailFilter {
                claim_id: Some(claim.id),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert_eq!(
        trail.entries[0].event_type,
        AuditEventType::ClaimForceReassigned
    );
}

#[tokio::test]
async fn test_reassignment_reason_recorded_in_audit() {
    let (service, handles) = desk();
    let to = editor("Omar Reed");
    handles.users.seed(vec![to.clone()]).await;

    let claim = claim_with_status(EditStatus::InProgress);
    handles.claims.seed(vec![claim.clone()]).await;

    service
        .reassign(
            claim.id,
            to.id,
            ReassignMode::Force,
            Some("hospital asked for a senior review".to_string()),
            manager_actor(),
        )
        .await
        .unwrap();

    let trail = service
        .audit_trail(
            AuditTrailFilter {
                claim_id: Some(claim.id),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert_eq!(
        trail.entries[0].event_type,
        AuditEventType::ClaimForceReassigned
    );
    assert_eq!(
        trail.entries[0].details["reason"],
        "hospital asked for a senior review"
    );

    // Omitted reason is recorded as null, not dropped
    let claim2 = claim_with_status(EditStatus::Pending);
    handles.claims.seed(vec![claim2.clone()]).await;
    service
        .reassign(claim2.id, to.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap();

    let trail = service
        .audit_trail(
            AuditTrailFilter {
                claim_id: Some(claim2.id),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert!(trail.entries[0].details["reason"].is_null());
}

#[tokio::test]
async fn test_adjudicated_claim_closed_to_reassignment() {
    let (service, handles) = desk();
    let to = editor("Omar Reed");
    handles.users.seed(vec![to.clone()]).await;

    for status in [
        EditStatus::Adjudicated,
        EditStatus::ReAdjudicated,
        EditStatus::Completed,
    ] {
        let claim = claim_with_status(status);
        handles.claims.seed(vec![claim.clone()]).await;

        let err = service
            .reassign(claim.id, to.id, ReassignMode::Force, None, manager_actor())
            .await
            .unwrap_err();
        assert_eq!(code(&err), "CLAIM_COMPLETED");
    }
}

#[tokio::test]
async fn test_reassign_target_checks() {
    let (service, handles) = desk();

    let mut inactive = editor("Gone Editor");
    inactive.status = UserStatus::Inactive;
    let manager = User::new("Mara Chen", "mara@desk.example", Role::Manager);
    let holder = editor("Iris Vale");
    handles
        .users
        .seed(vec![inactive.clone(), manager.clone(), holder.clone()])
        .await;

    let mut claim = claim_with_status(EditStatus::Unassigned);
    claim.assign_to(holder.id, holder.name.clone());
    handles.claims.seed(vec![claim.clone()]).await;

    let err = service
        .reassign(claim.id, inactive.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "EDITOR_INACTIVE");

    let err = service
        .reassign(claim.id, manager.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "EDITOR_ROLE_REQUIRED");

    let err = service
        .reassign(claim.id, holder.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "SAME_EDITOR");

    let err = service
        .reassign(
            claim.id,
            UserId::new_v7(),
            ReassignMode::Standard,
            None,
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "EDITOR_NOT_FOUND");

    let err = service
        .reassign(
            ClaimId::new_v7(),
            holder.id,
            ReassignMode::Standard,
            None,
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "CLAIM_NOT_FOUND");
}

#[tokio::test]
async fn test_bulk_reassign_mixed_outcomes() {
    let (service, handles) = desk();
    let to = editor("Omar Reed");
    handles.users.seed(vec![to.clone()]).await;

    let pending = claim_with_status(EditStatus::Pending);
    let in_progress = claim_with_status(EditStatus::InProgress);
    let completed = claim_with_status(EditStatus::Completed);
    handles
        .claims
        .seed(vec![pending.clone(), in_progress.clone(), completed.clone()])
        .await;

    let report = service
        .bulk_reassign(
            vec![pending.id, in_progress.id, completed.id, ClaimId::new_v7()],
            to.id,
            manager_actor(),
        )
        .await
        .unwrap();

    assert_eq!(report.success_count, 2);
    assert_eq!(report.failure_count, 2);

    // Bulk picks force automatically for the in-progress claim
    let moved = service.get_claim(in_progress.id).await.unwrap();
    assert_eq!(moved.assigned_to, Some(to.id));

    let untouched = service.get_claim(completed.id).await.unwrap();
    assert!(untouched.assigned_to.is_none());
}

#[tokio::test]
async fn test_bulk_reassign_invalid_target_fails_whole_batch() {
    let (service, handles) = desk();
    let manager = User::new("Mara Chen", "mara@desk.example", Role::Manager);
    handles.users.seed(vec![manager.clone()]).await;

    let claim = claim_with_status(EditStatus::Pending);
    handles.claims.seed(vec![claim.clone()]).await;

    let err = service
        .bulk_reassign(vec![claim.id], manager.id, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "EDITOR_ROLE_REQUIRED");

    let untouched = service.get_claim(claim.id).await.unwrap();
    assert!(untouched.assigned_to.is_none());
}

// ============================================================================
// Re-adjudication
// ============================================================================

fn adjudicated_claim(lct: u8) -> Claim {
    let mut claim = claim_with_status(EditStatus::Adjudicated);
    claim.approved_amount = Some(Money::new(dec!(1200), Currency::USD));
    claim.lct_submission_count = lct;
    claim
}

#[tokio::test]
async fn test_readjudication_cycle() {
    let (service, handles) = desk();
    let target = editor("Priya Nair");
    handles.users.seed(vec![target.clone()]).await;

    let claim = adjudicated_claim(0);
    handles.claims.seed(vec![claim.clone()]).await;

    let patch = AdjudicationPatch {
        approved_amount: Some(Money::new(dec!(1350), Currency::USD)),
        notes: Some("hospital appealed the deduction".into()),
    };
    let result = service
        .re_adjudicate(claim.id, target.id, patch, manager_actor())
        .await
        .unwrap();

    assert_eq!(result.lct_submission_count, 1);
    assert!(!result.max_reached);
    assert_eq!(result.claim.edit_status, EditStatus::Pending);
    assert_eq!(result.claim.assigned_to, Some(target.id));
    assert_eq!(
        result.claim.approved_amount,
        Some(Money::new(dec!(1350), Currency::USD))
    );

    let inbox = service.notifications_for(target.id, false).await.unwrap();
    assert!(inbox[0].body.contains("submission 1 of 3"));
}

#[tokio::test]
async fn test_lct_cap_enforced() {
    let (service, handles) = desk();
    let target = editor("Priya Nair");
    handles.users.seed(vec![target.clone()]).await;

    let claim = adjudicated_claim(0);
    let claim_id = claim.id;
    handles.claims.seed(vec![claim]).await;

    for round in 1..=MAX_LCT_SUBMISSIONS {
        let result = service
            .re_adjudicate(
                claim_id,
                target.id,
                AdjudicationPatch::default(),
                manager_actor(),
            )
            .await
            .unwrap();
        assert_eq!(result.lct_submission_count, round);
        assert_eq!(result.max_reached, round == MAX_LCT_SUBMISSIONS);

        // Back to adjudicated, as the edit flow would do after the cycle
        let mut c = service.get_claim(claim_id).await.unwrap();
        c.edit_status = EditStatus::ReAdjudicated;
        handles.claims.seed(vec![c]).await;
    }

    let err = service
        .re_adjudicate(
            claim_id,
            target.id,
            AdjudicationPatch::default(),
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "MAX_LCT_REACHED");

    let frozen = service.get_claim(claim_id).await.unwrap();
    assert_eq!(frozen.lct_submission_count, MAX_LCT_SUBMISSIONS);

    let inbox = service.notifications_for(target.id, false).await.unwrap();
    assert!(inbox[0].body.contains("final re-review"));
}

#[tokio::test]
async fn test_readjudication_requires_adjudicated_status() {
    let (service, handles) = desk();
    let target = editor("Priya Nair");
    handles.users.seed(vec![target.clone()]).await;

    let claim = claim_with_status(EditStatus::Pending);
    handles.claims.seed(vec![claim.clone()]).await;

    let err = service
        .re_adjudicate(
            claim.id,
            target.id,
            AdjudicationPatch::default(),
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "CLAIM_NOT_ADJUDICATED");
}

// ============================================================================
// User lifecycle & redistribution
// ============================================================================

#[tokio::test]
async fn test_deactivation_redistributes_round_robin() {
    let (service, handles) = desk();
    let leaving = editor("Leaving Editor");
    let alice = editor("Alice Ward");
    let bob = editor("Bob Tran");
    handles
        .users
        .seed(vec![leaving.clone(), alice.clone(), bob.clone()])
        .await;

    let mut claims = Vec::new();
    for i in 0..5 {
        let mut c = Claim::intake(
            format!("V-{}", 2000 + i),
            "Patient",
            "Hospital",
            Money::new(dec!(100), Currency::USD),
        );
        c.assign_to(leaving.id, leaving.name.clone());
        claims.push(c);
    }
    handles.claims.seed(claims).await;

    let result = service
        .deactivate_user(leaving.id, manager_actor())
        .await
        .unwrap();

    assert!(!result.user.is_active());
    assert_eq!(
        result.redistribution.outcome,
        RedistributionOutcome::Completed {
            claims_redistributed: 5
        }
    );

    // Equal starting loads, names break the tie: Alice 3, Bob 2
    let alice_count = service
        .list_claims(ClaimQuery::by_assignee(alice.id))
        .await
        .unwrap()
        .len();
    let bob_count = service
        .list_claims(ClaimQuery::by_assignee(bob.id))
        .await
        .unwrap()
        .len();
    assert_eq!(alice_count, 3);
    assert_eq!(bob_count, 2);

    let leaving_count = service
        .list_claims(ClaimQuery::by_assignee(leaving.id))
        .await
        .unwrap()
        .len();
    assert_eq!(leaving_count, 0);

    // Each move audited as a system action
    let trail = service
        .audit_trail(
            AuditTrailFilter {
                event_type: Some(AuditEventType::ClaimAutoReassigned),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert_eq!(trail.total, 5);
    assert!(trail.entries.iter().all(|e| e.actor == Actor::System));
}

#[tokio::test]
async fn test_deactivation_without_editors_leaves_claims() {
    let (service, handles) = desk();
    let leaving = editor("Last Editor");
    handles.users.seed(vec![leaving.clone()]).await;

    let mut claim = claim_with_status(EditStatus::Unassigned);
    claim.assign_to(leaving.id, leaving.name.clone());
    handles.claims.seed(vec![claim.clone()]).await;

    let result = service
        .deactivate_user(leaving.id, manager_actor())
        .await
        .unwrap();

    assert!(!result.user.is_active());
    assert_eq!(
        result.redistribution.outcome,
        RedistributionOutcome::NoActiveEditors { claims_pending: 1 }
    );

    // The claim stays with the deactivated user until an editor exists
    let held = service.get_claim(claim.id).await.unwrap();
    assert_eq!(held.assigned_to, Some(leaving.id));
}

#[tokio::test]
async fn test_deactivation_moves_adjudicated_claims_too() {
    let (service, handles) = desk();
    let leaving = editor("Leaving Editor");
    let other = editor("Alice Ward");
    handles.users.seed(vec![leaving.clone(), other.clone()]).await;

    let mut adjudicated = adjudicated_claim(1);
    adjudicated.assigned_to = Some(leaving.id);
    adjudicated.assigned_to_name = Some(leaving.name.clone());
    handles.claims.seed(vec![adjudicated.clone()]).await;

    let result = service
        .deactivate_user(leaving.id, manager_actor())
        .await
        .unwrap();

    assert_eq!(
        result.redistribution.outcome,
        RedistributionOutcome::Completed {
            claims_redistributed: 1
        }
    );

    // While editors are available, nothing stays behind with an inactive
    // account, whatever the claim's status
    let left_behind = service
        .list_claims(ClaimQuery::by_assignee(leaving.id))
        .await
        .unwrap();
    assert!(left_behind.is_empty());

    let moved = service.get_claim(adjudicated.id).await.unwrap();
    assert_eq!(moved.assigned_to, Some(other.id));
    // The move changes the holder, not the workflow position
    assert_eq!(moved.edit_status, EditStatus::Adjudicated);
    assert_eq!(moved.lct_submission_count, 1);
}

#[tokio::test]
async fn test_double_deactivation_rejected() {
    let (service, handles) = desk();
    let user = editor("Dana Wells");
    handles.users.seed(vec![user.clone()]).await;

    service
        .deactivate_user(user.id, manager_actor())
        .await
        .unwrap();
    let err = service
        .deactivate_user(user.id, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "ALREADY_INACTIVE");
}

#[tokio::test]
async fn test_activation_queues_credential_notice() {
    let (service, handles) = desk();
    let mut user = editor("Dana Wells");
    user.status = UserStatus::Inactive;
    handles.users.seed(vec![user.clone()]).await;

    let activated = service
        .activate_user(user.id, manager_actor())
        .await
        .unwrap();
    assert!(activated.is_active());

    let inbox = service.notifications_for(user.id, false).await.unwrap();
    assert!(inbox[0].body.contains("Reset your credentials"));

    let err = service
        .activate_user(user.id, manager_actor())
        .await
        .unwrap_err();
    assert_eq!(code(&err), "ALREADY_ACTIVE");
}

#[tokio::test]
async fn test_create_user_and_duplicate_email() {
    let (service, _handles) = desk();

    let created = service
        .create_user(
            NewUserRequest {
                name: "Dana Wells".into(),
                email: "Dana.Wells@desk.example".into(),
                role: Role::Editor,
            },
            manager_actor(),
        )
        .await
        .unwrap();
    assert!(created.user.is_active());
    assert_eq!(created.temporary_credential.secret.len(), 32);

    // Uniqueness is case-insensitive
    let err = service
        .create_user(
            NewUserRequest {
                name: "Other Person".into(),
                email: "dana.wells@DESK.example".into(),
                role: Role::Editor,
            },
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "EMAIL_EXISTS");
}

#[tokio::test]
async fn test_create_user_validation() {
    let (service, _handles) = desk();

    let err = service
        .create_user(
            NewUserRequest {
                name: "X".into(),
                email: "x@desk.example".into(),
                role: Role::Editor,
            },
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "INVALID_NAME");

    let err = service
        .create_user(
            NewUserRequest {
                name: "Valid Name".into(),
                email: "not-an-email".into(),
                role: Role::Editor,
            },
            manager_actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(code(&err), "INVALID_EMAIL");
}

#[tokio::test]
async fn test_password_reset_token_and_audit() {
    let (service, handles) = desk();
    let user = editor("Dana Wells");
    handles.users.seed(vec![user.clone()]).await;

    let reset = service
        .reset_password(user.id, manager_actor())
        .await
        .unwrap();
    assert_eq!(reset.user_id, user.id);
    assert!(reset.token.expires_at > reset.token.issued_at);

    let trail = service
        .audit_trail(
            AuditTrailFilter {
                event_type: Some(AuditEventType::PasswordResetInitiated),
                ..Default::default()
            },
            Page::default(),
        )
        .await
        .unwrap();
    assert_eq!(trail.total, 1);
    assert_eq!(trail.entries[0].user_id, Some(user.id));
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_editor_capacity_snapshot() {
    let (service, handles) = desk();
    let busy = editor("Busy Editor");
    let idle = editor("Idle Editor");
    handles.users.seed(vec![busy.clone(), idle.clone()]).await;

    let mut pending = claim_with_status(EditStatus::Unassigned);
    pending.assign_to(busy.id, busy.name.clone());
    let mut working = claim_with_status(EditStatus::Unassigned);
    working.assign_to(busy.id, busy.name.clone());
    working.edit_status = EditStatus::InProgress;
    handles.claims.seed(vec![pending, working]).await;

    let capacity = service.editor_capacity().await.unwrap();
    assert_eq!(capacity.len(), 2);

    let busy_cap = capacity.iter().find(|c| c.user_id == busy.id).unwrap();
    assert_eq!(busy_cap.assigned, 2);
    assert_eq!(busy_cap.in_progress, 1);

    let idle_cap = capacity.iter().find(|c| c.user_id == idle.id).unwrap();
    assert_eq!(idle_cap.assigned, 0);
}

#[tokio::test]
async fn test_claim_actions_follow_status() {
    let (service, handles) = desk();

    let unassigned = claim_with_status(EditStatus::Unassigned);
    let capped = {
        let mut c = adjudicated_claim(MAX_LCT_SUBMISSIONS);
        c.edit_status = EditStatus::ReAdjudicated;
        c
    };
    handles.claims.seed(vec![unassigned.clone(), capped.clone()]).await;

    let actions = service.claim_actions(unassigned.id).await.unwrap();
    assert!(actions.contains(&ClaimAction::AssignEditor));
    assert!(actions.contains(&ClaimAction::ViewHistory));

    // Capped claims lose the re-adjudicate action
    let actions = service.claim_actions(capped.id).await.unwrap();
    assert!(!actions.contains(&ClaimAction::ReAdjudicate));
    assert!(actions.contains(&ClaimAction::ViewHistory));
}

#[tokio::test]
async fn test_audit_trail_ordering_across_operations() {
    let (service, handles) = desk();
    let a = editor("Alice Ward");
    let b = editor("Bob Tran");
    handles.users.seed(vec![a.clone(), b.clone()]).await;

    let mut claim = claim_with_status(EditStatus::Unassigned);
    claim.assign_to(a.id, a.name.clone());
    handles.claims.seed(vec![claim.clone()]).await;

    service
        .reassign(claim.id, b.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap();
    service
        .reassign(claim.id, a.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap();
    service.reset_password(a.id, manager_actor()).await.unwrap();

    let trail = service
        .audit_trail(AuditTrailFilter::default(), Page::default())
        .await
        .unwrap();
    assert_eq!(trail.total, 3);
    for window in trail.entries.windows(2) {
        assert!(window[0].recorded_at > window[1].recorded_at);
    }
}

#[tokio::test]
async fn test_notification_mark_read() {
    let (service, handles) = desk();
    let a = editor("Alice Ward");
    let b = editor("Bob Tran");
    handles.users.seed(vec![a.clone(), b.clone()]).await;

    let mut claim = claim_with_status(EditStatus::Unassigned);
    claim.assign_to(a.id, a.name.clone());
    handles.claims.seed(vec![claim.clone()]).await;

    service
        .reassign(claim.id, b.id, ReassignMode::Standard, None, manager_actor())
        .await
        .unwrap();

    let inbox = service.notifications_for(b.id, false).await.unwrap();
    assert_eq!(inbox.len(), 1);

    service.mark_notification_read(inbox[0].id).await.unwrap();
    assert!(service.notifications_for(b.id, false).await.unwrap().is_empty());
    assert_eq!(service.notifications_for(b.id, true).await.unwrap().len(), 1);
}
