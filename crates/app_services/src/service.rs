//! Desk orchestration service
//!
//! `EditDeskService` is the single entry point for state-changing desk
//! operations. Every mutation follows the same shape: load aggregates,
//! authorize through the pure domain rules, apply, persist, append an audit
//! entry, queue notifications. Read operations pass through to the ports.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use core_kernel::{ClaimId, NotificationId, UserId};
use domain_audit::{
    Actor, AuditEntry, AuditEventType, AuditTrailFilter, AuditTrailPage, Notification, Page,
};
use domain_claims::{
    allowed_actions, apply_readjudication, apply_reassignment, authorize_readjudication,
    authorize_reassignment, ensure_assignable_editor, plan_round_robin, AdjudicationPatch, Claim,
    ClaimAction, ClaimError, EditorLoad, PlannedAssignment, ReassignMode, MAX_LCT_SUBMISSIONS,
};
use domain_users::{
    validate_new_user, PasswordResetToken, Role, TemporaryCredential, User, UserError,
};

use crate::error::ServiceError;
use crate::memory::InMemoryHandles;
use crate::ports::{AuditLogPort, ClaimPort, ClaimQuery, NotificationPort, UserPort, UserQuery};

/// What a successful reassignment changed
#[derive(Debug, Clone)]
pub struct ReassignmentResult {
    pub claim: Claim,
    pub mode: ReassignMode,
    pub previous_assignee: Option<UserId>,
    pub previous_assignee_name: Option<String>,
}

/// Per-claim outcome of a bulk reassignment
#[derive(Debug, Clone)]
pub enum BulkItemStatus {
    Reassigned { mode: ReassignMode },
    Failed { code: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct BulkItem {
    pub claim_id: ClaimId,
    pub status: BulkItemStatus,
}

/// Tally of a bulk reassignment; individual failures do not abort the batch
#[derive(Debug, Clone)]
pub struct BulkReassignmentReport {
    pub success_count: usize,
    pub failure_count: usize,
    pub items: Vec<BulkItem>,
}

/// What a successful re-adjudication produced
#[derive(Debug, Clone)]
pub struct ReAdjudicationResult {
    pub claim: Claim,
    pub lct_submission_count: u8,
    /// True when this was the final permitted submission
    pub max_reached: bool,
}

/// Input for creating a desk account
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A created account together with its one-time credential
#[derive(Debug)]
pub struct CreatedUser {
    pub user: User,
    pub temporary_credential: TemporaryCredential,
}

/// How the deactivated user's queue was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedistributionOutcome {
    /// All held claims were moved to other editors
    Completed { claims_redistributed: usize },
    /// The user held no claims
    NothingToRedistribute,
    /// No active editors remain; claims stay with the deactivated user
    /// until one is available
    NoActiveEditors { claims_pending: usize },
}

#[derive(Debug, Clone)]
pub struct RedistributionReport {
    pub outcome: RedistributionOutcome,
    pub assignments: Vec<PlannedAssignment>,
}

#[derive(Debug, Clone)]
pub struct DeactivationResult {
    pub user: User,
    pub redistribution: RedistributionReport,
}

/// An initiated password reset
#[derive(Debug)]
pub struct PasswordReset {
    pub user_id: UserId,
    pub token: PasswordResetToken,
}

/// Derived workload of one active editor
#[derive(Debug, Clone)]
pub struct EditorCapacity {
    pub user_id: UserId,
    pub name: String,
    pub assigned: usize,
    pub in_progress: usize,
}

/// The claims edit desk
pub struct EditDeskService {
    claims: Arc<dyn ClaimPort>,
    users: Arc<dyn UserPort>,
    audit: Arc<dyn AuditLogPort>,
    notifications: Arc<dyn NotificationPort>,
}

impl EditDeskService {
    pub fn new(
        claims: Arc<dyn ClaimPort>,
        users: Arc<dyn UserPort>,
        audit: Arc<dyn AuditLogPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            claims,
            users,
            audit,
            notifications,
        }
    }

    /// Builds a desk over fresh in-memory adapters, returning the concrete
    /// handles so callers can seed data
    pub fn in_memory() -> (Self, InMemoryHandles) {
        let handles = InMemoryHandles::new();
        let service = Self::new(
            handles.claims.clone(),
            handles.users.clone(),
            handles.audit.clone(),
            handles.notifications.clone(),
        );
        (service, handles)
    }

    // ========================================================================
    // Claims
    // ========================================================================

    pub async fn get_claim(&self, id: ClaimId) -> Result<Claim, ServiceError> {
        self.load_claim(id).await
    }

    pub async fn list_claims(&self, query: ClaimQuery) -> Result<Vec<Claim>, ServiceError> {
        Ok(self.claims.find_claims(query, None).await?)
    }

    /// Registers a claim delivered by intake
    pub async fn register_claim(&self, claim: Claim) -> Result<Claim, ServiceError> {
        self.claims.insert_claim(claim.clone(), None).await?;
        info!(claim_id = %claim.id, visit_number = %claim.visit_number, "claim registered");
        Ok(claim)
    }

    /// Operations currently permitted on a claim, for the action menu
    pub async fn claim_actions(&self, id: ClaimId) -> Result<Vec<ClaimAction>, ServiceError> {
        let claim = self.load_claim(id).await?;
        Ok(allowed_actions(&claim))
    }

    /// Reassigns a claim to another editor
    ///
    /// The optional reason is recorded in the audit entry for the move.
    pub async fn reassign(
        &self,
        claim_id: ClaimId,
        target_id: UserId,
        mode: ReassignMode,
        reason: Option<String>,
        actor: Actor,
    ) -> Result<ReassignmentResult, ServiceError> {
        let target = self.load_target_editor(target_id).await?;
        self.reassign_single(claim_id, &target, Some(mode), reason, &actor)
            .await
    }

    /// Reassigns many claims to one editor, picking force mode per claim as
    /// its status requires
    ///
    /// The target is validated once up front; after that each claim succeeds
    /// or fails independently.
    pub async fn bulk_reassign(
        &self,
        claim_ids: Vec<ClaimId>,
        target_id: UserId,
        actor: Actor,
    ) -> Result<BulkReassignmentReport, ServiceError> {
        let target = self.load_target_editor(target_id).await?;
        ensure_assignable_editor(&target).map_err(ServiceError::from)?;

        let mut items = Vec::with_capacity(claim_ids.len());
        let mut success_count = 0;
        let mut failure_count = 0;

        for claim_id in claim_ids {
            match self
                .reassign_single(claim_id, &target, None, None, &actor)
                .await
            {
                Ok(result) => {
                    success_count += 1;
                    items.push(BulkItem {
                        claim_id,
                        status: BulkItemStatus::Reassigned { mode: result.mode },
                    });
                }
                Err(err) => {
                    failure_count += 1;
                    items.push(BulkItem {
                        claim_id,
                        status: BulkItemStatus::Failed {
                            code: err.code(),
                            message: err.to_string(),
                        },
                    });
                }
            }
        }

        info!(
            target = %target.id,
            success_count,
            failure_count,
            "bulk reassignment finished"
        );

        Ok(BulkReassignmentReport {
            success_count,
            failure_count,
            items,
        })
    }

    /// Re-opens an adjudicated claim for another editing cycle
    pub async fn re_adjudicate(
        &self,
        claim_id: ClaimId,
        target_id: UserId,
        patch: AdjudicationPatch,
        actor: Actor,
    ) -> Result<ReAdjudicationResult, ServiceError> {
        let mut claim = self.load_claim(claim_id).await?;
        let target = self.load_target_editor(target_id).await?;

        authorize_readjudication(&claim, &target)?;
        let outcome = apply_readjudication(&mut claim, &patch, &target);
        let claim = self.claims.update_claim(claim, None).await?;

        self.audit
            .append(
                AuditEntry::new(AuditEventType::ClaimReAdjudicated, actor)
                    .for_claim(claim.id)
                    .with_details(json!({
                        "lct_submission_count": outcome.lct_submission_count,
                        "max_reached": outcome.max_reached,
                        "previous_assignee": outcome.previous_assignee,
                        "previous_approved_amount": outcome.previous_approved_amount,
                        "new_approved_amount": outcome.new_approved_amount,
                        "notes": patch.notes,
                    })),
                None,
            )
            .await?;

        let mut body = format!(
            "Claim {} re-opened for re-adjudication, submission {} of {}",
            claim.visit_number, outcome.lct_submission_count, MAX_LCT_SUBMISSIONS
        );
        if outcome.max_reached {
            body.push_str(". This is the final re-review; no further re-adjudication is possible");
        }
        self.notifications
            .push(Notification::new(target.id, body), None)
            .await?;

        if let Some(previous) = outcome.previous_assignee {
            if previous != target.id {
                self.notifications
                    .push(
                        Notification::new(
                            previous,
                            format!(
                                "Claim {} was re-opened and handed to {}",
                                claim.visit_number, target.name
                            ),
                        ),
                        None,
                    )
                    .await?;
            }
        }

        info!(
            claim_id = %claim.id,
            target = %target.id,
            lct_submission_count = outcome.lct_submission_count,
            max_reached = outcome.max_reached,
            "claim re-adjudicated"
        );

        Ok(ReAdjudicationResult {
            claim,
            lct_submission_count: outcome.lct_submission_count,
            max_reached: outcome.max_reached,
        })
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user(&self, id: UserId) -> Result<User, ServiceError> {
        self.load_user(id).await
    }

    pub async fn list_users(&self, query: UserQuery) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.find_users(query, None).await?)
    }

    pub async fn list_active_editors(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self
            .users
            .find_users(UserQuery::active_editors(), None)
            .await?)
    }

    /// Derived per-editor workload across all active editors
    pub async fn editor_capacity(&self) -> Result<Vec<EditorCapacity>, ServiceError> {
        let editors = self.list_active_editors().await?;
        let mut capacities = Vec::with_capacity(editors.len());
        for editor in editors {
            let held = self
                .claims
                .find_claims(ClaimQuery::by_assignee(editor.id), None)
                .await?;
            capacities.push(EditorCapacity {
                user_id: editor.id,
                name: editor.name,
                assigned: held.len(),
                in_progress: held
                    .iter()
                    .filter(|c| c.edit_status.work_started())
                    .count(),
            });
        }
        Ok(capacities)
    }

    /// Creates a desk account and issues its one-time credential
    pub async fn create_user(
        &self,
        request: NewUserRequest,
        actor: Actor,
    ) -> Result<CreatedUser, ServiceError> {
        validate_new_user(&request.name, &request.email)?;

        if let Some(existing) = self.users.find_by_email(&request.email, None).await? {
            return Err(UserError::EmailExists(existing.email).into());
        }

        let user = User::new(request.name, request.email, request.role);
        self.users.insert_user(user.clone(), None).await?;
        let temporary_credential = TemporaryCredential::issue();

        self.audit
            .append(
                AuditEntry::new(AuditEventType::UserCreated, actor)
                    .for_user(user.id)
                    .with_details(json!({
                        "name": user.name,
                        "email": user.email,
                        "role": user.role,
                    })),
                None,
            )
            .await?;

        info!(user_id = %user.id, role = ?user.role, "user created");

        Ok(CreatedUser {
            user,
            temporary_credential,
        })
    }

    /// Deactivates an account and redistributes its claims across the
    /// remaining active editors
    ///
    /// Deactivation succeeds even when nobody can take the claims; the
    /// report says what happened to them.
    pub async fn deactivate_user(
        &self,
        user_id: UserId,
        actor: Actor,
    ) -> Result<DeactivationResult, ServiceError> {
        let mut user = self.load_user(user_id).await?;
        user.deactivate()?;
        let user = self.users.update_user(user, None).await?;

        // Every claim the user holds moves, whatever its status; an
        // inactive account must not remain anyone's assignee.
        let held: Vec<ClaimId> = self
            .claims
            .find_claims(ClaimQuery::by_assignee(user_id), None)
            .await?
            .iter()
            .map(|c| c.id)
            .collect();

        let candidates = self.editor_loads_excluding(user_id).await?;
        let redistribution = match plan_round_robin(&held, &candidates) {
            Ok(plan) if plan.is_empty() => RedistributionReport {
                outcome: RedistributionOutcome::NothingToRedistribute,
                assignments: Vec::new(),
            },
            Ok(plan) => {
                self.execute_redistribution(&plan, &user).await?;
                RedistributionReport {
                    outcome: RedistributionOutcome::Completed {
                        claims_redistributed: plan.len(),
                    },
                    assignments: plan,
                }
            }
            Err(ClaimError::NoActiveEditors) => {
                warn!(
                    user_id = %user_id,
                    claims_pending = held.len(),
                    "no active editors; claims stay with deactivated user"
                );
                RedistributionReport {
                    outcome: RedistributionOutcome::NoActiveEditors {
                        claims_pending: held.len(),
                    },
                    assignments: Vec::new(),
                }
            }
            Err(other) => return Err(other.into()),
        };

        self.audit
            .append(
                AuditEntry::new(AuditEventType::UserDeactivated, actor)
                    .for_user(user_id)
                    .with_details(json!({
                        "claims_held": held.len(),
                        "redistribution": match &redistribution.outcome {
                            RedistributionOutcome::Completed { claims_redistributed } =>
                                json!({ "status": "COMPLETED", "claims_redistributed": claims_redistributed }),
                            RedistributionOutcome::NothingToRedistribute =>
                                json!({ "status": "NOTHING_TO_REDISTRIBUTE" }),
                            RedistributionOutcome::NoActiveEditors { claims_pending } =>
                                json!({ "status": "NO_ACTIVE_EDITORS", "claims_pending": claims_pending }),
                        },
                    })),
                None,
            )
            .await?;

        info!(user_id = %user_id, outcome = ?redistribution.outcome, "user deactivated");

        Ok(DeactivationResult {
            user,
            redistribution,
        })
    }

    /// Re-activates a deactivated account
    pub async fn activate_user(&self, user_id: UserId, actor: Actor) -> Result<User, ServiceError> {
        let mut user = self.load_user(user_id).await?;
        user.activate()?;
        let user = self.users.update_user(user, None).await?;

        self.audit
            .append(
                AuditEntry::new(AuditEventType::UserActivated, actor).for_user(user_id),
                None,
            )
            .await?;
        self.notifications
            .push(
                Notification::new(
                    user_id,
                    "Your account has been re-activated. Reset your credentials before signing in",
                ),
                None,
            )
            .await?;

        info!(user_id = %user_id, "user activated");
        Ok(user)
    }

    /// Initiates a password reset, returning the time-boxed token
    pub async fn reset_password(
        &self,
        user_id: UserId,
        actor: Actor,
    ) -> Result<PasswordReset, ServiceError> {
        let user = self.load_user(user_id).await?;
        let token = PasswordResetToken::issue();

        self.audit
            .append(
                AuditEntry::new(AuditEventType::PasswordResetInitiated, actor)
                    .for_user(user.id)
                    .with_details(json!({ "expires_at": token.expires_at })),
                None,
            )
            .await?;
        self.notifications
            .push(
                Notification::new(
                    user.id,
                    "A password reset was initiated for your account. The token expires in 24 hours",
                ),
                None,
            )
            .await?;

        info!(user_id = %user.id, "password reset initiated");
        Ok(PasswordReset {
            user_id: user.id,
            token,
        })
    }

    // ========================================================================
    // Audit trail & notifications
    // ========================================================================

    pub async fn audit_trail(
        &self,
        filter: AuditTrailFilter,
        page: Page,
    ) -> Result<AuditTrailPage, ServiceError> {
        Ok(self.audit.trail(filter, page, None).await?)
    }

    pub async fn notifications_for(
        &self,
        user_id: UserId,
        include_read: bool,
    ) -> Result<Vec<Notification>, ServiceError> {
        Ok(self
            .notifications
            .for_recipient(user_id, include_read, None)
            .await?)
    }

    pub async fn mark_notification_read(&self, id: NotificationId) -> Result<(), ServiceError> {
        Ok(self.notifications.mark_read(id, None).await?)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn load_claim(&self, id: ClaimId) -> Result<Claim, ServiceError> {
        self.claims.get_claim(id, None).await.map_err(|e| {
            if e.is_not_found() {
                ClaimError::ClaimNotFound(id.to_string()).into()
            } else {
                e.into()
            }
        })
    }

    async fn load_user(&self, id: UserId) -> Result<User, ServiceError> {
        self.users.get_user(id, None).await.map_err(|e| {
            if e.is_not_found() {
                UserError::UserNotFound(id.to_string()).into()
            } else {
                e.into()
            }
        })
    }

    /// Loads a reassignment target; a missing user surfaces as
    /// `EDITOR_NOT_FOUND` rather than the generic user error
    async fn load_target_editor(&self, id: UserId) -> Result<User, ServiceError> {
        self.users.get_user(id, None).await.map_err(|e| {
            if e.is_not_found() {
                ClaimError::EditorNotFound(id.to_string()).into()
            } else {
                e.into()
            }
        })
    }

    /// Reassigns one claim; `mode` of `None` picks per-claim auto mode as
    /// bulk reassignment does
    async fn reassign_single(
        &self,
        claim_id: ClaimId,
        target: &User,
        mode: Option<ReassignMode>,
        reason: Option<String>,
        actor: &Actor,
    ) -> Result<ReassignmentResult, ServiceError> {
        let mut claim = self.load_claim(claim_id).await?;
        let mode = mode.unwrap_or_else(|| ReassignMode::auto_for(&claim));

        authorize_reassignment(&claim, mode, target)?;
        let previous = apply_reassignment(&mut claim, target);
        let claim = self.claims.update_claim(claim, None).await?;

        let event_type = match mode {
            ReassignMode::Standard => AuditEventType::ClaimReassigned,
            ReassignMode::Force => AuditEventType::ClaimForceReassigned,
        };
        self.audit
            .append(
                AuditEntry::new(event_type, actor.clone())
                    .for_claim(claim.id)
                    .with_details(json!({
                        "before": {
                            "assigned_to": previous.user_id,
                            "assigned_to_name": previous.user_name,
                        },
                        "after": {
                            "assigned_to": claim.assigned_to,
                            "assigned_to_name": claim.assigned_to_name,
                        },
                        "mode": mode,
                        "reason": reason,
                    })),
                None,
            )
            .await?;

        self.notifications
            .push(
                Notification::new(
                    target.id,
                    format!(
                        "Claim {} ({}) has been assigned to you",
                        claim.visit_number, claim.patient_name
                    ),
                ),
                None,
            )
            .await?;
        if let Some(displaced) = previous.user_id {
            let body = match mode {
                ReassignMode::Standard => format!(
                    "Claim {} has been reassigned to {}",
                    claim.visit_number, target.name
                ),
                ReassignMode::Force => format!(
                    "Claim {} was force-reassigned to {}; unsaved edits were discarded",
                    claim.visit_number, target.name
                ),
            };
            self.notifications
                .push(Notification::new(displaced, body), None)
                .await?;
        }

        info!(claim_id = %claim.id, target = %target.id, mode = ?mode, "claim reassigned");

        Ok(ReassignmentResult {
            claim,
            mode,
            previous_assignee: previous.user_id,
            previous_assignee_name: previous.user_name,
        })
    }

    /// Current active editors with derived loads, excluding one user
    async fn editor_loads_excluding(
        &self,
        excluded: UserId,
    ) -> Result<Vec<EditorLoad>, ServiceError> {
        let editors = self.list_active_editors().await?;
        let mut loads = Vec::with_capacity(editors.len());
        for editor in editors {
            if editor.id == excluded {
                continue;
            }
            let assigned_count = self.claims.count_assigned_to(editor.id, None).await?;
            loads.push(EditorLoad {
                user_id: editor.id,
                name: editor.name,
                assigned_count,
            });
        }
        Ok(loads)
    }

    /// Moves planned claims to their new holders, auditing each move as a
    /// system action
    async fn execute_redistribution(
        &self,
        plan: &[PlannedAssignment],
        from: &User,
    ) -> Result<(), ServiceError> {
        for planned in plan {
            let mut claim = self.load_claim(planned.claim_id).await?;
            claim.assign_to(planned.to_user_id, planned.to_user_name.clone());
            let claim = self.claims.update_claim(claim, None).await?;

            self.audit
                .append(
                    AuditEntry::new(AuditEventType::ClaimAutoReassigned, Actor::System)
                        .for_claim(claim.id)
                        .with_details(json!({
                            "from": from.id,
                            "to": planned.to_user_id,
                            "reason": "USER_DEACTIVATED",
                        })),
                    None,
                )
                .await?;
            self.notifications
                .push(
                    Notification::new(
                        planned.to_user_id,
                        format!(
                            "Claim {} was reassigned to you after {} was deactivated",
                            claim.visit_number, from.name
                        ),
                    ),
                    None,
                )
                .await?;
        }
        Ok(())
    }
}
