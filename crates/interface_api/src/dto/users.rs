//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use app_services::{
    CreatedUser, DeactivationResult, EditorCapacity, PasswordReset, RedistributionOutcome,
};
use core_kernel::{ClaimId, UserId};
use domain_users::{Role, User, UserStatus};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Query parameters for listing users
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Returned once at account creation; the secret is never retrievable again
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub user: UserResponse,
    pub temporary_secret: String,
}

impl From<CreatedUser> for CreatedUserResponse {
    fn from(created: CreatedUser) -> Self {
        Self {
            user: created.user.into(),
            temporary_secret: created.temporary_credential.secret,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RedistributedClaim {
    pub claim_id: ClaimId,
    pub to_user_id: UserId,
    pub to_user_name: String,
}

#[derive(Debug, Serialize)]
pub struct RedistributionResponse {
    pub outcome: String,
    pub claims_redistributed: usize,
    pub claims_pending: usize,
    pub assignments: Vec<RedistributedClaim>,
}

#[derive(Debug, Serialize)]
pub struct DeactivationResponse {
    pub user: UserResponse,
    pub redistribution: RedistributionResponse,
}

impl From<DeactivationResult> for DeactivationResponse {
    fn from(result: DeactivationResult) -> Self {
        let (outcome, claims_redistributed, claims_pending) = match result.redistribution.outcome {
            RedistributionOutcome::Completed {
                claims_redistributed,
            } => ("COMPLETED", claims_redistributed, 0),
            RedistributionOutcome::NothingToRedistribute => ("NOTHING_TO_REDISTRIBUTE", 0, 0),
            RedistributionOutcome::NoActiveEditors { claims_pending } => {
                ("NO_ACTIVE_EDITORS", 0, claims_pending)
            }
        };

        Self {
            user: result.user.into(),
            redistribution: RedistributionResponse {
                outcome: outcome.to_string(),
                claims_redistributed,
                claims_pending,
                assignments: result
                    .redistribution
                    .assignments
                    .into_iter()
                    .map(|a| RedistributedClaim {
                        claim_id: a.claim_id,
                        to_user_id: a.to_user_id,
                        to_user_name: a.to_user_name,
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PasswordResetResponse {
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<PasswordReset> for PasswordResetResponse {
    fn from(reset: PasswordReset) -> Self {
        Self {
            user_id: reset.user_id,
            token: reset.token.token,
            expires_at: reset.token.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorCapacityResponse {
    pub user_id: UserId,
    pub name: String,
    pub assigned: usize,
    pub in_progress: usize,
}

impl From<EditorCapacity> for EditorCapacityResponse {
    fn from(capacity: EditorCapacity) -> Self {
        Self {
            user_id: capacity.user_id,
            name: capacity.name,
            assigned: capacity.assigned,
            in_progress: capacity.in_progress,
        }
    }
}
