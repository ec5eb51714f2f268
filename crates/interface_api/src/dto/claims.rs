//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use app_services::{
    BulkItem, BulkItemStatus, BulkReassignmentReport, ReAdjudicationResult, ReassignmentResult,
};
use core_kernel::{ClaimId, UserId};
use domain_claims::{Claim, ClaimAction, EditStatus, ReassignMode};

use super::MoneyDto;

#[derive(Debug, Deserialize)]
pub struct RegisterClaimRequest {
    pub visit_number: String,
    pub patient_name: String,
    pub hospital_name: String,
    pub requested_amount: MoneyDto,
}

#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub target_id: UserId,
    /// Takes over a claim mid-work, discarding unsaved edits
    #[serde(default)]
    pub force: bool,
    /// Recorded in the audit entry for the move
    pub reason: Option<String>,
}

impl ReassignRequest {
    pub fn mode(&self) -> ReassignMode {
        if self.force {
            ReassignMode::Force
        } else {
            ReassignMode::Standard
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkReassignRequest {
    pub claim_ids: Vec<ClaimId>,
    pub target_id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct ReAdjudicateRequest {
    pub target_id: UserId,
    pub approved_amount: Option<MoneyDto>,
    pub notes: Option<String>,
}

/// Query parameters for listing claims
#[derive(Debug, Default, Deserialize)]
pub struct ClaimListQuery {
    pub status: Option<EditStatus>,
    pub assigned_to: Option<UserId>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub visit_number: String,
    pub patient_name: String,
    pub hospital_name: String,
    pub edit_status: EditStatus,
    pub assigned_to: Option<UserId>,
    pub assigned_to_name: Option<String>,
    pub lct_submission_count: u8,
    pub requested_amount: MoneyDto,
    pub approved_amount: Option<MoneyDto>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            visit_number: claim.visit_number,
            patient_name: claim.patient_name,
            hospital_name: claim.hospital_name,
            edit_status: claim.edit_status,
            assigned_to: claim.assigned_to,
            assigned_to_name: claim.assigned_to_name,
            lct_submission_count: claim.lct_submission_count,
            requested_amount: claim.requested_amount.into(),
            approved_amount: claim.approved_amount.map(Into::into),
            assigned_at: claim.assigned_at,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReassignmentResponse {
    pub claim: ClaimResponse,
    pub mode: ReassignMode,
    pub previous_assignee: Option<UserId>,
    pub previous_assignee_name: Option<String>,
}

impl From<ReassignmentResult> for ReassignmentResponse {
    fn from(result: ReassignmentResult) -> Self {
        Self {
            claim: result.claim.into(),
            mode: result.mode,
            previous_assignee: result.previous_assignee,
            previous_assignee_name: result.previous_assignee_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkItemStatusResponse {
    Reassigned {
        mode: ReassignMode,
    },
    Failed {
        code: String,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BulkItemResponse {
    pub claim_id: ClaimId,
    #[serde(flatten)]
    pub outcome: BulkItemStatusResponse,
}

impl From<BulkItem> for BulkItemResponse {
    fn from(item: BulkItem) -> Self {
        let outcome = match item.status {
            BulkItemStatus::Reassigned { mode } => BulkItemStatusResponse::Reassigned { mode },
            BulkItemStatus::Failed { code, message } => BulkItemStatusResponse::Failed {
                code: code.to_string(),
                message,
            },
        };
        Self {
            claim_id: item.claim_id,
            outcome,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BulkReassignmentResponse {
    pub success_count: usize,
    pub failure_count: usize,
    pub items: Vec<BulkItemResponse>,
}

impl From<BulkReassignmentReport> for BulkReassignmentResponse {
    fn from(report: BulkReassignmentReport) -> Self {
        Self {
            success_count: report.success_count,
            failure_count: report.failure_count,
            items: report.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReAdjudicationResponse {
    pub claim: ClaimResponse,
    pub lct_submission_count: u8,
    pub max_reached: bool,
}

impl From<ReAdjudicationResult> for ReAdjudicationResponse {
    fn from(result: ReAdjudicationResult) -> Self {
        Self {
            claim: result.claim.into(),
            lct_submission_count: result.lct_submission_count,
            max_reached: result.max_reached,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionsResponse {
    pub actions: Vec<ClaimAction>,
}
