//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use app_services::ClaimQuery;
use core_kernel::ClaimId;
use domain_claims::{AdjudicationPatch, Claim};

use crate::auth::Claims;
use crate::dto::claims::*;
use crate::error::ApiError;
use crate::AppState;

/// Registers a claim delivered by intake
pub async fn register_claim(
    State(state): State<AppState>,
    Json(request): Json<RegisterClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = Claim::intake(
        request.visit_number,
        request.patient_name,
        request.hospital_name,
        request.requested_amount.into(),
    );
    let claim = state.service.register_claim(claim).await?;
    Ok(Json(claim.into()))
}

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ClaimListQuery>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state
        .service
        .list_claims(ClaimQuery {
            edit_status: query.status,
            assigned_to: query.assigned_to,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.service.get_claim(id).await?;
    Ok(Json(claim.into()))
}

/// Lists the actions the desk may offer for a claim
pub async fn claim_actions(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ActionsResponse>, ApiError> {
    let actions = state.service.claim_actions(id).await?;
    Ok(Json(ActionsResponse { actions }))
}

/// Reassigns a claim to another editor
pub async fn reassign_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<ReassignRequest>,
) -> Result<Json<ReassignmentResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let result = state
        .service
        .reassign(id, request.target_id, request.mode(), request.reason, actor)
        .await?;
    Ok(Json(result.into()))
}

/// Reassigns many claims to one editor in a single batch
pub async fn bulk_reassign(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<BulkReassignRequest>,
) -> Result<Json<BulkReassignmentResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let report = state
        .service
        .bulk_reassign(request.claim_ids, request.target_id, actor)
        .await?;
    Ok(Json(report.into()))
}

/// Re-opens an adjudicated claim for another editing cycle
pub async fn re_adjudicate_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<ReAdjudicateRequest>,
) -> Result<Json<ReAdjudicationResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let patch = AdjudicationPatch {
        approved_amount: request.approved_amount.map(Into::into),
        notes: request.notes,
    };
    let result = state
        .service
        .re_adjudicate(id, request.target_id, patch, actor)
        .await?;
    Ok(Json(result.into()))
}
