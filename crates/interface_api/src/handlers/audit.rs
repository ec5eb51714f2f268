//! Audit trail and notification handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use core_kernel::NotificationId;

use crate::auth::Claims;
use crate::dto::audit::*;
use crate::error::ApiError;
use crate::AppState;

/// Queries the audit trail, newest entries first
pub async fn audit_trail(
    State(state): State<AppState>,
    Query(query): Query<AuditTrailQuery>,
) -> Result<Json<AuditTrailResponse>, ApiError> {
    let page = state
        .service
        .audit_trail(query.filter(), query.page())
        .await?;
    Ok(Json(page.into()))
}

/// The authenticated user's notification inbox
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
    let user_id = claims.user_id().map_err(|_| ApiError::Unauthorized)?;
    let notifications = state
        .service
        .notifications_for(user_id, query.include_read)
        .await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

/// Marks one notification as read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.service.mark_notification_read(id).await?;
    Ok(Json(serde_json::json!({ "read": true })))
}
