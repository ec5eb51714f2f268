//! User handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use app_services::{NewUserRequest, UserQuery};
use core_kernel::UserId;

use crate::auth::Claims;
use crate::dto::users::*;
use crate::error::ApiError;
use crate::AppState;

/// Creates a desk account and returns its one-time credential
pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<CreatedUserResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let created = state
        .service
        .create_user(
            NewUserRequest {
                name: request.name,
                email: request.email,
                role: request.role,
            },
            actor,
        )
        .await?;
    Ok(Json(created.into()))
}

/// Lists users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .service
        .list_users(UserQuery {
            role: query.role,
            status: query.status,
        })
        .await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Gets a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Lists active editors, the valid reassignment targets
pub async fn list_editors(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let editors = state.service.list_active_editors().await?;
    Ok(Json(editors.into_iter().map(Into::into).collect()))
}

/// Per-editor workload snapshot
pub async fn editor_capacity(
    State(state): State<AppState>,
) -> Result<Json<Vec<EditorCapacityResponse>>, ApiError> {
    let capacity = state.service.editor_capacity().await?;
    Ok(Json(capacity.into_iter().map(Into::into).collect()))
}

/// Deactivates an account, redistributing its open claims
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DeactivationResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let result = state.service.deactivate_user(id, actor).await?;
    Ok(Json(result.into()))
}

/// Re-activates a deactivated account
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let user = state.service.activate_user(id, actor).await?;
    Ok(Json(user.into()))
}

/// Initiates a password reset for an account
pub async fn reset_password(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PasswordResetResponse>, ApiError> {
    let actor = claims.actor().map_err(|_| ApiError::Unauthorized)?;
    let reset = state.service.reset_password(id, actor).await?;
    Ok(Json(reset.into()))
}
