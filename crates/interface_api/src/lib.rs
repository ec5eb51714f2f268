//! HTTP API Layer
//!
//! REST API for the claims edit desk using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, users, audit, notifications
//! - **Middleware**: JWT authentication and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Stable error codes in a consistent envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let (service, _handles) = app_services::EditDeskService::in_memory();
//! let app = create_router(Arc::new(service), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use app_services::EditDeskService;

use crate::config::ApiConfig;
use crate::handlers::{audit, claims, health, users};
use crate::middleware::{auth_middleware, request_log_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EditDeskService>,
    pub config: ApiConfig,
}

/// Creates the main API router
pub fn create_router(service: Arc<EditDeskService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::register_claim))
        .route("/", get(claims::list_claims))
        .route("/reassign", post(claims::bulk_reassign))
        .route("/:id", get(claims::get_claim))
        .route("/:id/actions", get(claims::claim_actions))
        .route("/:id/reassign", post(claims::reassign_claim))
        .route("/:id/re-adjudicate", post(claims::re_adjudicate_claim));

    // User routes
    let user_routes = Router::new()
        .route("/", post(users::create_user))
        .route("/", get(users::list_users))
        .route("/editors", get(users::list_editors))
        .route("/capacity", get(users::editor_capacity))
        .route("/:id", get(users::get_user))
        .route("/:id/activate", post(users::activate_user))
        .route("/:id/deactivate", post(users::deactivate_user))
        .route("/:id/reset-password", post(users::reset_password));

    // Audit and notification routes
    let audit_routes = Router::new().route("/", get(audit::audit_trail));
    let notification_routes = Router::new()
        .route("/", get(audit::list_notifications))
        .route("/:id/read", post(audit::mark_notification_read));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/users", user_routes)
        .nest("/audit", audit_routes)
        .nest("/notifications", notification_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
