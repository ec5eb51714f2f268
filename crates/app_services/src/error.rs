//! Service-layer error type

use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_users::UserError;

/// Errors surfaced by desk operations
///
/// Domain rule violations keep their own variants so the API layer can map
/// stable codes; storage failures collapse into `Storage`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Storage(#[from] PortError),
}

impl ServiceError {
    /// Stable error code for the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Claim(e) => e.code(),
            ServiceError::User(e) => e.code(),
            ServiceError::Storage(e) => match e {
                PortError::NotFound { .. } => "NOT_FOUND",
                PortError::Validation { .. } => "VALIDATION_FAILED",
                PortError::Conflict { .. } => "CONFLICT",
                PortError::Internal { .. } => "INTERNAL_ERROR",
            },
        }
    }
}
