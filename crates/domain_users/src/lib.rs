//! User Registry Domain
//!
//! Editor and manager accounts for the claims edit desk. Users carry an
//! immutable role and an active/inactive status; the count of claims a user
//! holds is always derived from the claim registry, never stored here.

pub mod user;
pub mod validation;
pub mod credentials;
pub mod error;

pub use user::{Role, User, UserStatus};
pub use validation::{validate_new_user, ValidationResult, MAX_NAME_LEN, MIN_NAME_LEN};
pub use credentials::{PasswordResetToken, TemporaryCredential, RESET_TOKEN_VALIDITY_HOURS};
pub use error::UserError;
