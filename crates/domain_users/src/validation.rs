//! User validation rules
//!
//! # Rules
//!
//! - Name: 2-100 characters after trimming
//! - Email: syntactically valid (delegated to the `validator` crate) and
//!   unique case-insensitively (uniqueness is checked against the registry
//!   by the service layer; the helper here only normalizes)

use validator::ValidateEmail;

use crate::error::UserError;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Result of a validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }
}

/// Validates the fields of a user about to be created
///
/// Returns the first violation as a typed error so callers get a stable
/// code; the accumulated `ValidationResult` form is available through
/// [`check_new_user`] for UI surfaces that want every problem at once.
pub fn validate_new_user(name: &str, email: &str) -> Result<(), UserError> {
    let result = check_new_user(name, email);
    if result.is_valid() {
        return Ok(());
    }
    // Classify the first failure
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_NAME_LEN || trimmed.chars().count() > MAX_NAME_LEN {
        return Err(UserError::InvalidName(format!(
            "name must be {MIN_NAME_LEN}-{MAX_NAME_LEN} characters"
        )));
    }
    Err(UserError::InvalidEmail(email.to_string()))
}

/// Accumulating form of new-user validation
pub fn check_new_user(name: &str, email: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let name_len = name.trim().chars().count();
    if name_len < MIN_NAME_LEN {
        result.add_error(format!("Name must be at least {MIN_NAME_LEN} characters"));
    }
    if name_len > MAX_NAME_LEN {
        result.add_error(format!("Name must be at most {MAX_NAME_LEN} characters"));
    }

    if !email.validate_email() {
        result.add_error(format!("Invalid email format: {email}"));
    }

    result
}

/// Case-insensitive email comparison used for uniqueness checks
pub fn emails_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_passes() {
        assert!(validate_new_user("Dana Wells", "dana@desk.example").is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let err = validate_new_user("D", "dana@desk.example").unwrap_err();
        assert_eq!(err.code(), "INVALID_NAME");
    }

    #[test]
    fn test_name_of_only_whitespace_rejected() {
        let err = validate_new_user("   ", "dana@desk.example").unwrap_err();
        assert_eq!(err.code(), "INVALID_NAME");
    }

    #[test]
    fn test_overlong_name_rejected() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_new_user(&name, "dana@desk.example").unwrap_err();
        assert_eq!(err.code(), "INVALID_NAME");
    }

    #[test]
    fn test_hundred_char_name_accepted() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(validate_new_user(&name, "dana@desk.example").is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let err = validate_new_user("Dana Wells", "not-an-email").unwrap_err();
        assert_eq!(err.code(), "INVALID_EMAIL");
    }

    #[test]
    fn test_check_accumulates_all_errors() {
        let result = check_new_user("D", "nope");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_emails_match_case_insensitive() {
        assert!(emails_match("Dana@Desk.example", "dana@desk.EXAMPLE"));
        assert!(!emails_match("dana@desk.example", "dana2@desk.example"));
    }
}
