//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::Money;
use domain_claims::{Claim, EditStatus};
use domain_users::{Role, User, UserStatus};

use crate::fixtures::{MoneyFixtures, StringFixtures};

/// Builder for constructing test claims
pub struct ClaimBuilder {
    visit_number: String,
    patient_name: String,
    hospital_name: String,
    requested_amount: Money,
    approved_amount: Option<Money>,
    edit_status: Option<EditStatus>,
    assignee: Option<User>,
    lct_submission_count: Option<u8>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a new builder producing an unassigned intake claim
    pub fn new() -> Self {
        Self {
            visit_number: StringFixtures::visit_number().to_string(),
            patient_name: StringFixtures::patient_name().to_string(),
            hospital_name: StringFixtures::hospital_name().to_string(),
            requested_amount: MoneyFixtures::usd_requested(),
            approved_amount: None,
            edit_status: None,
            assignee: None,
            lct_submission_count: None,
        }
    }

    /// Sets the visit number
    pub fn with_visit_number(mut self, number: impl Into<String>) -> Self {
        self.visit_number = number.into();
        self
    }

    /// Sets the patient name
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    /// Sets the hospital name
    pub fn with_hospital_name(mut self, name: impl Into<String>) -> Self {
        self.hospital_name = name.into();
        self
    }

    /// Sets the requested amount
    pub fn with_requested_amount(mut self, amount: Money) -> Self {
        self.requested_amount = amount;
        self
    }

    /// Sets the approved amount
    pub fn with_approved_amount(mut self, amount: Money) -> Self {
        self.approved_amount = Some(amount);
        self
    }

    /// Assigns the claim to the given user
    pub fn assigned_to(mut self, user: &User) -> Self {
        self.assignee = Some(user.clone());
        self
    }

    /// Overrides the workflow status after assignment
    pub fn with_status(mut self, status: EditStatus) -> Self {
        self.edit_status = Some(status);
        self
    }

    /// Sets the re-adjudication submission counter
    pub fn with_lct_count(mut self, count: u8) -> Self {
        self.lct_submission_count = Some(count);
        self
    }

    /// Shorthand for an adjudicated claim with an approved amount
    pub fn adjudicated(self) -> Self {
        self.with_status(EditStatus::Adjudicated)
            .with_approved_amount(MoneyFixtures::usd_approved())
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let mut claim = Claim::intake(
            self.visit_number,
            self.patient_name,
            self.hospital_name,
            self.requested_amount,
        );
        if let Some(user) = self.assignee {
            claim.assign_to(user.id, user.name);
        }
        if let Some(status) = self.edit_status {
            claim.edit_status = status;
        }
        if let Some(amount) = self.approved_amount {
            claim.approved_amount = Some(amount);
        }
        if let Some(count) = self.lct_submission_count {
            claim.lct_submission_count = count;
        }
        claim
    }
}

/// Builder for constructing test desk accounts
pub struct UserBuilder {
    name: String,
    email: String,
    role: Role,
    status: UserStatus,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Creates a new builder producing an active editor
    pub fn new() -> Self {
        Self {
            name: "Lena Ortiz".to_string(),
            email: StringFixtures::editor_email().to_string(),
            role: Role::Editor,
            status: UserStatus::Active,
        }
    }

    /// Shorthand for an active editor with the given name
    pub fn editor(name: impl Into<String>) -> Self {
        let name = name.into();
        let email = format!(
            "{}@desk.example",
            name.to_lowercase().replace(' ', ".")
        );
        Self::new().with_name(name).with_email(email)
    }

    /// Shorthand for an active manager
    pub fn manager(name: impl Into<String>) -> Self {
        Self::new()
            .with_name(name)
            .with_email(StringFixtures::manager_email())
            .with_role(Role::Manager)
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Marks the account inactive
    pub fn inactive(mut self) -> Self {
        self.status = UserStatus::Inactive;
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        let mut user = User::new(self.name, self.email, self.role);
        user.status = self.status;
        user
    }
}
