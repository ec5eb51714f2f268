//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_claims::{Claim, EditStatus, MAX_LCT_SUBMISSIONS};
use domain_users::User;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{ClaimBuilder, UserBuilder};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::INR),
        Just(Currency::AED),
        Just(Currency::SAR),
    ]
}

/// Strategy for generating positive Money values with two decimal places
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000_000i64, currency_strategy())
        .prop_map(|(cents, currency)| Money::new(Decimal::new(cents, 2), currency))
}

/// Strategy for generating any workflow status
pub fn edit_status_strategy() -> impl Strategy<Value = EditStatus> {
    prop_oneof![
        Just(EditStatus::Unassigned),
        Just(EditStatus::Pending),
        Just(EditStatus::InProgress),
        Just(EditStatus::Adjudicated),
        Just(EditStatus::ReAdjudicated),
        Just(EditStatus::Completed),
        Just(EditStatus::Edited),
    ]
}

/// Strategy for statuses still inside the edit flow, i.e. reassignable
pub fn open_status_strategy() -> impl Strategy<Value = EditStatus> {
    prop_oneof![
        Just(EditStatus::Pending),
        Just(EditStatus::InProgress),
        Just(EditStatus::Edited),
    ]
}

/// Strategy for valid re-adjudication submission counts
pub fn lct_count_strategy() -> impl Strategy<Value = u8> {
    0u8..=MAX_LCT_SUBMISSIONS
}

/// Strategy for generating claims across the status and counter space
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        edit_status_strategy(),
        lct_count_strategy(),
        positive_money_strategy(),
        1u32..10_000u32,
    )
        .prop_map(|(status, lct, amount, visit)| {
            let mut builder = ClaimBuilder::new()
                .with_visit_number(format!("V-{visit}"))
                .with_requested_amount(amount)
                .with_lct_count(lct);
            if status != EditStatus::Unassigned {
                builder = builder
                    .assigned_to(&UserBuilder::editor("Prop Editor").build())
                    .with_status(status);
            }
            builder.build()
        })
}

/// Strategy for generating a pool of active editors
pub fn editor_pool_strategy(max: usize) -> impl Strategy<Value = Vec<User>> {
    (1..=max).prop_map(|count| {
        (0..count)
            .map(|i| {
                UserBuilder::editor(format!("Editor {i:02}"))
                    .with_email(format!("editor{i:02}@desk.example"))
                    .build()
            })
            .collect()
    })
}
