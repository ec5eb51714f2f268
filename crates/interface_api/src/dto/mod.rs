//! Request/response data transfer objects

pub mod audit;
pub mod claims;
pub mod users;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// Monetary amount on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoneyDto {
    pub amount: Decimal,
    pub currency: Currency,
}

impl From<MoneyDto> for Money {
    fn from(dto: MoneyDto) -> Self {
        Money::new(dto.amount, dto.currency)
    }
}

impl From<Money> for MoneyDto {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency(),
        }
    }
}
