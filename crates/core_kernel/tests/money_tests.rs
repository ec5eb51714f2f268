//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency handling,
//! and serialization.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_has_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_positive_amount_is_positive() {
        assert!(Money::new(dec!(0.01), Currency::USD).is_positive());
        assert!(!Money::new(dec!(-0.01), Currency::USD).is_positive());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.25), Currency::USD);
        let b = Money::new(dec!(50.75), Currency::USD);

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.amount(), dec!(151.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(100), Currency::EUR);

        let err = a.checked_add(&b).unwrap_err();
        assert!(matches!(err, MoneyError::CurrencyMismatch(_, _)));
    }

    #[test]
    fn test_checked_sub_same_currency() {
        let a = Money::new(dec!(100), Currency::INR);
        let b = Money::new(dec!(40), Currency::INR);

        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(60));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let a = Money::new(dec!(100), Currency::GBP);
        let b = Money::new(dec!(40), Currency::AED);

        assert!(a.checked_sub(&b).is_err());
    }

    #[test]
    fn test_operator_add() {
        let a = Money::new(dec!(1.5), Currency::USD);
        let b = Money::new(dec!(2.5), Currency::USD);
        assert_eq!((a + b).amount(), dec!(4));
    }

    #[test]
    fn test_operator_sub() {
        let a = Money::new(dec!(5), Currency::USD);
        let b = Money::new(dec!(2), Currency::USD);
        assert_eq!((a - b).amount(), dec!(3));
    }

    #[test]
    fn test_subtraction_can_go_negative() {
        let a = Money::new(dec!(10), Currency::USD);
        let b = Money::new(dec!(25), Currency::USD);

        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(-15));
        assert!(!diff.is_positive());
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_includes_currency_code() {
        let m = Money::new(dec!(1200), Currency::SAR);
        assert_eq!(m.to_string(), "SAR 1200");
    }

    #[test]
    fn test_display_rounds_to_currency_places() {
        let m = Money::new(dec!(12.3456), Currency::USD);
        assert_eq!(m.to_string(), "USD 12.35");
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(99.999), Currency::USD).round_to_currency();
        assert_eq!(m.amount(), dec!(100.00));
    }

    #[test]
    fn test_currency_code_and_display_agree() {
        for currency in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::INR,
            Currency::AED,
            Currency::SAR,
        ] {
            assert_eq!(currency.to_string(), currency.code());
        }
    }
}

mod serde_round_trips {
    use super::*;

    #[test]
    fn test_money_round_trips_through_json() {
        let original = Money::new(dec!(1234.56), Currency::USD);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::AED).unwrap(), "\"AED\"");
    }
}
