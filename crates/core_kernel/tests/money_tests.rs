//! Integration tests for Money, Rate and the calendar helpers

use chrono::NaiveDate;
use core_kernel::money::{parse_decimal, to_fixed};
use core_kernel::{first_of_next_month, format_date, parse_date, Money, MoneyError, Rate};
use rust_decimal_macros::dec;

mod money_tests {
    use super::*;

    /// Verifies division guards against a zero divisor
    #[test]
    fn test_divide_by_zero() {
        let m = Money::new(dec!(100));
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    /// Verifies the monthly instalment arithmetic used on receipts
    #[test]
    fn test_divide_into_instalments() {
        let total = Money::new(dec!(316.40)) + Money::new(dec!(5.00));
        let monthly = total.divide(dec!(8)).unwrap();
        assert_eq!(monthly.amount(), dec!(40.175));
        assert_eq!(monthly.to_string(), "$40.18");
    }

    /// Verifies summing an iterator of amounts
    #[test]
    fn test_sum() {
        let total: Money = [dec!(40), dec!(30), dec!(20)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(90));
    }

    /// Verifies sign predicates
    #[test]
    fn test_sign_predicates() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    /// Verifies fixed text used for persistence pads to two digits
    #[test]
    fn test_to_fixed_pads() {
        assert_eq!(to_fixed(dec!(0.1)), "0.10");
        assert_eq!(to_fixed(dec!(13)), "13.00");
        assert_eq!(to_fixed(dec!(2.675)), "2.68");
    }

    /// Verifies parse failures report the offending text
    #[test]
    fn test_parse_decimal_error_text() {
        assert_eq!(
            parse_decimal("12,50"),
            Err(MoneyError::InvalidAmount("12,50".to_string()))
        );
    }
}

mod rate_tests {
    use super::*;

    #[test]
    fn test_percentage_round_trip() {
        let rate = Rate::from_percentage(dec!(15));
        assert_eq!(rate.as_decimal(), dec!(0.15));
        assert_eq!(rate.as_percentage(), dec!(15));
    }

    #[test]
    fn test_zero_rate_applies_nothing() {
        let rate = Rate::new(dec!(0));
        assert!(rate.apply(&Money::new(dec!(500))).is_zero());
    }
}

mod calendar_tests {
    use super::*;

    #[test]
    fn test_date_text_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 26).unwrap();
        assert_eq!(format_date(date), "2023-07-26");
        assert_eq!(parse_date("2023-07-26").unwrap(), date);
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        assert!(parse_date("26/07/2023").is_err());
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_first_of_next_month_from_first_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(
            first_of_next_month(date),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
