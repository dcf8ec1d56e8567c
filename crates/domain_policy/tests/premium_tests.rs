//! Premium Calculation Tests
//!
//! # Test Organization
//!
//! - `scenario_tests` - worked examples with known totals
//! - `receipt_tests` - receipt figures, monthly plan, legacy approximation
//! - `property_tests` - invariants over generated rates and selections

use chrono::NaiveDate;
use core_kernel::Money;
use domain_policy::{
    compute, BreakdownSource, Coverages, PaymentMethod, PremiumBreakdown, Receipt,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::*;

// ============================================================================
// SCENARIO TESTS
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_two_cars_every_coverage() {
        let breakdown = compute(2, Coverages::all(), &RateFixtures::standard());

        assert_eq!(breakdown.total_premium, Money::new(dec!(190.00)));
        assert_eq!(breakdown.extra_costs, Money::new(dec!(90.00)));
        assert_eq!(breakdown.subtotal, Money::new(dec!(280.00)));
        assert_eq!(breakdown.hst_amount, Money::new(dec!(36.40)));
        assert_eq!(breakdown.total_cost, Money::new(dec!(316.40)));
        assert_breakdown_consistent(&breakdown);
    }

    #[test]
    fn test_one_car_no_coverage() {
        let breakdown = compute(1, Coverages::none(), &RateFixtures::standard());

        assert_eq!(breakdown.total_premium, Money::new(dec!(100.00)));
        assert!(breakdown.extra_costs.is_zero());
        assert_eq!(breakdown.total_cost, Money::new(dec!(113.00)));
    }

    /// The discount applies to every car after the first
    #[test]
    fn test_three_cars_discount() {
        let breakdown = compute(3, Coverages::none(), &RateFixtures::tax_free());

        assert_eq!(breakdown.total_premium, Money::new(dec!(280.00)));
        assert_eq!(breakdown.total_cost, breakdown.total_premium);
    }

    /// Production rates give fractional cents that survive until display
    #[test]
    fn test_office_rates_keep_precision() {
        let breakdown = compute(
            2,
            Coverages {
                extra_liability: true,
                glass: false,
                loaner_car: true,
            },
            &RateFixtures::office(),
        );

        assert_eq!(breakdown.total_premium.amount(), dec!(1520.75));
        assert_eq!(breakdown.extra_costs.amount(), dec!(376.00));
        assert_eq!(breakdown.subtotal.amount(), dec!(1896.75));
        assert_eq!(breakdown.hst_amount.amount(), dec!(284.5125));
        assert_eq!(breakdown.total_cost.to_fixed(), "2181.26");
        assert_breakdown_consistent(&breakdown);
    }

    #[test]
    fn test_processing_fee_not_in_total() {
        let mut rates = RateFixtures::standard();
        let before = compute(1, Coverages::none(), &rates);
        rates.processing_fee = Money::new(dec!(999.99));

        assert_eq!(compute(1, Coverages::none(), &rates), before);
    }
}

// ============================================================================
// RECEIPT TESTS
// ============================================================================

mod receipt_tests {
    use super::*;

    #[test]
    fn test_monthly_plan() {
        let record = PolicyRecordBuilder::new()
            .with_submission(
                PolicySubmissionBuilder::new()
                    .with_num_cars(2)
                    .with_coverages(Coverages::all())
                    .with_payment_method(PaymentMethod::Monthly),
            )
            .build();

        let receipt = Receipt::for_record(&record, &RateFixtures::standard());
        let plan = receipt.monthly_plan.expect("monthly payers get a plan");

        assert_eq!(plan.payment.amount(), dec!(40.175));
        assert_eq!(plan.payment.to_fixed(), "40.18");
        assert_eq!(plan.next_due, NaiveDate::from_ymd_opt(2023, 8, 1).unwrap());
    }

    #[test]
    fn test_monthly_plan_rolls_year() {
        let record = PolicyRecordBuilder::new()
            .with_invoice_date(DateFixtures::december_invoice_date())
            .with_submission(
                PolicySubmissionBuilder::new().with_payment_method(PaymentMethod::Monthly),
            )
            .build();

        let receipt = Receipt::for_record(&record, &RateFixtures::standard());

        assert_eq!(
            receipt.monthly_plan.unwrap().next_due,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_full_payment_has_no_plan() {
        let record = PolicyRecordBuilder::new().build();
        let receipt = Receipt::for_record(&record, &RateFixtures::standard());

        assert!(receipt.monthly_plan.is_none());
        assert_eq!(receipt.breakdown_source, BreakdownSource::Recorded);
    }

    /// Without a stored breakdown the receipt keeps the total and derives the rest
    #[test]
    fn test_legacy_record_is_approximated() {
        let record = PolicyRecordBuilder::new().legacy().build();
        let rates = RateFixtures::standard();

        let receipt = Receipt::for_record(&record, &rates);

        assert_eq!(receipt.breakdown_source, BreakdownSource::Approximated);
        assert_eq!(receipt.breakdown.total_cost, record.total_cost);
        assert_eq!(
            receipt.breakdown,
            PremiumBreakdown::approximate(record.total_cost, rates.processing_fee)
        );
    }

    #[test]
    fn test_reprint_uses_current_tax_label() {
        let record = PolicyRecordBuilder::new().build();
        let mut rates = RateFixtures::standard();
        rates.hst_rate = dec!(15);

        let receipt = Receipt::for_record(&record, &rates);

        assert_eq!(receipt.hst_rate.to_string(), "15.00%");
        assert_eq!(receipt.breakdown.hst_amount, Money::new(dec!(13.00)));
    }

    #[test]
    fn test_display_name_title_case() {
        let mut customer = CustomerFixtures::newfoundland();
        customer.first_name = "jANET".to_string();
        customer.last_name = "o'neil-pike".to_string();
        let record = PolicyRecordBuilder::new()
            .with_submission(PolicySubmissionBuilder::new().with_customer(customer))
            .build();

        let receipt = Receipt::for_record(&record, &RateFixtures::standard());

        assert_eq!(receipt.display_name(), "Janet O'neil-pike");
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_breakdown_is_consistent(
            rates in rate_parameters_strategy(),
            cars in num_cars_strategy(),
            coverages in coverages_strategy(),
        ) {
            let breakdown = compute(cars, coverages, &rates);
            prop_assert_eq!(breakdown.subtotal, breakdown.total_premium + breakdown.extra_costs);
            prop_assert_eq!(breakdown.total_cost, breakdown.subtotal + breakdown.hst_amount);
        }

        /// Extras scale linearly with the car count
        #[test]
        fn prop_extras_linear_in_cars(
            rates in rate_parameters_strategy(),
            cars in num_cars_strategy(),
            coverages in coverages_strategy(),
        ) {
            let one = compute(1, coverages, &rates);
            let many = compute(cars, coverages, &rates);
            prop_assert_eq!(many.extra_costs, one.extra_costs * Decimal::from(cars));
        }

        /// Each coverage contributes independently
        #[test]
        fn prop_coverages_additive(
            rates in rate_parameters_strategy(),
            cars in num_cars_strategy(),
        ) {
            let only = |extra_liability, glass, loaner_car| {
                compute(cars, Coverages { extra_liability, glass, loaner_car }, &rates).extra_costs
            };
            let sum = only(true, false, false) + only(false, true, false) + only(false, false, true);
            prop_assert_eq!(only(true, true, true), sum);
            prop_assert!(only(false, false, false).is_zero());
        }

        /// Premium follows `basic * n - (n - 1) * basic * discount` and tax
        /// is charged on the subtotal, with no coverages
        #[test]
        fn prop_premium_matches_closed_form(
            rates in rate_parameters_strategy(),
            cars in num_cars_strategy(),
        ) {
            let breakdown = compute(cars, Coverages::none(), &rates);

            let basic = rates.basic_rate.amount();
            let n = Decimal::from(cars);
            let expected_premium = basic * n - (n - Decimal::ONE) * basic * rates.discount_rate;
            let tax = rates.hst_rate / Decimal::ONE_HUNDRED;

            prop_assert_eq!(breakdown.total_premium.amount(), expected_premium);
            prop_assert_eq!(breakdown.hst_amount.amount(), breakdown.subtotal.amount() * tax);
            prop_assert_eq!(
                breakdown.total_cost.amount(),
                expected_premium * (Decimal::ONE + tax)
            );
        }

        #[test]
        fn prop_premium_never_exceeds_undiscounted(
            rates in rate_parameters_strategy(),
            cars in num_cars_strategy(),
        ) {
            let breakdown = compute(cars, Coverages::none(), &rates);
            prop_assert!(breakdown.total_premium <= rates.basic_rate * Decimal::from(cars));
            prop_assert!(!breakdown.total_premium.is_negative());
        }
    }
}
