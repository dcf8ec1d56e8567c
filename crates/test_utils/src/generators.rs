//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Money, PolicyNumber};
use domain_policy::{Coverages, PaymentMethod, Province, RateParameters};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating non-negative amounts up to 10,000.00
pub fn unit_cost_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating discount fractions (0.00 to 1.00)
pub fn discount_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating tax percentages (0.00% to 100.00%)
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating car counts
pub fn num_cars_strategy() -> impl Strategy<Value = u32> {
    1u32..50u32
}

/// Strategy for generating coverage selections
pub fn coverages_strategy() -> impl Strategy<Value = Coverages> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(extra_liability, glass, loaner_car)| {
        Coverages {
            extra_liability,
            glass,
            loaner_car,
        }
    })
}

/// Strategy for generating provinces
pub fn province_strategy() -> impl Strategy<Value = Province> {
    proptest::sample::select(Province::ALL.to_vec())
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![Just(PaymentMethod::Full), Just(PaymentMethod::Monthly)]
}

/// Strategy for generating valid rate parameters
pub fn rate_parameters_strategy() -> impl Strategy<Value = RateParameters> {
    (
        1u64..100_000u64,
        unit_cost_strategy(),
        discount_rate_strategy(),
        unit_cost_strategy(),
        unit_cost_strategy(),
        unit_cost_strategy(),
        percentage_strategy(),
        unit_cost_strategy(),
    )
        .prop_map(
            |(next, basic, discount, liability, glass, loaner, hst, fee)| RateParameters {
                next_policy_number: PolicyNumber::new(next).unwrap(),
                basic_rate: basic,
                discount_rate: discount,
                liability_cost: liability,
                glass_cost: glass,
                loaner_car_cost: loaner,
                hst_rate: hst,
                processing_fee: fee,
            },
        )
}
