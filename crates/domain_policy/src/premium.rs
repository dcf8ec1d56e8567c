//! Premium calculations
//!
//! This module prices a policy from the number of cars, the optional
//! coverages selected, and the current rate parameters.
//!
//! # Algorithm
//!
//! ```text
//! basic premium = basic_rate * cars - (cars - 1) * basic_rate * discount_rate
//! extra costs   = cars * (liability? + glass? + loaner?)
//! subtotal      = basic premium + extra costs
//! hst           = subtotal * hst_rate / 100
//! total cost    = subtotal + hst
//! ```
//!
//! No rounding happens here. Amounts are rounded to cents only when they
//! are displayed or written to disk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::rates::RateParameters;

/// Optional coverages, each independently selectable and priced per car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coverages {
    pub extra_liability: bool,
    pub glass: bool,
    pub loaner_car: bool,
}

impl Coverages {
    /// No optional coverage
    pub fn none() -> Self {
        Self::default()
    }

    /// Every optional coverage
    pub fn all() -> Self {
        Self {
            extra_liability: true,
            glass: true,
            loaner_car: true,
        }
    }

    /// Per-car cost of the selected coverages
    pub fn unit_cost(&self, rates: &RateParameters) -> Money {
        [
            (self.extra_liability, rates.liability_cost),
            (self.glass, rates.glass_cost),
            (self.loaner_car, rates.loaner_car_cost),
        ]
        .into_iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, cost)| cost)
        .sum()
    }
}

/// Result of pricing one policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Basic premium after the multi-car discount
    pub total_premium: Money,
    /// Sum of the optional coverage charges
    pub extra_costs: Money,
    /// Basic premium plus extra costs
    pub subtotal: Money,
    /// Sales tax on the subtotal
    pub hst_amount: Money,
    /// Subtotal plus sales tax
    pub total_cost: Money,
}

impl PremiumBreakdown {
    /// Rebuilds a breakdown from a frozen total when the components were never stored
    ///
    /// The premium line becomes `total_cost - processing_fee`, extras are
    /// zero and the tax line absorbs the difference. The result is only a
    /// display approximation; it does not match the breakdown priced at
    /// issuance.
    pub fn approximate(total_cost: Money, processing_fee: Money) -> Self {
        let total_premium = total_cost - processing_fee;
        Self {
            total_premium,
            extra_costs: Money::zero(),
            subtotal: total_premium,
            hst_amount: total_cost - total_premium,
            total_cost,
        }
    }

    /// Copy of this breakdown with every component rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            total_premium: self.total_premium.round_to_currency(),
            extra_costs: self.extra_costs.round_to_currency(),
            subtotal: self.subtotal.round_to_currency(),
            hst_amount: self.hst_amount.round_to_currency(),
            total_cost: self.total_cost.round_to_currency(),
        }
    }
}

/// Where a breakdown shown on a receipt came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakdownSource {
    /// Priced in this run or read back from a full ledger line
    Recorded,
    /// Reconstructed from the total of a legacy ledger line
    Approximated,
}

/// Prices a policy
///
/// # Arguments
///
/// * `num_cars` - Number of cars insured, at least one
/// * `coverages` - Optional coverages selected
/// * `rates` - Current rate parameters
///
/// The calculator performs no validation. Callers supply a positive car
/// count and non-negative rates.
pub fn compute(num_cars: u32, coverages: Coverages, rates: &RateParameters) -> PremiumBreakdown {
    let cars = Decimal::from(num_cars);

    let mut total_premium = rates.basic_rate * cars;
    if num_cars > 1 {
        let additional = Decimal::from(num_cars - 1);
        total_premium = total_premium - rates.basic_rate * (additional * rates.discount_rate);
    }

    let extra_costs = coverages.unit_cost(rates) * cars;
    let subtotal = total_premium + extra_costs;
    let hst_amount = rates.hst().apply(&subtotal);
    let total_cost = subtotal + hst_amount;

    tracing::debug!(
        num_cars,
        total_premium = %total_premium.amount(),
        extra_costs = %extra_costs.amount(),
        subtotal = %subtotal.amount(),
        total_cost = %total_cost.amount(),
        "priced policy"
    );

    PremiumBreakdown {
        total_premium,
        extra_costs,
        subtotal,
        hst_amount,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PolicyNumber;
    use rust_decimal_macros::dec;

    fn rates() -> RateParameters {
        RateParameters {
            next_policy_number: PolicyNumber::new(1).unwrap(),
            basic_rate: Money::new(dec!(100.00)),
            discount_rate: dec!(0.10),
            liability_cost: Money::new(dec!(20.00)),
            glass_cost: Money::new(dec!(15.00)),
            loaner_car_cost: Money::new(dec!(10.00)),
            hst_rate: dec!(13.00),
            processing_fee: Money::new(dec!(5.00)),
        }
    }

    #[test]
    fn test_two_cars_all_coverages() {
        let breakdown = compute(2, Coverages::all(), &rates());

        assert_eq!(breakdown.total_premium.amount(), dec!(190));
        assert_eq!(breakdown.extra_costs.amount(), dec!(90));
        assert_eq!(breakdown.subtotal.amount(), dec!(280));
        assert_eq!(breakdown.hst_amount.amount(), dec!(36.40));
        assert_eq!(breakdown.total_cost.amount(), dec!(316.40));
    }

    #[test]
    fn test_single_car_no_coverage() {
        let breakdown = compute(1, Coverages::none(), &rates());

        assert_eq!(breakdown.total_premium.amount(), dec!(100));
        assert_eq!(breakdown.subtotal.amount(), dec!(100));
        assert_eq!(breakdown.total_cost.amount(), dec!(113.00));
    }

    #[test]
    fn test_approximate_keeps_total() {
        let approx = PremiumBreakdown::approximate(Money::new(dec!(316.40)), Money::new(dec!(5)));

        assert_eq!(approx.total_premium.amount(), dec!(311.40));
        assert_eq!(approx.total_cost.amount(), dec!(316.40));
        assert_eq!(approx.subtotal + approx.hst_amount, approx.total_cost);
    }
}
