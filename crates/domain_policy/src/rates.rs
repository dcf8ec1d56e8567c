//! Rate parameters
//!
//! The shared pricing configuration: unit rates and costs, the sales tax
//! percentage, the monthly processing fee, and the next policy number to
//! hand out. A single value is loaded at startup and passed by reference to
//! everything that prices or issues a policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PolicyNumber, Rate};
use crate::error::PolicyError;

/// Largest amount accepted for any unit rate, cost or fee
///
/// Keeps every premium computation within `Decimal` range for any car count.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Pricing constants and the policy number sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateParameters {
    /// Number assigned to the next policy written
    pub next_policy_number: PolicyNumber,
    /// Base premium per car
    pub basic_rate: Money,
    /// Fraction of the basic rate discounted per additional car (e.g. 0.25)
    pub discount_rate: Decimal,
    /// Extra liability coverage per car
    pub liability_cost: Money,
    /// Glass coverage per car
    pub glass_cost: Money,
    /// Loaner car coverage per car
    pub loaner_car_cost: Money,
    /// Sales tax on a 0-100 scale
    pub hst_rate: Decimal,
    /// Fee added when paying monthly
    pub processing_fee: Money,
}

impl RateParameters {
    /// Returns the sales tax as a rate
    pub fn hst(&self) -> Rate {
        Rate::from_percentage(self.hst_rate)
    }

    /// Returns a copy with the sequence advanced by exactly one
    ///
    /// Every other field passes through unchanged. Fails once the sequence
    /// has no numbers left.
    pub fn advance(&self) -> Result<Self, PolicyError> {
        Ok(Self {
            next_policy_number: self.next_policy_number.next()?,
            ..self.clone()
        })
    }

    /// Rejects amounts outside 0 to `MAX_AMOUNT`, a discount outside 0-1
    /// and a tax rate outside 0-100
    pub fn validate(&self) -> Result<(), PolicyError> {
        let amounts = [
            ("basic_rate", self.basic_rate),
            ("liability_cost", self.liability_cost),
            ("glass_cost", self.glass_cost),
            ("loaner_car_cost", self.loaner_car_cost),
            ("processing_fee", self.processing_fee),
        ];
        for (name, amount) in amounts {
            if amount.is_negative() {
                return Err(PolicyError::validation(format!("{name} must not be negative")));
            }
            if amount.amount() > MAX_AMOUNT {
                return Err(PolicyError::validation(format!(
                    "{name} must not exceed {MAX_AMOUNT}"
                )));
            }
        }
        if self.discount_rate < Decimal::ZERO || self.discount_rate > Decimal::ONE {
            return Err(PolicyError::validation("discount_rate must be between 0 and 1"));
        }
        if self.hst_rate < Decimal::ZERO || self.hst_rate > Decimal::ONE_HUNDRED {
            return Err(PolicyError::validation("hst_rate must be between 0 and 100"));
        }
        Ok(())
    }
}
