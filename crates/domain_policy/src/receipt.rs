//! Receipt view model
//!
//! Everything a receipt shows, computed once so renderers only lay out text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{first_of_next_month, Money, PolicyNumber, Rate};
use crate::policy::{Customer, PaymentMethod, PolicyRecord};
use crate::premium::{BreakdownSource, Coverages, PremiumBreakdown};
use crate::rates::RateParameters;

/// Number of instalments a monthly plan is split into
pub const MONTHLY_INSTALMENTS: u32 = 8;

/// Instalment terms shown for monthly payers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPlan {
    /// `(total_cost + processing_fee) / 8`
    pub payment: Money,
    /// First day of the month after the invoice date
    pub next_due: NaiveDate,
}

impl MonthlyPlan {
    pub fn new(total_cost: Money, processing_fee: Money, invoice_date: NaiveDate) -> Self {
        Self {
            payment: (total_cost + processing_fee) / Decimal::from(MONTHLY_INSTALMENTS),
            next_due: first_of_next_month(invoice_date),
        }
    }
}

/// A receipt ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub policy_number: PolicyNumber,
    pub invoice_date: NaiveDate,
    pub customer: Customer,
    pub num_cars: u32,
    pub coverages: Coverages,
    pub payment_method: PaymentMethod,
    pub breakdown: PremiumBreakdown,
    pub breakdown_source: BreakdownSource,
    /// Tax rate printed next to the HST line
    pub hst_rate: Rate,
    pub monthly_plan: Option<MonthlyPlan>,
}

impl Receipt {
    /// Builds the receipt for a record using the given rate snapshot
    ///
    /// Records without a stored breakdown get the approximated one. The
    /// tax rate label and processing fee always come from `rates`, so a
    /// reprint of an old policy shows today's rate.
    pub fn for_record(record: &PolicyRecord, rates: &RateParameters) -> Self {
        let (breakdown, breakdown_source) = match record.breakdown {
            Some(breakdown) => (breakdown, BreakdownSource::Recorded),
            None => {
                tracing::warn!(
                    policy_number = %record.policy_number,
                    "no stored breakdown, approximating from total cost"
                );
                (
                    PremiumBreakdown::approximate(record.total_cost, rates.processing_fee),
                    BreakdownSource::Approximated,
                )
            }
        };
        let monthly_plan = match record.payment_method {
            PaymentMethod::Monthly => Some(MonthlyPlan::new(
                record.total_cost,
                rates.processing_fee,
                record.invoice_date,
            )),
            PaymentMethod::Full => None,
        };

        Self {
            policy_number: record.policy_number,
            invoice_date: record.invoice_date,
            customer: record.customer.clone(),
            num_cars: record.num_cars,
            coverages: record.coverages,
            payment_method: record.payment_method,
            breakdown,
            breakdown_source,
            hst_rate: rates.hst(),
            monthly_plan,
        }
    }

    /// Customer name in title case
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            title_case(&self.customer.first_name),
            title_case(&self.customer.last_name)
        )
    }
}

/// Capitalizes each whitespace-separated word and lower-cases the rest
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
