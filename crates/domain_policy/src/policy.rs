//! Policy records and submissions
//!
//! A `PolicySubmission` is what the input collaborator hands over: customer
//! details, the car count, coverage selections and payment method. Issuing
//! it assigns a policy number and invoice date and freezes the priced total
//! into an immutable `PolicyRecord`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use core_kernel::{Money, PolicyNumber};
use crate::error::PolicyError;
use crate::premium::{Coverages, PremiumBreakdown};

/// Text that cannot appear inside a stored field
pub const FIELD_DELIMITER: &str = ", ";

/// Canadian province and territory codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    NL,
    PE,
    NS,
    NB,
    QC,
    ON,
    MB,
    SK,
    AB,
    BC,
    YT,
    NT,
    NU,
}

impl Province {
    /// Every accepted code, in the order offered to the operator
    pub const ALL: [Province; 13] = [
        Province::NL,
        Province::PE,
        Province::NS,
        Province::NB,
        Province::QC,
        Province::ON,
        Province::MB,
        Province::SK,
        Province::AB,
        Province::BC,
        Province::YT,
        Province::NT,
        Province::NU,
    ];

    /// Two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Province::NL => "NL",
            Province::PE => "PE",
            Province::NS => "NS",
            Province::NB => "NB",
            Province::QC => "QC",
            Province::ON => "ON",
            Province::MB => "MB",
            Province::SK => "SK",
            Province::AB => "AB",
            Province::BC => "BC",
            Province::YT => "YT",
            Province::NT => "NT",
            Province::NU => "NU",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Province {
    type Err = PolicyError;

    /// Exact, upper-case codes only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| PolicyError::validation(format!("unknown province code '{s}'")))
    }
}

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Full,
    Monthly,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Full => "FULL",
            PaymentMethod::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULL" => Ok(PaymentMethod::Full),
            "MONTHLY" => Ok(PaymentMethod::Monthly),
            other => Err(PolicyError::validation(format!("unknown payment method '{other}'"))),
        }
    }
}

/// Stored form of a coverage flag
pub fn flag_code(selected: bool) -> &'static str {
    if selected {
        "Y"
    } else {
        "N"
    }
}

/// Parses a stored coverage flag; only `Y` and `N` are accepted
pub fn parse_flag(text: &str) -> Result<bool, PolicyError> {
    match text {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(PolicyError::validation(format!("expected Y or N, found '{other}'"))),
    }
}

/// Customer details as captured at the counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1, max = 60))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60))]
    pub last_name: String,
    #[validate(length(min = 1, max = 120))]
    pub address: String,
    #[validate(length(min = 1, max = 60))]
    pub city: String,
    pub province: Province,
    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 20))]
    pub phone_number: String,
}

impl Customer {
    fn text_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("phone_number", &self.phone_number),
        ]
    }

    /// Checks lengths and rejects text the ledger line layout cannot hold
    pub fn check(&self) -> Result<(), PolicyError> {
        self.validate()?;
        for (name, value) in self.text_fields() {
            if value.contains(FIELD_DELIMITER) || value.contains(['\n', '\r']) {
                return Err(PolicyError::validation(format!(
                    "{name} must not contain a comma followed by a space or a line break"
                )));
            }
        }
        Ok(())
    }
}

/// One validated policy request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PolicySubmission {
    #[validate(nested)]
    pub customer: Customer,
    #[validate(range(min = 1))]
    pub num_cars: u32,
    pub coverages: Coverages,
    pub payment_method: PaymentMethod,
}

impl PolicySubmission {
    /// Validates the submission, including the customer block
    pub fn check(&self) -> Result<(), PolicyError> {
        self.validate()?;
        self.customer.check()
    }
}

/// An issued policy, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_number: PolicyNumber,
    pub invoice_date: NaiveDate,
    pub customer: Customer,
    pub num_cars: u32,
    pub coverages: Coverages,
    pub payment_method: PaymentMethod,
    /// Final amount, frozen at issuance
    pub total_cost: Money,
    /// Priced components; `None` for ledger lines written without them
    pub breakdown: Option<PremiumBreakdown>,
}

impl PolicyRecord {
    /// Issues a submission under the given number and date
    pub fn issue(
        policy_number: PolicyNumber,
        invoice_date: NaiveDate,
        submission: PolicySubmission,
        breakdown: PremiumBreakdown,
    ) -> Self {
        Self {
            policy_number,
            invoice_date,
            customer: submission.customer,
            num_cars: submission.num_cars,
            coverages: submission.coverages,
            payment_method: submission.payment_method,
            total_cost: breakdown.total_cost,
            breakdown: Some(breakdown),
        }
    }
}
