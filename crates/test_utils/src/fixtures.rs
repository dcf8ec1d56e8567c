//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the premium system.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Money, PolicyNumber};
use domain_policy::{Customer, Province, RateParameters};
use rust_decimal_macros::dec;

/// Fixture for rate parameter test data
pub struct RateFixtures;

impl RateFixtures {
    /// Round-number rates used in the worked pricing examples
    ///
    /// basic 100.00, discount 0.10, liability 20.00, glass 15.00,
    /// loaner 10.00, HST 13%, processing fee 5.00, next policy 1944
    pub fn standard() -> RateParameters {
        RateParameters {
            next_policy_number: Self::first_policy_number(),
            basic_rate: Money::new(dec!(100.00)),
            discount_rate: dec!(0.10),
            liability_cost: Money::new(dec!(20.00)),
            glass_cost: Money::new(dec!(15.00)),
            loaner_car_cost: Money::new(dec!(10.00)),
            hst_rate: dec!(13.00),
            processing_fee: Money::new(dec!(5.00)),
        }
    }

    /// Production-like rates with non-round amounts
    pub fn office() -> RateParameters {
        RateParameters {
            next_policy_number: Self::first_policy_number(),
            basic_rate: Money::new(dec!(869.00)),
            discount_rate: dec!(0.25),
            liability_cost: Money::new(dec!(130.00)),
            glass_cost: Money::new(dec!(86.00)),
            loaner_car_cost: Money::new(dec!(58.00)),
            hst_rate: dec!(15.00),
            processing_fee: Money::new(dec!(39.99)),
        }
    }

    /// Rates with no tax, for isolating premium arithmetic
    pub fn tax_free() -> RateParameters {
        RateParameters {
            hst_rate: dec!(0),
            ..Self::standard()
        }
    }

    pub fn first_policy_number() -> PolicyNumber {
        PolicyNumber::new(1944).unwrap()
    }
}

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A Newfoundland customer
    pub fn newfoundland() -> Customer {
        Customer {
            first_name: "Janet".to_string(),
            last_name: "Pike".to_string(),
            address: "12 Water Street".to_string(),
            city: "St. John's".to_string(),
            province: Province::NL,
            postal_code: "A1C1A1".to_string(),
            phone_number: "7095551234".to_string(),
        }
    }

    /// An Ontario customer
    pub fn ontario() -> Customer {
        Customer {
            first_name: "Omar".to_string(),
            last_name: "Haddad".to_string(),
            address: "400 King Street West".to_string(),
            city: "Toronto".to_string(),
            province: Province::ON,
            postal_code: "M5V1K4".to_string(),
            phone_number: "4165550199".to_string(),
        }
    }
}

/// Fixture for calendar test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard invoice date
    pub fn invoice_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 26).unwrap()
    }

    /// Invoice date in December, for year rollover
    pub fn december_invoice_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 14).unwrap()
    }
}
