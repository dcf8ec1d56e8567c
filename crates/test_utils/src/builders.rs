//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::PolicyNumber;
use domain_policy::{
    compute, Coverages, Customer, PaymentMethod, PolicyRecord, PolicySubmission, Province,
    RateParameters,
};
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use crate::fixtures::{CustomerFixtures, DateFixtures, RateFixtures};

/// Builder for constructing policy submissions
#[derive(Debug, Clone)]
pub struct PolicySubmissionBuilder {
    customer: Customer,
    num_cars: u32,
    coverages: Coverages,
    payment_method: PaymentMethod,
}

impl Default for PolicySubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicySubmissionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            customer: CustomerFixtures::newfoundland(),
            num_cars: 1,
            coverages: Coverages::none(),
            payment_method: PaymentMethod::Full,
        }
    }

    /// Replaces the customer with randomly generated names and address
    pub fn with_random_customer(mut self) -> Self {
        let number: u16 = (1..999).fake();
        let street: String = StreetName().fake();
        self.customer = Customer {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            address: format!("{number} {street}"),
            city: CityName().fake(),
            province: Province::NS,
            postal_code: "B3H4R2".to_string(),
            phone_number: "9025550123".to_string(),
        };
        self
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    /// Sets the number of cars
    pub fn with_num_cars(mut self, num_cars: u32) -> Self {
        self.num_cars = num_cars;
        self
    }

    /// Sets the coverages
    pub fn with_coverages(mut self, coverages: Coverages) -> Self {
        self.coverages = coverages;
        self
    }

    /// Sets the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Builds the submission
    pub fn build(self) -> PolicySubmission {
        PolicySubmission {
            customer: self.customer,
            num_cars: self.num_cars,
            coverages: self.coverages,
            payment_method: self.payment_method,
        }
    }
}

/// Builder for constructing issued policy records
#[derive(Debug, Clone)]
pub struct PolicyRecordBuilder {
    policy_number: PolicyNumber,
    invoice_date: NaiveDate,
    submission: PolicySubmissionBuilder,
    rates: RateParameters,
    legacy: bool,
}

impl Default for PolicyRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyRecordBuilder {
    /// Creates a new builder priced with the standard rates
    pub fn new() -> Self {
        Self {
            policy_number: RateFixtures::first_policy_number(),
            invoice_date: DateFixtures::invoice_date(),
            submission: PolicySubmissionBuilder::new(),
            rates: RateFixtures::standard(),
            legacy: false,
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: u64) -> Self {
        self.policy_number = PolicyNumber::new(number).unwrap();
        self
    }

    /// Sets the invoice date
    pub fn with_invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = date;
        self
    }

    /// Sets the submission the record is issued from
    pub fn with_submission(mut self, submission: PolicySubmissionBuilder) -> Self {
        self.submission = submission;
        self
    }

    /// Sets the rates used for pricing
    pub fn with_rates(mut self, rates: RateParameters) -> Self {
        self.rates = rates;
        self
    }

    /// Drops the stored breakdown, as for a line written by the old layout
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }

    /// Builds the record
    pub fn build(self) -> PolicyRecord {
        let submission = self.submission.build();
        let breakdown = compute(submission.num_cars, submission.coverages, &self.rates);
        let mut record =
            PolicyRecord::issue(self.policy_number, self.invoice_date, submission, breakdown);
        if self.legacy {
            record.breakdown = None;
            record.total_cost = record.total_cost.round_to_currency();
        }
        record
    }

    /// Builds the record with every amount rounded to cents, as replay returns it
    pub fn build_rounded(self) -> PolicyRecord {
        let mut record = self.build();
        record.total_cost = record.total_cost.round_to_currency();
        record.breakdown = record.breakdown.map(|b| b.rounded());
        record
    }
}

