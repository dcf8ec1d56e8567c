//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_policy::{PolicyRecord, PremiumBreakdown};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that two amounts agree once both are rounded to cents
pub fn assert_money_eq_cents(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.round_to_currency(),
        expected.round_to_currency(),
        "Money amounts differ at cent precision: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts the internal consistency of a breakdown
///
/// subtotal = premium + extras and total = subtotal + tax
pub fn assert_breakdown_consistent(breakdown: &PremiumBreakdown) {
    assert_eq!(
        breakdown.subtotal,
        breakdown.total_premium + breakdown.extra_costs,
        "subtotal must equal premium plus extras: {:?}",
        breakdown
    );
    assert_eq!(
        breakdown.total_cost,
        breakdown.subtotal + breakdown.hst_amount,
        "total must equal subtotal plus tax: {:?}",
        breakdown
    );
}

/// Asserts that a replayed record matches the one appended
///
/// Every scalar field must match exactly; amounts are compared at cent
/// precision since the ledger stores two fraction digits.
pub fn assert_record_replayed(replayed: &PolicyRecord, appended: &PolicyRecord) {
    assert_eq!(replayed.policy_number, appended.policy_number, "policy number");
    assert_eq!(replayed.invoice_date, appended.invoice_date, "invoice date");
    assert_eq!(replayed.customer, appended.customer, "customer");
    assert_eq!(replayed.num_cars, appended.num_cars, "number of cars");
    assert_eq!(replayed.coverages, appended.coverages, "coverages");
    assert_eq!(replayed.payment_method, appended.payment_method, "payment method");
    assert_money_eq_cents(&replayed.total_cost, &appended.total_cost);
    assert_eq!(
        replayed.breakdown.map(|b| b.rounded()),
        appended.breakdown.map(|b| b.rounded()),
        "breakdown"
    );
}
