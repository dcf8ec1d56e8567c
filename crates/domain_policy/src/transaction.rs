//! Issuance transaction
//!
//! Writing a policy touches two stores: the ledger gets the record, then the
//! rate parameters get the advanced sequence number. The two writes are not
//! atomic with respect to each other. The ordering below bounds a crash to
//! "ledger has the record, counter was not advanced", and
//! [`reconcile_sequence`] repairs exactly that case on the next load.

use crate::error::PolicyError;
use crate::policy::PolicyRecord;
use crate::ports::{PolicyLedger, RateStore};
use crate::rates::RateParameters;

/// Append-then-save over a ledger and a rate store
pub struct IssuanceTransaction<'a> {
    ledger: &'a mut dyn PolicyLedger,
    rate_store: &'a mut dyn RateStore,
}

impl<'a> IssuanceTransaction<'a> {
    pub fn new(ledger: &'a mut dyn PolicyLedger, rate_store: &'a mut dyn RateStore) -> Self {
        Self { ledger, rate_store }
    }

    /// Commits a record issued under `rates.next_policy_number`
    ///
    /// # Returns
    ///
    /// The advanced rate parameters, already persisted
    ///
    /// # Errors
    ///
    /// - `Validation` if the record does not carry the expected number, or
    ///   the sequence has no number left to advance to
    /// - Any port error from the append; the rate store is then untouched
    /// - Any port error from the save; the record is already in the ledger
    pub fn commit(
        &mut self,
        record: &PolicyRecord,
        rates: &RateParameters,
    ) -> Result<RateParameters, PolicyError> {
        if record.policy_number != rates.next_policy_number {
            return Err(PolicyError::validation(format!(
                "record carries policy number {} but the sequence is at {}",
                record.policy_number, rates.next_policy_number
            )));
        }

        let advanced = rates.advance()?;
        self.ledger.append(record)?;
        self.rate_store.save(&advanced)?;

        tracing::info!(
            policy_number = %record.policy_number,
            next_policy_number = %advanced.next_policy_number,
            "policy committed"
        );
        Ok(advanced)
    }
}

/// Raises the sequence past the highest number already in the ledger
///
/// Returns `rates` unchanged when the stored counter is already ahead.
pub fn reconcile_sequence(
    rates: RateParameters,
    ledger: &dyn PolicyLedger,
) -> Result<RateParameters, PolicyError> {
    let mut highest = None;
    for record in ledger.replay_all()? {
        let number = record?.policy_number;
        if highest.map_or(true, |h| number > h) {
            highest = Some(number);
        }
    }

    match highest {
        Some(highest) if highest >= rates.next_policy_number => {
            let next = highest.next()?;
            tracing::warn!(
                stored = %rates.next_policy_number,
                corrected = %next,
                "sequence counter behind ledger, advancing"
            );
            Ok(RateParameters {
                next_policy_number: next,
                ..rates
            })
        }
        _ => Ok(rates),
    }
}
