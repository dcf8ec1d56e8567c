//! The pair of files that make up one installation's data

use std::path::{Path, PathBuf};

use domain_policy::{reconcile_sequence, PolicyError, RateParameters, RateStore};

use crate::ledger_file::PolicyLedgerFile;
use crate::rate_file::RateParametersFile;

/// Defaults file and policy ledger living in one directory
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    rates: RateParametersFile,
    ledger: PolicyLedgerFile,
}

impl FlatFileStore {
    /// Points at `dir/defaults_name` and `dir/policies_name`
    ///
    /// Nothing is touched on disk until the first read or write.
    pub fn open(dir: impl AsRef<Path>, defaults_name: &str, policies_name: &str) -> Self {
        let dir = dir.as_ref();
        Self::from_paths(dir.join(defaults_name), dir.join(policies_name))
    }

    pub fn from_paths(defaults: impl Into<PathBuf>, policies: impl Into<PathBuf>) -> Self {
        Self {
            rates: RateParametersFile::new(defaults),
            ledger: PolicyLedgerFile::new(policies),
        }
    }

    /// Loads the rate parameters and lifts the sequence past the ledger
    ///
    /// The corrected counter is only held in memory; it reaches disk with
    /// the next issued policy.
    ///
    /// # Errors
    ///
    /// - `Port(Format)` or `Port(Io)` if the defaults file is unusable
    /// - `Port(DataCorruption)` if a ledger line is malformed
    pub fn load_reconciled(&self) -> Result<RateParameters, PolicyError> {
        let stored = self.rates.load()?;
        let rates = reconcile_sequence(stored, &self.ledger)?;

        tracing::debug!(
            defaults = %self.rates.path().display(),
            policies = %self.ledger.path().display(),
            next_policy_number = %rates.next_policy_number,
            "store opened"
        );
        Ok(rates)
    }

    pub fn rates(&self) -> &RateParametersFile {
        &self.rates
    }

    pub fn ledger(&self) -> &PolicyLedgerFile {
        &self.ledger
    }

    pub fn rates_mut(&mut self) -> &mut RateParametersFile {
        &mut self.rates
    }

    pub fn ledger_mut(&mut self) -> &mut PolicyLedgerFile {
        &mut self.ledger
    }

    /// Both halves at once, for handing to the workflow
    pub fn parts_mut(&mut self) -> (&mut PolicyLedgerFile, &mut RateParametersFile) {
        (&mut self.ledger, &mut self.rates)
    }
}
