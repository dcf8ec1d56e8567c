//! Policy Domain Ports
//!
//! The workflow talks to persistence and to the operator only through the
//! traits in this module. Flat-file adapters live in `infra_store`, console
//! adapters in `interface_cli`, and in-memory adapters in `test_utils`.
//!
//! ```text
//!             PolicyWorkflow
//!   ┌──────────┬─────┴─────┬─────────────┐
//!   ▼          ▼           ▼             ▼
//! RateStore  PolicyLedger  SubmissionSource  ReceiptSink
//! ```

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::Timezone;
use crate::policy::{PolicyRecord, PolicySubmission};
use crate::rates::RateParameters;
use crate::receipt::Receipt;

/// Error type for port operations
///
/// Adapters map their own failures onto these variants so the workflow can
/// report them without knowing which adapter is plugged in.
#[derive(Debug, Error)]
pub enum PortError {
    /// The rate parameters could not be parsed
    #[error("Malformed rate parameters in {source_name}: {message}")]
    Format {
        source_name: String,
        message: String,
    },

    /// A ledger line could not be parsed
    #[error("Corrupt ledger {source_name} at line {line}: {message}")]
    DataCorruption {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Reading or writing the underlying medium failed
    #[error("I/O error on {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The input collaborator could not supply a submission
    #[error("Input error: {0}")]
    Input(String),

    /// The receipt collaborator could not render
    #[error("Render error: {0}")]
    Render(String),
}

/// Lazy sequence of replayed records, in append order
pub type Replay<'a> = Box<dyn Iterator<Item = Result<PolicyRecord, PortError>> + 'a>;

/// Persisted rate parameters
pub trait RateStore {
    /// Loads the single authoritative copy
    fn load(&self) -> Result<RateParameters, PortError>;

    /// Replaces the stored copy entirely
    fn save(&mut self, params: &RateParameters) -> Result<(), PortError>;
}

/// Append-only sequence of issued policies
pub trait PolicyLedger {
    /// Adds a record after every existing one
    fn append(&mut self, record: &PolicyRecord) -> Result<(), PortError>;

    /// Replays every record from the start
    ///
    /// Each call starts a fresh pass. The first malformed entry yields an
    /// error and callers stop there.
    fn replay_all(&self) -> Result<Replay<'_>, PortError>;
}

/// Supplier of already-validated policy submissions
pub trait SubmissionSource {
    /// Obtains the next submission
    fn next_submission(&mut self) -> Result<PolicySubmission, PortError>;

    /// Asks whether another policy will be entered
    fn wants_another(&mut self) -> Result<bool, PortError>;
}

/// Destination for rendered receipts
pub trait ReceiptSink {
    /// Renders one receipt
    fn render(&mut self, receipt: &Receipt) -> Result<(), PortError>;

    /// Called once before the batch reprint starts
    fn begin_reprint(&mut self) -> Result<(), PortError> {
        Ok(())
    }
}

/// Cosmetic pause shown after each receipt
pub trait ProgressIndicator {
    fn show(&mut self);
}

/// Progress indicator that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn show(&mut self) {}
}

/// Source of invoice dates
pub trait InvoiceCalendar {
    fn today(&self) -> NaiveDate;
}

impl InvoiceCalendar for Timezone {
    fn today(&self) -> NaiveDate {
        Timezone::today(self)
    }
}
