//! In-Memory Port Adapters
//!
//! Implementations of every domain port backed by plain collections, with
//! switches for injecting failures.

use std::collections::VecDeque;

use chrono::NaiveDate;
use domain_policy::{
    InvoiceCalendar, PolicyLedger, PolicyRecord, PolicySubmission, PortError, ProgressIndicator,
    RateParameters, RateStore, Receipt, ReceiptSink, Replay, SubmissionSource,
};

fn io_failure(source_name: &str) -> PortError {
    PortError::Io {
        source_name: source_name.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "injected failure"),
    }
}

/// Ledger entry, either a record or a line that fails to parse
#[derive(Debug, Clone)]
enum Entry {
    Record(PolicyRecord),
    Corrupt(String),
}

/// Ledger kept in a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    entries: Vec<Entry>,
    fail_appends: bool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-populated with records
    pub fn with_records(records: impl IntoIterator<Item = PolicyRecord>) -> Self {
        Self {
            entries: records.into_iter().map(Entry::Record).collect(),
            fail_appends: false,
        }
    }

    /// Adds an entry that fails replay with the given message
    pub fn push_corrupt(&mut self, message: impl Into<String>) {
        self.entries.push(Entry::Corrupt(message.into()));
    }

    /// Makes every later append fail
    pub fn fail_appends(&mut self) {
        self.fail_appends = true;
    }

    /// Records appended so far, skipping corrupt entries
    pub fn records(&self) -> Vec<PolicyRecord> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Record(r) => Some(r.clone()),
                Entry::Corrupt(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PolicyLedger for InMemoryLedger {
    fn append(&mut self, record: &PolicyRecord) -> Result<(), PortError> {
        if self.fail_appends {
            return Err(io_failure("memory ledger"));
        }
        self.entries.push(Entry::Record(record.clone()));
        Ok(())
    }

    fn replay_all(&self) -> Result<Replay<'_>, PortError> {
        Ok(Box::new(self.entries.iter().enumerate().map(|(i, entry)| {
            match entry {
                Entry::Record(record) => Ok(record.clone()),
                Entry::Corrupt(message) => Err(PortError::DataCorruption {
                    source_name: "memory ledger".to_string(),
                    line: i + 1,
                    message: message.clone(),
                }),
            }
        })))
    }
}

/// Rate store holding one value and a history of saves
#[derive(Debug, Clone)]
pub struct InMemoryRateStore {
    current: RateParameters,
    saves: Vec<RateParameters>,
    fail_saves: bool,
}

impl InMemoryRateStore {
    pub fn new(initial: RateParameters) -> Self {
        Self {
            current: initial,
            saves: Vec::new(),
            fail_saves: false,
        }
    }

    /// Makes every later save fail
    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }

    /// Every value saved, in order
    pub fn saves(&self) -> &[RateParameters] {
        &self.saves
    }

    pub fn current(&self) -> &RateParameters {
        &self.current
    }
}

impl RateStore for InMemoryRateStore {
    fn load(&self) -> Result<RateParameters, PortError> {
        Ok(self.current.clone())
    }

    fn save(&mut self, params: &RateParameters) -> Result<(), PortError> {
        if self.fail_saves {
            return Err(io_failure("memory rate store"));
        }
        self.current = params.clone();
        self.saves.push(params.clone());
        Ok(())
    }
}

/// Submission source that plays back a fixed list
///
/// Answers "another?" with yes while submissions remain.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSubmissionSource {
    pending: VecDeque<PolicySubmission>,
}

impl ScriptedSubmissionSource {
    pub fn new(submissions: impl IntoIterator<Item = PolicySubmission>) -> Self {
        Self {
            pending: submissions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl SubmissionSource for ScriptedSubmissionSource {
    fn next_submission(&mut self) -> Result<PolicySubmission, PortError> {
        self.pending
            .pop_front()
            .ok_or_else(|| PortError::Input("script exhausted".to_string()))
    }

    fn wants_another(&mut self) -> Result<bool, PortError> {
        Ok(!self.pending.is_empty())
    }
}

/// Receipt sink that keeps everything it is given
#[derive(Debug, Clone, Default)]
pub struct RecordingReceiptSink {
    pub receipts: Vec<Receipt>,
    /// Index into `receipts` where the batch reprint began
    pub reprint_started_at: Option<usize>,
}

impl RecordingReceiptSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receipts rendered during the session loop
    pub fn issued(&self) -> &[Receipt] {
        let end = self.reprint_started_at.unwrap_or(self.receipts.len());
        &self.receipts[..end]
    }

    /// Receipts rendered by the batch reprint
    pub fn reprinted(&self) -> &[Receipt] {
        match self.reprint_started_at {
            Some(start) => &self.receipts[start..],
            None => &[],
        }
    }
}

impl ReceiptSink for RecordingReceiptSink {
    fn render(&mut self, receipt: &Receipt) -> Result<(), PortError> {
        self.receipts.push(receipt.clone());
        Ok(())
    }

    fn begin_reprint(&mut self) -> Result<(), PortError> {
        self.reprint_started_at = Some(self.receipts.len());
        Ok(())
    }
}

/// Progress indicator that counts how often it was shown
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingProgress {
    pub shown: usize,
}

impl ProgressIndicator for CountingProgress {
    fn show(&mut self) {
        self.shown += 1;
    }
}

/// Calendar pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar(pub NaiveDate);

impl InvoiceCalendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
