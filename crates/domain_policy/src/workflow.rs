//! Policy workflow
//!
//! Drives one session at the counter:
//!
//! ```text
//! AwaitingInput -> Computing -> Persisting -> Reporting -> AwaitingInput
//!                                                     \-> Draining -> Finished
//! ```
//!
//! The rate parameters are loaded once by the caller and threaded through
//! every step. Only the sequence number changes during a session.

use std::fmt;

use core_kernel::PolicyNumber;
use crate::error::PolicyError;
use crate::policy::{PolicyRecord, PolicySubmission};
use crate::ports::{
    InvoiceCalendar, PolicyLedger, ProgressIndicator, RateStore, ReceiptSink, SubmissionSource,
};
use crate::premium::{compute, PremiumBreakdown};
use crate::rates::RateParameters;
use crate::receipt::Receipt;
use crate::transaction::IssuanceTransaction;

/// Workflow states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// Waiting for the operator to supply a policy
    AwaitingInput,
    /// Pricing a submission
    Computing { submission: PolicySubmission },
    /// Writing the priced policy
    Persisting {
        submission: PolicySubmission,
        breakdown: PremiumBreakdown,
    },
    /// Showing the receipt for a written policy
    Reporting { record: PolicyRecord },
    /// Reprinting every stored policy
    Draining,
    /// Session over
    Finished,
}

impl WorkflowState {
    fn name(&self) -> &'static str {
        match self {
            WorkflowState::AwaitingInput => "AwaitingInput",
            WorkflowState::Computing { .. } => "Computing",
            WorkflowState::Persisting { .. } => "Persisting",
            WorkflowState::Reporting { .. } => "Reporting",
            WorkflowState::Draining => "Draining",
            WorkflowState::Finished => "Finished",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collaborators the workflow drives
pub struct WorkflowPorts<'a> {
    pub ledger: &'a mut dyn PolicyLedger,
    pub rate_store: &'a mut dyn RateStore,
    pub input: &'a mut dyn SubmissionSource,
    pub receipts: &'a mut dyn ReceiptSink,
    pub progress: &'a mut dyn ProgressIndicator,
    pub calendar: &'a dyn InvoiceCalendar,
}

/// What a finished session did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    /// Numbers issued this session, in order
    pub issued: Vec<PolicyNumber>,
    /// Receipts rendered by the batch reprint
    pub reprinted: usize,
    /// Sequence value after the session
    pub next_policy_number: PolicyNumber,
}

/// The counter session state machine
pub struct PolicyWorkflow<'a> {
    rates: RateParameters,
    ports: WorkflowPorts<'a>,
    state: WorkflowState,
    reprint_on_exit: bool,
    issued: Vec<PolicyNumber>,
    reprinted: usize,
}

impl<'a> PolicyWorkflow<'a> {
    /// Creates a workflow over loaded rate parameters
    pub fn new(rates: RateParameters, ports: WorkflowPorts<'a>) -> Self {
        Self {
            rates,
            ports,
            state: WorkflowState::AwaitingInput,
            reprint_on_exit: true,
            issued: Vec::new(),
            reprinted: 0,
        }
    }

    /// Skips the batch reprint when `false`
    pub fn with_reprint_on_exit(mut self, reprint: bool) -> Self {
        self.reprint_on_exit = reprint;
        self
    }

    /// Current state
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Current rate parameters, including the advanced sequence
    pub fn rates(&self) -> &RateParameters {
        &self.rates
    }

    /// Runs until the session is finished
    ///
    /// # Errors
    ///
    /// Stops at the first error. Records and counters already written stay
    /// on disk.
    pub fn run(mut self) -> Result<WorkflowSummary, PolicyError> {
        while self.state != WorkflowState::Finished {
            self.step()?;
        }
        Ok(WorkflowSummary {
            issued: self.issued,
            reprinted: self.reprinted,
            next_policy_number: self.rates.next_policy_number,
        })
    }

    /// Performs one transition
    ///
    /// A failed step leaves the workflow `Finished`.
    pub fn step(&mut self) -> Result<(), PolicyError> {
        let state = std::mem::replace(&mut self.state, WorkflowState::Finished);
        self.state = match state {
            WorkflowState::AwaitingInput => {
                let submission = self.ports.input.next_submission()?;
                WorkflowState::Computing { submission }
            }
            WorkflowState::Computing { submission } => {
                submission.check()?;
                let breakdown = compute(submission.num_cars, submission.coverages, &self.rates);
                WorkflowState::Persisting {
                    submission,
                    breakdown,
                }
            }
            WorkflowState::Persisting {
                submission,
                breakdown,
            } => {
                let record = PolicyRecord::issue(
                    self.rates.next_policy_number,
                    self.ports.calendar.today(),
                    submission,
                    breakdown,
                );
                let advanced = IssuanceTransaction::new(
                    &mut *self.ports.ledger,
                    &mut *self.ports.rate_store,
                )
                .commit(&record, &self.rates)?;
                self.rates = advanced;
                self.issued.push(record.policy_number);
                WorkflowState::Reporting { record }
            }
            WorkflowState::Reporting { record } => {
                let receipt = Receipt::for_record(&record, &self.rates);
                self.ports.receipts.render(&receipt)?;
                self.ports.progress.show();
                if self.ports.input.wants_another()? {
                    WorkflowState::AwaitingInput
                } else if self.reprint_on_exit {
                    WorkflowState::Draining
                } else {
                    WorkflowState::Finished
                }
            }
            WorkflowState::Draining => {
                self.drain()?;
                WorkflowState::Finished
            }
            WorkflowState::Finished => {
                return Err(PolicyError::InvalidStateTransition {
                    from: WorkflowState::Finished.to_string(),
                    to: "any".to_string(),
                });
            }
        };
        Ok(())
    }

    fn drain(&mut self) -> Result<(), PolicyError> {
        self.ports.receipts.begin_reprint()?;
        for record in self.ports.ledger.replay_all()? {
            let receipt = Receipt::for_record(&record?, &self.rates);
            self.ports.receipts.render(&receipt)?;
            self.reprinted += 1;
        }
        tracing::info!(reprinted = self.reprinted, "batch reprint complete");
        Ok(())
    }
}
