//! Policy Premium Domain
//!
//! This crate implements pricing and issuance of vehicle policies, following
//! the same hexagonal layout as the rest of the workspace: the domain holds
//! only business rules and talks to storage and the operator through ports.
//!
//! # Architecture
//!
//! - **Value Objects**: RateParameters, Coverages, PremiumBreakdown, Receipt
//! - **Records**: PolicyRecord, immutable once issued
//! - **Domain Services**: `premium::compute`, IssuanceTransaction
//! - **Ports**: RateStore, PolicyLedger, SubmissionSource, ReceiptSink
//!
//! # Session Lifecycle
//!
//! ```text
//! AwaitingInput -> Computing -> Persisting -> Reporting -> AwaitingInput
//!                                                     \-> Draining -> Finished
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyWorkflow, WorkflowPorts};
//!
//! let rates = reconcile_sequence(store.load()?, &ledger)?;
//! let summary = PolicyWorkflow::new(rates, ports).run()?;
//! ```

pub mod rates;
pub mod premium;
pub mod policy;
pub mod receipt;
pub mod ports;
pub mod transaction;
pub mod workflow;
pub mod error;

pub use rates::{RateParameters, MAX_AMOUNT};
pub use premium::{compute, BreakdownSource, Coverages, PremiumBreakdown};
pub use policy::{Customer, PaymentMethod, PolicyRecord, PolicySubmission, Province};
pub use receipt::{MonthlyPlan, Receipt, title_case};
pub use ports::{
    InvoiceCalendar, NoProgress, PolicyLedger, PortError, ProgressIndicator, RateStore,
    ReceiptSink, Replay, SubmissionSource,
};
pub use transaction::{IssuanceTransaction, reconcile_sequence};
pub use workflow::{PolicyWorkflow, WorkflowPorts, WorkflowState, WorkflowSummary};
pub use error::PolicyError;
