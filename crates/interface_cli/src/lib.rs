//! Counter Console
//!
//! This crate puts the policy workflow in front of an operator: it prompts
//! for each policy, prints receipts and the progress bar, and wires the
//! flat-file store underneath.
//!
//! # Architecture
//!
//! - **Config**: `CliConfig`, from defaults, `osic.toml` and `OSIC_*` variables
//! - **Prompt**: `ConsoleSubmissionSource`, the validated-input collaborator
//! - **Receipt**: `TextReceiptRenderer`, the receipt sink
//! - **Progress**: `ConsoleProgress`, the cosmetic pause after each receipt
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{run_session, config::CliConfig};
//!
//! let config = CliConfig::load()?;
//! let summary = run_session(&config, stdin.lock(), io::stdout(), io::stdout(), io::stdout())?;
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod progress;

use std::io::{BufRead, Write};

use domain_policy::{PolicyWorkflow, WorkflowPorts, WorkflowSummary};
use infra_store::FlatFileStore;

pub use crate::config::CliConfig;
pub use crate::error::CliError;
pub use crate::progress::ConsoleProgress;
pub use crate::prompt::ConsoleSubmissionSource;
pub use crate::receipt::TextReceiptRenderer;

/// Runs one counter session against the configured data files
///
/// # Arguments
///
/// * `config` - Console configuration
/// * `input` - Operator answers
/// * `prompts` - Where questions and complaints are written
/// * `receipts` - Where receipts are written
/// * `progress` - Where the progress bar is drawn
///
/// # Errors
///
/// Returns error if:
/// - The configured timezone is unknown
/// - The defaults file or the ledger cannot be read
/// - Any policy fails to persist or render
pub fn run_session<R, P, O, G>(
    config: &CliConfig,
    input: R,
    prompts: P,
    receipts: O,
    progress: G,
) -> Result<WorkflowSummary, CliError>
where
    R: BufRead,
    P: Write,
    O: Write,
    G: Write,
{
    let calendar = config.timezone()?;
    let mut store = FlatFileStore::from_paths(config.defaults_path(), config.policies_path());
    let rates = store.load_reconciled()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        next_policy_number = %rates.next_policy_number,
        "session started"
    );

    let mut input = ConsoleSubmissionSource::new(input, prompts);
    let mut receipts = TextReceiptRenderer::new(receipts);
    let mut progress =
        ConsoleProgress::new(progress, config.progress_steps, config.progress_delay());
    let (ledger, rate_store) = store.parts_mut();

    let summary = PolicyWorkflow::new(
        rates,
        WorkflowPorts {
            ledger,
            rate_store,
            input: &mut input,
            receipts: &mut receipts,
            progress: &mut progress,
            calendar: &calendar,
        },
    )
    .with_reprint_on_exit(config.reprint_on_exit)
    .run()?;

    tracing::info!(
        issued = summary.issued.len(),
        reprinted = summary.reprinted,
        next_policy_number = %summary.next_policy_number,
        "session finished"
    );
    Ok(summary)
}
