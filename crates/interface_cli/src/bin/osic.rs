//! One Stop Insurance - Counter Console Binary
//!
//! Prices and records vehicle policies entered at the counter, then reprints
//! every stored policy when the operator is done.
//!
//! # Usage
//!
//! ```bash
//! # Run against OSICDef.dat and Policies.dat in the current directory
//! cargo run --bin osic
//!
//! # Use another data directory and skip the progress pause
//! OSIC_DATA_DIR=/srv/osic OSIC_PROGRESS_STEPS=0 cargo run --bin osic
//! ```
//!
//! # Environment Variables
//!
//! * `OSIC_DATA_DIR` - Directory holding the data files (default: .)
//! * `OSIC_DEFAULTS_FILE` - Rate parameters file name (default: OSICDef.dat)
//! * `OSIC_POLICIES_FILE` - Policy ledger file name (default: Policies.dat)
//! * `OSIC_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `OSIC_LOG_FORMAT` - text or json (default: text)
//! * `OSIC_TIMEZONE` - Zone the invoice date is taken in (default: America/St_Johns)
//! * `OSIC_PROGRESS_STEPS` - Dots in the progress bar (default: 10)
//! * `OSIC_PROGRESS_STEP_MILLIS` - Pause per dot (default: 500)
//! * `OSIC_REPRINT_ON_EXIT` - Reprint every policy at the end (default: true)

use std::io;

use anyhow::Context;
use interface_cli::config::{CliConfig, LogFormat};
use interface_cli::run_session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log_level, config.log_format);

    tracing::debug!(
        defaults = %config.defaults_path().display(),
        policies = %config.policies_path().display(),
        "data files"
    );

    let stdin = io::stdin();
    run_session(&config, stdin.lock(), io::stdout(), io::stdout(), io::stdout())
        .with_context(|| format!("session in {} stopped", config.data_dir.display()))?;

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr so receipts on
/// stdout stay clean
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}
