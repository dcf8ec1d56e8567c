//! Flat-File Storage Layer
//!
//! This crate persists the premium system's state in two plain-text files:
//!
//! - **Defaults file**: one comma-separated line holding the rate parameters
//!   and the next policy number, replaced atomically on every save.
//! - **Policy ledger**: one `", "`-separated line per issued policy, only ever
//!   appended to.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::FlatFileStore;
//!
//! let mut store = FlatFileStore::open(data_dir, "OSICDef.dat", "Policies.dat");
//! let rates = store.load_reconciled()?;
//! ```

pub mod error;
pub mod rate_file;
pub mod ledger_file;
pub mod store;

pub use error::StoreError;
pub use rate_file::RateParametersFile;
pub use ledger_file::PolicyLedgerFile;
pub use store::FlatFileStore;
