//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for rates, customers and dates
//! - `builders`: Builder patterns for submissions and records
//! - `memory`: In-memory implementations of every domain port
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod memory;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use memory::*;
pub use assertions::*;
pub use generators::*;
