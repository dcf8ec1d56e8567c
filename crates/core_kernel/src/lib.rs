//! Core Kernel - Foundational types and utilities for the premium system
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - Money types with precise decimal arithmetic
//! - Calendar helpers for invoice and payment dates
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError, Rate};
pub use temporal::{Timezone, first_of_next_month, format_date, parse_date};
pub use identifiers::PolicyNumber;
pub use error::CoreError;
