//! Strongly-typed identifiers for domain entities
//!
//! Policy numbers are drawn from a persisted sequence rather than generated
//! randomly, so the identifier is a newtype over a positive integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Sequential policy number, unique per policy ever issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PolicyNumber(u64);

impl PolicyNumber {
    /// Creates a policy number, rejecting zero
    pub fn new(value: u64) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::validation("policy number must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying integer
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the number that follows this one in the sequence
    ///
    /// Fails at the top of the range instead of repeating a number.
    pub fn next(&self) -> Result<Self, CoreError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| CoreError::validation("policy number sequence exhausted"))
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PolicyNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::parse("policy number", s))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for PolicyNumber {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PolicyNumber> for u64 {
    fn from(number: PolicyNumber) -> u64 {
        number.0
    }
}
