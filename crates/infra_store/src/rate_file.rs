//! Defaults file holding the rate parameters
//!
//! Layout, one line, eight comma-separated fields:
//!
//! ```text
//! next_policy_number,basic_rate,discount_rate,liability_cost,glass_cost,loaner_car_cost,hst_rate,processing_fee
//! 1944,869.00,0.25,130.00,86.00,58.00,15.00,39.99
//! ```
//!
//! Reads accept any decimal text in the amount fields. Writes fix every
//! amount to two fraction digits and replace the whole file through a
//! temporary sibling and a rename, so a failed write leaves the old file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use core_kernel::money::{parse_decimal, to_fixed};
use core_kernel::{Money, PolicyNumber};
use domain_policy::{PortError, RateParameters, RateStore};

use crate::error::StoreError;

/// Number of fields in the defaults record
pub const RATE_FIELD_COUNT: usize = 8;

const FIELD_NAMES: [&str; RATE_FIELD_COUNT] = [
    "next_policy_number",
    "basic_rate",
    "discount_rate",
    "liability_cost",
    "glass_cost",
    "loaner_car_cost",
    "hst_rate",
    "processing_fee",
];

/// Renders rate parameters as the single defaults line, without newline
pub fn format_rate_line(params: &RateParameters) -> String {
    [
        params.next_policy_number.to_string(),
        params.basic_rate.to_fixed(),
        to_fixed(params.discount_rate),
        params.liability_cost.to_fixed(),
        params.glass_cost.to_fixed(),
        params.loaner_car_cost.to_fixed(),
        to_fixed(params.hst_rate),
        params.processing_fee.to_fixed(),
    ]
    .join(",")
}

/// Parses the defaults line
///
/// Returns the failure description; callers attach the path.
pub fn parse_rate_line(line: &str) -> Result<RateParameters, String> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != RATE_FIELD_COUNT {
        return Err(format!(
            "expected {RATE_FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let next_policy_number: PolicyNumber = fields[0]
        .parse()
        .map_err(|e| format!("{}: {e}", FIELD_NAMES[0]))?;

    let mut amounts = [rust_decimal::Decimal::ZERO; RATE_FIELD_COUNT - 1];
    for (i, text) in fields[1..].iter().enumerate() {
        amounts[i] = parse_decimal(text).map_err(|e| format!("{}: {e}", FIELD_NAMES[i + 1]))?;
    }
    let [basic_rate, discount_rate, liability_cost, glass_cost, loaner_car_cost, hst_rate, processing_fee] =
        amounts;

    let params = RateParameters {
        next_policy_number,
        basic_rate: Money::new(basic_rate),
        discount_rate,
        liability_cost: Money::new(liability_cost),
        glass_cost: Money::new(glass_cost),
        loaner_car_cost: Money::new(loaner_car_cost),
        hst_rate,
        processing_fee: Money::new(processing_fee),
    };
    params.validate().map_err(|e| e.to_string())?;
    Ok(params)
}

/// The defaults file on disk
#[derive(Debug, Clone)]
pub struct RateParametersFile {
    path: PathBuf,
}

impl RateParametersFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the first line of the file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `Format` if the file is empty or the line is malformed
    pub fn read(&self) -> Result<RateParameters, StoreError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let line = contents
            .lines()
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| StoreError::format(&self.path, "file is empty"))?;
        let params = parse_rate_line(line).map_err(|m| StoreError::format(&self.path, m))?;

        tracing::debug!(path = %self.path.display(), next_policy_number = %params.next_policy_number, "loaded rate parameters");
        Ok(params)
    }

    /// Replaces the file with the given parameters
    pub fn write(&self, params: &RateParameters) -> Result<(), StoreError> {
        let tmp_path = self.path.with_extension("tmp");
        let result = write_synced(&tmp_path, &format_rate_line(params))
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(source) = result {
            // best effort; the original error is what matters
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(&self.path, source));
        }

        tracing::info!(path = %self.path.display(), next_policy_number = %params.next_policy_number, "saved rate parameters");
        Ok(())
    }
}

fn write_synced(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{line}")?;
    file.sync_all()
}

impl RateStore for RateParametersFile {
    fn load(&self) -> Result<RateParameters, PortError> {
        Ok(self.read()?)
    }

    fn save(&mut self, params: &RateParameters) -> Result<(), PortError> {
        Ok(self.write(params)?)
    }
}
