//! Append-only policy ledger file
//!
//! One line per policy, fields separated by `", "`:
//!
//! ```text
//! policy_number, invoice_date, first_name, last_name, address, city, province,
//! postal_code, phone_number, num_cars, extra_liability, glass_coverage,
//! loaner_car, payment_method, total_cost[, basic_premium, extra_costs,
//! subtotal, hst_amount]
//! ```
//!
//! The first fifteen fields are the long-standing layout. New lines also
//! carry the four breakdown amounts so reprints can show what was priced.
//! Lines with exactly fifteen fields are still read and come back without a
//! breakdown. Any other field count is corruption.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use core_kernel::{format_date, parse_date, Money, PolicyNumber};
use domain_policy::policy::{flag_code, parse_flag, FIELD_DELIMITER};
use domain_policy::{
    Coverages, Customer, PolicyLedger, PolicyRecord, PortError, PremiumBreakdown, Replay,
};

use crate::error::StoreError;

/// Field count of a line without breakdown amounts
pub const LEGACY_FIELD_COUNT: usize = 15;

/// Field count of a line with breakdown amounts
pub const FULL_FIELD_COUNT: usize = 19;

/// Renders a record as one ledger line, without newline
pub fn format_record(record: &PolicyRecord) -> String {
    let c = &record.customer;
    let mut fields = vec![
        record.policy_number.to_string(),
        format_date(record.invoice_date),
        c.first_name.clone(),
        c.last_name.clone(),
        c.address.clone(),
        c.city.clone(),
        c.province.to_string(),
        c.postal_code.clone(),
        c.phone_number.clone(),
        record.num_cars.to_string(),
        flag_code(record.coverages.extra_liability).to_string(),
        flag_code(record.coverages.glass).to_string(),
        flag_code(record.coverages.loaner_car).to_string(),
        record.payment_method.to_string(),
        record.total_cost.to_fixed(),
    ];
    if let Some(b) = &record.breakdown {
        fields.extend([
            b.total_premium.to_fixed(),
            b.extra_costs.to_fixed(),
            b.subtotal.to_fixed(),
            b.hst_amount.to_fixed(),
        ]);
    }
    fields.join(FIELD_DELIMITER)
}

/// Parses one ledger line
///
/// Returns the failure description; callers attach path and line number.
pub fn parse_record(line: &str) -> Result<PolicyRecord, String> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != LEGACY_FIELD_COUNT && fields.len() != FULL_FIELD_COUNT {
        return Err(format!(
            "expected {LEGACY_FIELD_COUNT} or {FULL_FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let policy_number: PolicyNumber = fields[0]
        .parse()
        .map_err(|e| format!("policy_number: {e}"))?;
    let invoice_date = parse_date(fields[1]).map_err(|e| format!("invoice_date: {e}"))?;
    let customer = Customer {
        first_name: fields[2].to_string(),
        last_name: fields[3].to_string(),
        address: fields[4].to_string(),
        city: fields[5].to_string(),
        province: fields[6].parse().map_err(|e| format!("province: {e}"))?,
        postal_code: fields[7].to_string(),
        phone_number: fields[8].to_string(),
    };
    let num_cars: u32 = fields[9]
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("num_cars: expected a positive integer, found '{}'", fields[9]))?;
    let coverages = Coverages {
        extra_liability: parse_flag(fields[10]).map_err(|e| format!("extra_liability: {e}"))?,
        glass: parse_flag(fields[11]).map_err(|e| format!("glass_coverage: {e}"))?,
        loaner_car: parse_flag(fields[12]).map_err(|e| format!("loaner_car: {e}"))?,
    };
    let payment_method = fields[13]
        .parse()
        .map_err(|e| format!("payment_method: {e}"))?;
    let total_cost = parse_amount("total_cost", fields[14])?;

    let breakdown = if fields.len() == FULL_FIELD_COUNT {
        Some(PremiumBreakdown {
            total_premium: parse_amount("basic_premium", fields[15])?,
            extra_costs: parse_amount("extra_costs", fields[16])?,
            subtotal: parse_amount("subtotal", fields[17])?,
            hst_amount: parse_amount("hst_amount", fields[18])?,
            total_cost,
        })
    } else {
        None
    };

    Ok(PolicyRecord {
        policy_number,
        invoice_date,
        customer,
        num_cars,
        coverages,
        payment_method,
        total_cost,
        breakdown,
    })
}

fn parse_amount(name: &str, text: &str) -> Result<Money, String> {
    text.parse::<Money>().map_err(|e| format!("{name}: {e}"))
}

/// The ledger file on disk
#[derive(Debug, Clone)]
pub struct PolicyLedgerFile {
    path: PathBuf,
}

impl PolicyLedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line, creating the file if needed
    pub fn write_record(&self, record: &PolicyRecord) -> Result<(), StoreError> {
        let line = format_record(record);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        writeln!(file, "{line}")
            .and_then(|_| file.sync_data())
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            policy_number = %record.policy_number,
            total_cost = %record.total_cost,
            "appended policy"
        );
        Ok(())
    }

    /// Opens a fresh pass over the file
    ///
    /// A missing file reads as an empty ledger. Blank lines are skipped.
    pub fn records(&self) -> Result<LedgerReader, StoreError> {
        let lines = match File::open(&self.path) {
            Ok(file) => Some(BufReader::new(file).lines()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        Ok(LedgerReader {
            path: self.path.clone(),
            lines,
            line_number: 0,
            failed: false,
        })
    }
}

/// Lazy iterator over the records of a ledger file
///
/// Stops after the first error.
pub struct LedgerReader {
    path: PathBuf,
    lines: Option<std::io::Lines<BufReader<File>>>,
    line_number: usize,
    failed: bool,
}

impl Iterator for LedgerReader {
    type Item = Result<PolicyRecord, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let lines = self.lines.as_mut()?;
        loop {
            let line = match lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(StoreError::io(&self.path, e)));
                }
            };
            self.line_number += 1;

            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.trim().is_empty() {
                continue;
            }
            let parsed = parse_record(line).map_err(|message| StoreError::DataCorruption {
                path: self.path.clone(),
                line: self.line_number,
                message,
            });
            if parsed.is_err() {
                self.failed = true;
            }
            return Some(parsed);
        }
    }
}

impl PolicyLedger for PolicyLedgerFile {
    fn append(&mut self, record: &PolicyRecord) -> Result<(), PortError> {
        Ok(self.write_record(record)?)
    }

    fn replay_all(&self) -> Result<Replay<'_>, PortError> {
        let reader = self.records()?;
        Ok(Box::new(reader.map(|r| r.map_err(PortError::from))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_policy::{PaymentMethod, Province};
    use rust_decimal_macros::dec;

    const LEGACY_LINE: &str = "1944, 2023-07-26, Janet, Pike, 12 Water Street, St. John's, NL, A1C1A1, 7095551234, 2, Y, Y, Y, MONTHLY, 316.40";

    #[test]
    fn parses_legacy_line() {
        let record = parse_record(LEGACY_LINE).unwrap();

        assert_eq!(record.policy_number.value(), 1944);
        assert_eq!(record.invoice_date, NaiveDate::from_ymd_opt(2023, 7, 26).unwrap());
        assert_eq!(record.customer.city, "St. John's");
        assert_eq!(record.customer.province, Province::NL);
        assert_eq!(record.num_cars, 2);
        assert_eq!(record.coverages, Coverages::all());
        assert_eq!(record.payment_method, PaymentMethod::Monthly);
        assert_eq!(record.total_cost.amount(), dec!(316.40));
        assert!(record.breakdown.is_none());
    }

    #[test]
    fn parses_full_line() {
        let line = format!("{LEGACY_LINE}, 190.00, 90.00, 280.00, 36.40");
        let record = parse_record(&line).unwrap();

        let breakdown = record.breakdown.unwrap();
        assert_eq!(breakdown.total_premium.amount(), dec!(190.00));
        assert_eq!(breakdown.hst_amount.amount(), dec!(36.40));
        assert_eq!(breakdown.total_cost, record.total_cost);
    }

    #[test]
    fn legacy_line_formats_back_identically() {
        let record = parse_record(LEGACY_LINE).unwrap();
        assert_eq!(format_record(&record), LEGACY_LINE);
    }

    #[test]
    fn rejects_fourteen_fields() {
        let line = LEGACY_LINE.rsplit_once(", ").unwrap().0;
        let err = parse_record(line).unwrap_err();
        assert_eq!(err, "expected 15 or 19 fields, found 14");
    }

    #[test]
    fn rejects_lowercase_flag() {
        let line = LEGACY_LINE.replace(", Y, Y, Y,", ", y, Y, Y,");
        let err = parse_record(&line).unwrap_err();
        assert!(err.starts_with("extra_liability"), "{err}");
    }

    #[test]
    fn rejects_bad_date() {
        let line = LEGACY_LINE.replace("2023-07-26", "26/07/2023");
        let err = parse_record(&line).unwrap_err();
        assert!(err.starts_with("invoice_date"), "{err}");
    }

    #[test]
    fn rejects_zero_cars() {
        let line = LEGACY_LINE.replace("7095551234, 2,", "7095551234, 0,");
        let err = parse_record(&line).unwrap_err();
        assert!(err.starts_with("num_cars"), "{err}");
    }
}
