//! Plain-text receipt layout

use std::io::Write;

use core_kernel::{format_date, Money};
use domain_policy::{BreakdownSource, PortError, Receipt, ReceiptSink, title_case};

const WIDTH: usize = 80;
const LEFT_COLUMN: usize = 44;
const LABEL_COLUMN: usize = 64;

const LETTERHEAD: [&str; 6] = [
    "One Stop Insurance Company",
    "106 Major Street",
    "Roddickton, NL",
    "A0K4P0",
    "Phone: (709) 457-2814",
    "Fax: (709) 457-3814",
];

/// Heading printed once before the batch reprint
pub const REPRINT_BANNER: &str = "===== RECEIPTS FOR ALL CUSTOMERS =====";

fn yes_no(selected: bool) -> &'static str {
    if selected {
        "Yes"
    } else {
        "No"
    }
}

/// Places `right` at `LEFT_COLUMN`, cutting `left` short so at least one
/// space separates them and the line stays within `WIDTH`
fn columns(left: String, right: String) -> String {
    let left_width = LEFT_COLUMN.min(WIDTH.saturating_sub(right.chars().count()));
    let left: String = left.chars().take(left_width.saturating_sub(1)).collect();
    format!("{left:<left_width$}{right}").trim_end().to_string()
}

/// Lays out a receipt as lines of text, without trailing newlines
pub fn format_receipt(receipt: &Receipt) -> Vec<String> {
    let c = &receipt.customer;
    let rule = |ch: char| ch.to_string().repeat(WIDTH);
    let amount = |label: String, value: Money| format!("{label:<LABEL_COLUMN$}{:>16}", value.to_string());

    let mut lines = vec![rule('*')];
    lines.extend(LETTERHEAD.iter().map(|l| format!("{l:^WIDTH$}").trim_end().to_string()));
    lines.push(rule('='));
    lines.push(String::new());
    lines.push(columns(
        format!("POLICY NUMBER: {}", receipt.policy_number),
        format!("INVOICE DATE: {}", format_date(receipt.invoice_date)),
    ));
    lines.push(String::new());
    lines.push(rule('-'));
    lines.push(columns("CUSTOMER INFORMATION".into(), "POLICY INFORMATION".into()));
    lines.push(rule('-'));
    lines.push(columns(
        format!("Name: {}", receipt.display_name()),
        format!("Number of Cars Insured:    {}", receipt.num_cars),
    ));
    lines.push(columns(
        format!("Address: {}", c.address),
        format!("Extra Liability Coverage:  {}", yes_no(receipt.coverages.extra_liability)),
    ));
    lines.push(columns(
        format!("City: {}", title_case(&c.city)),
        format!("Optional Glass Coverage:   {}", yes_no(receipt.coverages.glass)),
    ));
    lines.push(columns(
        format!("Province: {}", c.province),
        format!("Optional Loaner Car:       {}", yes_no(receipt.coverages.loaner_car)),
    ));
    lines.push(columns(
        format!("Postal Code: {}", c.postal_code),
        format!("Payment Method:            {}", receipt.payment_method),
    ));
    lines.push(format!("Phone Number: {}", c.phone_number));
    lines.push(String::new());
    lines.push(rule('-'));
    lines.push("POLICY PREMIUMS TOTALS".to_string());
    lines.push(rule('-'));

    let b = &receipt.breakdown;
    lines.push(amount("Insurance Premium Charge:".into(), b.total_premium));
    lines.push(amount("Total Extra Charges:".into(), b.extra_costs));
    lines.push(amount("Subtotal:".into(), b.subtotal));
    lines.push(amount(format!("HST ({}):", receipt.hst_rate), b.hst_amount));
    lines.push(amount("Total Cost:".into(), b.total_cost));
    if receipt.breakdown_source == BreakdownSource::Approximated {
        lines.push("(charges estimated from the stored total)".to_string());
    }
    lines.push(rule('-'));

    if let Some(plan) = &receipt.monthly_plan {
        lines.push(amount(
            "Monthly Payment (including processing fee):".into(),
            plan.payment,
        ));
        lines.push(format!(
            "{:<LABEL_COLUMN$}{:>16}",
            "Next Monthly Payment Due:",
            format_date(plan.next_due)
        ));
    }
    lines.push(rule('*'));
    lines
}

/// Receipt sink writing text receipts to any writer
pub struct TextReceiptRenderer<W> {
    out: W,
}

impl<W: Write> TextReceiptRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) -> Result<(), PortError> {
        let result = lines
            .into_iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|_| self.out.flush());
        result.map_err(|e| PortError::Render(e.to_string()))
    }
}

impl<W: Write> ReceiptSink for TextReceiptRenderer<W> {
    fn render(&mut self, receipt: &Receipt) -> Result<(), PortError> {
        let lines = format_receipt(receipt);
        self.write_lines(["", ""].into_iter().chain(lines.iter().map(String::as_str)))
    }

    fn begin_reprint(&mut self) -> Result<(), PortError> {
        self.write_lines(["", REPRINT_BANNER])
    }
}
