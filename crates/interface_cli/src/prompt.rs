//! Console prompting
//!
//! Collects one policy submission field by field. Every field is checked as
//! it is typed and asked again until it is acceptable, so the workflow only
//! ever sees submissions that pass validation.

use std::io::{BufRead, Write};

use domain_policy::policy::FIELD_DELIMITER;
use domain_policy::{
    Coverages, Customer, PaymentMethod, PolicySubmission, PortError, Province, SubmissionSource,
};

const SOURCE_NAME: &str = "console";

/// Submission source reading answers from `input` and writing prompts to `output`
pub struct ConsoleSubmissionSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSubmissionSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn io_error(source: std::io::Error) -> PortError {
        PortError::Io {
            source_name: SOURCE_NAME.to_string(),
            source,
        }
    }

    fn say(&mut self, line: &str) -> Result<(), PortError> {
        writeln!(self.output, "{line}").map_err(Self::io_error)
    }

    /// Prints the prompt and reads one trimmed answer
    fn read_answer(&mut self, prompt: &str) -> Result<String, PortError> {
        write!(self.output, "{prompt}")
            .and_then(|_| self.output.flush())
            .map_err(Self::io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(Self::io_error)?;
        if read == 0 {
            return Err(PortError::Input("input closed before the policy was complete".to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer
    fn ask<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PortError> {
        loop {
            let answer = self.read_answer(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(complaint)?;
        }
    }

    fn ask_text(&mut self, prompt: &str, max_len: usize) -> Result<String, PortError> {
        let complaint = format!(
            "Invalid input. Please enter 1 to {max_len} characters without \"{FIELD_DELIMITER}\"."
        );
        self.ask(prompt, &complaint, |answer| {
            let acceptable = !answer.is_empty()
                && answer.chars().count() <= max_len
                && !answer.contains(FIELD_DELIMITER);
            acceptable.then(|| answer.to_string())
        })
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PortError> {
        self.ask(prompt, "Invalid input. Please enter Y or N.", |answer| {
            match answer.to_uppercase().as_str() {
                "Y" => Some(true),
                "N" => Some(false),
                _ => None,
            }
        })
    }

    fn ask_customer(&mut self) -> Result<Customer, PortError> {
        Ok(Customer {
            first_name: self.ask_text("Enter the customers First Name: ", 60)?,
            last_name: self.ask_text("Enter the customers Last Name: ", 60)?,
            address: self.ask_text("Enter the customers Street Address: ", 120)?,
            city: self.ask_text("Enter the customers City: ", 60)?,
            province: self.ask(
                "Enter the customers Province (Two-letter abbreviation): ",
                "Invalid province. Please enter a valid two-letter abbreviation (e.g., ON, BC).",
                |answer| answer.to_uppercase().parse::<Province>().ok(),
            )?,
            postal_code: self
                .ask_text("Enter the customers Postal Code: ", 10)?
                .to_uppercase(),
            phone_number: self.ask_text("Enter the customers Phone Number(9999999999): ", 20)?,
        })
    }
}

impl<R: BufRead, W: Write> SubmissionSource for ConsoleSubmissionSource<R, W> {
    fn next_submission(&mut self) -> Result<PolicySubmission, PortError> {
        self.say("Enter the customers policy details")?;
        self.say("")?;

        let customer = self.ask_customer()?;
        let num_cars = self.ask(
            "Enter the number of cars being insured: ",
            "Invalid number of cars. Please enter a whole number of at least 1.",
            |answer| answer.parse::<u32>().ok().filter(|n| *n > 0),
        )?;
        let coverages = Coverages {
            extra_liability: self.ask_yes_no("Extra Liability Coverage (Y/N): ")?,
            glass: self.ask_yes_no("Optional Glass Coverage (Y/N): ")?,
            loaner_car: self.ask_yes_no("Optional Loaner Car (Y/N): ")?,
        };
        let payment_method = self.ask(
            "Enter the Payment Method (Full/Monthly): ",
            "Invalid payment method. Please enter 'Full' or 'Monthly'.",
            |answer| answer.to_uppercase().parse::<PaymentMethod>().ok(),
        )?;

        Ok(PolicySubmission {
            customer,
            num_cars,
            coverages,
            payment_method,
        })
    }

    fn wants_another(&mut self) -> Result<bool, PortError> {
        self.ask_yes_no("Enter another policy? (Y/N): ")
    }
}
