//! Processing progress bar

use std::io::Write;
use std::thread;
use std::time::Duration;

use domain_policy::ProgressIndicator;

/// Prints "Processing..." and then one dot per step, pausing before each dot
///
/// The pause is a plain sleep and cannot be interrupted.
pub struct ConsoleProgress<W> {
    out: W,
    steps: u32,
    delay: Duration,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W, steps: u32, delay: Duration) -> Self {
        Self { out, steps, delay }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "Processing...")?;
        for _ in 0..self.steps {
            thread::sleep(self.delay);
            write!(self.out, ".")?;
            self.out.flush()?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Policy information processed and saved.")?;
        writeln!(self.out, "{}", "=".repeat(80))?;
        self.out.flush()
    }
}

impl<W: Write> ProgressIndicator for ConsoleProgress<W> {
    fn show(&mut self) {
        if let Err(e) = self.draw() {
            tracing::debug!(error = %e, "progress output failed");
        }
    }
}
