use crate::events::prelude::FailEvent;
use colored::Colorize;
use mockall::automock;
use std::io::Write;
use tracing::debug;

/// The host's own failure-detail printer. The dot display never formats failures itself.
#[automock]
pub trait FailurePrinter {
    fn print_fail(&mut self, event: &FailEvent);
}

/// Prints the failed test's name followed by its captured output, untouched.
pub struct ConsoleFailurePrinter<W: Write> {
    target: W,
}

impl<W: Write> ConsoleFailurePrinter<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> W {
        self.target
    }

    fn write_detail(&mut self, event: &FailEvent) -> std::io::Result<()> {
        writeln!(self.target)?;
        writeln!(self.target, "{}) {}", event.count, event.name.bold())?;
        if !event.output.is_empty() {
            self.target.write_all(event.output.as_bytes())?;
            if !event.output.ends_with('\n') {
                writeln!(self.target)?;
            }
        }
        self.target.flush()
    }
}

impl<W: Write> FailurePrinter for ConsoleFailurePrinter<W> {
    fn print_fail(&mut self, event: &FailEvent) {
        if let Err(e) = self.write_detail(event) {
            debug!("Unable to print failure detail for {}: {:?}", event.name, e);
        }
    }
}
