mod failure;
mod glyph;
mod progress;
mod suite;

pub mod prelude {
    pub use super::failure::{ConsoleFailurePrinter, FailurePrinter, MockFailurePrinter};
    pub use super::glyph::{Glyph, TestStatus};
    pub use super::progress::{digit_width, format_progress, percentage};
    pub use super::suite::{SuiteReporter, SuiteRun};
}
