mod cli;
mod error;
mod libtest;

pub mod prelude {
    pub use super::cli::{DotArgs, RunStatus, process_lines, report_root};
    pub use super::error::HostError;
    pub use super::libtest::{LibtestRecord, LibtestTranslator, parse_line};
}
