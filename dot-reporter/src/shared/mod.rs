mod config;
mod logging;
mod terminal;

pub const COLUMNS_ENV: &str = "DOT_REPORTER_COLUMNS";
pub const WIDTH_ENV: &str = "DOT_REPORTER_WIDTH";
pub const SILENT_ENV: &str = "DOT_REPORTER_SILENT";

pub mod prelude {
    pub use super::config::{ConfigOptions, ReporterConfig};
    pub use super::logging::LoggingOpts;
    pub use super::terminal::{
        DEFAULT_TERMINAL_WIDTH, MockWidthDetector, TerminalGeometry, TerminalWidthDetector,
        WidthDetector,
    };
    pub use super::{COLUMNS_ENV, SILENT_ENV, WIDTH_ENV};
}
