use super::terminal::{TerminalGeometry, WidthDetector};
use super::{COLUMNS_ENV, SILENT_ENV, WIDTH_ENV};
use clap::{ArgGroup, Parser};
use serde::Deserialize;
use tracing::debug;

/// Options the dot reporter recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReporterConfig {
    /// Maximum number of glyphs per line. `0` uses the terminal width.
    pub columns: usize,
    /// Suppress the dot display. Failure details are still printed.
    pub silent: bool,
}

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// Maximum number of status characters per line. When unset, or 0, the
    /// terminal width decides.
    #[arg(long, env = COLUMNS_ENV, default_value_t = 0, global(true))]
    columns: usize,

    /// Assume a terminal this wide instead of detecting it.
    #[arg(long, env = WIDTH_ENV, global(true))]
    width: Option<usize>,

    /// Do not print the progress display, only failure details.
    #[arg(long, env = SILENT_ENV, default_value = "false", global(true))]
    silent: bool,
}

impl ConfigOptions {
    pub fn reporter_config(&self) -> ReporterConfig {
        ReporterConfig {
            columns: self.columns,
            silent: self.silent,
        }
    }

    pub fn geometry<D>(&self, detector: &D) -> TerminalGeometry
    where
        D: WidthDetector + ?Sized,
    {
        let geometry = match self.width {
            Some(width) if width > 0 => TerminalGeometry::new(width, self.columns),
            _ => TerminalGeometry::detect(detector, self.columns),
        };

        debug!("Using terminal geometry {:?}", geometry);
        geometry
    }
}
