use clap::{ArgGroup, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::{Format, PrettyFields};
use tracing_subscriber::{Registry, prelude::*};

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Diagnostics go to stderr, stdout belongs to the dot display.
    pub fn configure_logging(&self) {
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .with_writer(std::io::stderr)
            .fmt_fields(PrettyFields::new())
            .with_filter(self.to_level_filter());

        let subscriber = Registry::default().with(console_output);

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber was already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let levels: Vec<_> = (0..5)
            .map(|verbose| LoggingOpts { verbose }.to_level_filter())
            .collect();

        assert_eq!(
            vec![
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE
            ],
            levels
        );
    }
}
