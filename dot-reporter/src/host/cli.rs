use super::error::HostError;
use super::libtest::{LibtestTranslator, parse_line};
use crate::events::prelude::EventDispatcher;
use crate::reporter::prelude::{ConsoleFailurePrinter, SuiteReporter};
use crate::shared::prelude::{ConfigOptions, TerminalWidthDetector};
use clap::Args;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Stdin};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct DotArgs {
    /// Location of the libtest JSON event stream, for stdin use '-'
    #[arg(default_value = "-")]
    pub location: String,
}

pub async fn report_root(config: &ConfigOptions, args: &DotArgs) -> Result<i32, HostError> {
    let geometry = config.geometry(&TerminalWidthDetector::default());
    let reporter = SuiteReporter::new(
        geometry,
        config.reporter_config(),
        std::io::stdout(),
        Box::new(ConsoleFailurePrinter::new(std::io::stdout())),
    );

    let mut dispatcher = EventDispatcher::default();
    dispatcher.register(Box::new(reporter));

    let result = match args.location.as_str() {
        "-" => process_lines(&mut dispatcher, read_from_stdin().await?).await?,
        file_path => process_lines(&mut dispatcher, read_from_file(file_path).await?).await?,
    };

    info!("Finished with {:?}", result);
    Ok(result.to_exit_code())
}

/// Feed every event of the stream through `dispatcher`, in order.
pub async fn process_lines<T>(
    dispatcher: &mut EventDispatcher,
    input: T,
) -> Result<RunStatus, HostError>
where
    T: AsyncRead,
    T: AsyncBufReadExt,
    T: Unpin,
{
    let mut translator = LibtestTranslator::default();
    let mut line_number = 0;

    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        let Some(record) = parse_line(line_number, &line)? else {
            continue;
        };

        for event in translator.translate(record) {
            debug!("Dispatching {}", event.kind());
            dispatcher.dispatch(&event);
        }
    }

    for event in translator.finish() {
        dispatcher.dispatch(&event);
    }

    Ok(match translator.failures_seen() {
        0 => RunStatus::AllPassed,
        _ => RunStatus::FailuresFound,
    })
}

async fn read_from_stdin() -> Result<BufReader<Stdin>, HostError> {
    Ok(BufReader::new(tokio::io::stdin()))
}

async fn read_from_file(file_name: &str) -> Result<BufReader<File>, HostError> {
    let file_path = PathBuf::from(file_name);
    if !file_path.exists() {
        return Err(HostError::FileNotFound {
            file_name: file_name.to_string(),
        });
    }
    Ok(BufReader::new(File::open(file_path).await?))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunStatus {
    AllPassed,
    FailuresFound,
}

impl RunStatus {
    pub fn to_exit_code(self) -> i32 {
        match self {
            RunStatus::AllPassed => 0,
            RunStatus::FailuresFound => 1,
        }
    }
}
