use dot_reporter::prelude::*;
use clap::Parser;
use human_panic::setup_panic;
use tracing::error;

/// dot-reporter
///
/// Renders a libtest JSON event stream as a compact dot display,
/// wrapping lines with a running count and percentage.
///
///   cargo test -- -Z unstable-options --format json | dot-reporter
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(flatten)]
    config: ConfigOptions,

    #[clap(flatten)]
    args: DotArgs,
}

#[tokio::main]
async fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();
    let opts = Cli::parse();

    opts.logging.configure_logging();
    let error_code = run(opts).await;

    std::process::exit(error_code);
}

async fn run(opts: Cli) -> i32 {
    report_root(&opts.config, &opts.args)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to report test progress. {}", e);
            2
        })
}
