mod client;
mod config;
mod models;
mod pipeline;
mod schema;
mod source;
#[cfg(test)]
mod test_support;
mod transform;
mod types;
mod validation;

use std::io::stderr;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::client::HttpSubmissionClient;
use crate::config::{ImportOptions, LogLevel};
use crate::pipeline::{Cancellation, ImportError, ImportOutcome, ImportPipeline, FATAL_EXIT_CODE};
use crate::source::CsvRowSource;

/// Imports ledger transactions from a CSV file
#[derive(Debug, Parser)]
#[command(name = "ledger-import", version)]
struct Cli {
    #[command(flatten)]
    options: ImportOptions,

    /// Log verbosity, written to stderr
    #[arg(long, value_enum, env = "LEDGER_LOG_LEVEL", default_value = "info")]
    log_level: LogLevel
}

#[tokio::main]
async fn main() -> ExitCode {
    //NOTE: A missing .env file is the normal case, values then come from the real environment
    let _ = dotenvy::dotenv();

    //NOTE: Usage errors share the fatal exit code, the clap default of 2 would read as an invalid file
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(FATAL_EXIT_CODE);
        }
    };
    setup_logging(cli.log_level.into());

    let code = match run(cli.options).await {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            match error.downcast_ref::<ImportError>().and_then(ImportError::row) {
                Some(row) => error!("Import stopped at row [{row}]: {error:#}"),
                None => error!("Import failed: {error:#}")
            }
            FATAL_EXIT_CODE
        }
    };

    info!("Exiting with code {code}");

    ExitCode::from(code)
}

async fn run(options: ImportOptions) -> Result<ImportOutcome> {
    let settings = options.validate()?;

    let client = HttpSubmissionClient::new(&settings.base_url, settings.api_key.clone(), settings.timeout)?;
    let source = CsvRowSource::new(&settings.csv_file);

    info!("Importing [{}] into [{}]", source.path().display(), client.endpoint());

    let pipeline = ImportPipeline::new(client, settings.transformer());

    let cancellation = Cancellation::new();
    watch_for_interrupt(cancellation.clone());

    let timer = Instant::now();
    let outcome = pipeline.run(&source, &cancellation).await?;
    let duration = timer.elapsed();

    info!("Processed [{}] in: {duration:?}", source.path().display());

    Ok(outcome)
}

/// Turns Ctrl-C into a cancellation the pipeline observes at its next row boundary.
fn watch_for_interrupt(cancellation: Cancellation) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping after the current row");
                cancellation.cancel();
            }
            Err(error) => error!("Unable to listen for interrupt signal: {error}")
        }
    });
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
