mod cli;
mod core;
mod reporter;

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::core::runner::ThreadSleep;
use crate::reporter::ConsoleReporter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version exit 0.
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(&cli);

    let mut reporter = ConsoleReporter::stdout();
    match core::run(&cli.file, ThreadSleep, &mut reporter) {
        Ok(summary) => reporter.summary(&summary),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}
