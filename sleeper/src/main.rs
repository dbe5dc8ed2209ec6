//! A command line client for the sleeper bus booking service

/// Showing failures to the user
mod alert;

/// Subcommands and what they do
mod command;

/// Configuration and argument parsing
mod config;

/// Where logging out takes you
mod landing;

use clap::Parser;
use command::Context;
use sleeper_core::{api::Client, session::FileStorage, SessionStore};
use std::{path::Path, process::ExitCode};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let config = config::Config::parse();
    let data_dir = config.data_dir();

    // Logs go to a file so that stdout is only ever the JSON we print. Keep
    // the guard around until exit so buffered lines get flushed.
    let _guard = match init_logging(&data_dir) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("could not set up logging in {}: {err}", data_dir.display());
            return ExitCode::FAILURE;
        }
    };

    let api = match Client::with_notifier(
        &config.base_url,
        alert::Alert::new(config.desktop_notify),
    ) {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(?err, base_url = %config.base_url, "bad base URL");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context {
        api,
        session: SessionStore::new(FileStorage::in_dir(&data_dir), landing::Landing),
    };

    tracing::debug!(command = ?config.command, "running");

    match config.command.run(&ctx).await {
        Ok(Some(output)) => match serde_json::to_string_pretty(&output) {
            Ok(pretty) => {
                println!("{pretty}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(problem) => {
            tracing::error!(?problem, "problem running command");
            eprintln!("{problem}");
            ExitCode::FAILURE
        }
    }
}

/// Send logs to a daily file under `data_dir`, filtered by `RUST_LOG`
/// (`info` when unset.)
fn init_logging(data_dir: &Path) -> Result<WorkerGuard, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("sleeper")
        .filename_suffix("log")
        .build(data_dir.join("logs"))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
