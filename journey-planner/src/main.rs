use std::process::ExitCode;

use clap::Parser;
use journey_planner::cli::{CliConfig, run};
use journey_planner::timetable::Timetable;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    // Logs go to stderr so that query output on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();

    let timetable = match Timetable::from_path(&config.timetable) {
        Ok(timetable) => timetable,
        Err(e) => {
            error!("failed to load timetable: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(timetable, config.planner_config(), &config.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
