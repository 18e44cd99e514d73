//! `lineage` binary.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use lineage_cli::{Args, error_adapter::Report};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match lineage_cli::run(&args) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let report = Report::new(&err);
            let mut rendered = String::new();
            if GraphicalReportHandler::new()
                .render_report(&mut rendered, &report)
                .is_err()
            {
                rendered = err.to_string();
            }
            error!("{rendered}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with a tree printed on stdout.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("unknown log level `{level}`, falling back to `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
