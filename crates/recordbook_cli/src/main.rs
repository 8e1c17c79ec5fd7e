//! CLI entry point.
//!
//! # Responsibility
//! - Parse the subcommand and hand off to one exercise runner.
//! - Report every failure as one console line.

mod cli;
mod runs;

use clap::Parser;
use cli::{Command, CommandLine};
use recordbook_core::{init_logging, AppConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CommandLine::parse();
    let config = AppConfig::default();

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("Warning: file logging disabled: {err}");
    }

    let outcome = match args.command {
        Command::Warehouse => runs::warehouse(),
        Command::Inventory { file } => runs::inventory(&file),
        Command::Grades { input, output } => runs::grades(&input, &output),
        Command::Clinic => runs::clinic(),
        Command::Finance => runs::finance(),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            log::error!("event=run_failed module=cli status=error error={err}");
            println!("Unexpected error: {err}");
            ExitCode::FAILURE
        }
    }
}
