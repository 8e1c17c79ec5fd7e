use clap::{Parser, Subcommand};
use recordbook_core::config::{DEFAULT_INVENTORY_PATH, DEFAULT_REPORT_PATH, DEFAULT_STUDENTS_PATH};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "recordbook", version, about = "Small keyed record-keeping exercises")]
pub struct CommandLine {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed electronics and groceries, then exercise stock errors.
    Warehouse,
    /// Seed the inventory log, save it, and reload it in a new session.
    Inventory {
        #[clap(long, default_value = DEFAULT_INVENTORY_PATH)]
        file: PathBuf,
    },
    /// Read student scores and write the grade report.
    Grades {
        #[clap(long, default_value = DEFAULT_STUDENTS_PATH)]
        input: PathBuf,
        #[clap(long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// List patients and look up prescriptions interactively.
    Clinic,
    /// Process sample transactions against a savings account.
    Finance,
}
