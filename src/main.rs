//! # Toggle Dev Mode CLI
//!
//! This is the binary entry point for the `toggle-dev-mode` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Installing the logger.
//! - Executing the selected command and turning its result into an exit code.
//!
//! The core logic lives in the `drupal_dev_mode` library crate; the binary is
//! a thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
