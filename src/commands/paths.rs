//! # Paths Command Implementation
//!
//! Prints the resolved path of each dev mode file, with `false` for the ones
//! that were not found. Exits non-zero when any is missing, so scripts can
//! check that a toggle would be able to run.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use drupal_dev_mode::output::emoji;

use crate::cli::GlobalArgs;

/// Show where the dev mode files were found
#[derive(Args, Debug)]
pub struct PathsArgs {}

/// Execute the `paths` command.
pub fn execute(_args: PathsArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let config = global.load_config()?;
    let paths = global.resolve_paths(&config)?;
    let out = global.output();

    for line in paths.describe() {
        println!("{}", line);
    }

    if paths.dependencies_met() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} Unmet dependencies for Drupal dev mode to be enabled/disabled!",
            emoji(&out, "⚠️", "[WARN]")
        );
        Ok(ExitCode::FAILURE)
    }
}
