//! # Status Command Implementation
//!
//! Prints the current state of Twig debugging, the settings.local.php
//! inclusion and each configured cache setting. This command is read-only.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use drupal_dev_mode::filesystem::DiskFS;
use drupal_dev_mode::output::emoji;
use drupal_dev_mode::status;

use crate::cli::GlobalArgs;

/// Show the current dev mode state
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// Execute the `status` command.
pub fn execute(_args: StatusArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let config = global.load_config()?;
    let paths = global.resolve_paths(&config)?;
    let out = global.output();

    let report = status::inspect(&DiskFS, &paths, &config);

    println!("{} Drupal dev mode status", emoji(&out, "🔎", "[STATUS]"));
    for line in report.lines() {
        println!("  {}", line);
    }

    Ok(ExitCode::SUCCESS)
}
