//! # Toggle Command Implementation
//!
//! This module implements the `toggle` subcommand, which is also what runs
//! when no subcommand is given. It resolves the three dev mode files, runs
//! the full pipeline against the real filesystem and prints the event log as
//! a table.
//!
//! The exit code is non-zero when any stage failed. Stages that completed
//! before the failure keep their changes, and the log says which ones did.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use drupal_dev_mode::filesystem::DiskFS;
use drupal_dev_mode::output::{emoji, render_log_table};
use drupal_dev_mode::phases::orchestrator::{Pipeline, PipelineOutcome};
use drupal_dev_mode::phases::RunContext;

use crate::cli::GlobalArgs;

/// Toggle dev mode on or off
#[derive(Args, Debug, Default)]
pub struct ToggleArgs {
    /// Only print the event log table, without the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `toggle` command.
pub fn execute(args: ToggleArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let config = global.load_config()?;
    let paths = global.resolve_paths(&config)?;
    let out = global.output();

    let mut fs = DiskFS;
    let mut ctx = RunContext::new(paths);
    let outcome = Pipeline::from_config(&config).run(&mut fs, &mut ctx);

    println!("{}", render_log_table(ctx.log().lines(), &out));

    match outcome {
        PipelineOutcome::Done => {
            if !args.quiet {
                println!("{} Dev mode toggled", emoji(&out, "✅", "[OK]"));
            }
            Ok(ExitCode::SUCCESS)
        }
        PipelineOutcome::Failed { stage, error } => {
            eprintln!(
                "{} Dev mode toggle stopped at {}: {}",
                emoji(&out, "❌", "[FAIL]"),
                stage,
                error
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
