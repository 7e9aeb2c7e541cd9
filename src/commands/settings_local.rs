//! # Settings-Local Command Implementation
//!
//! Runs only the settings.php stage, with an explicit mode. `enable` and
//! `disable` leave the file content as is when it is already in the requested
//! state, so they are safe to repeat.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};
use drupal_dev_mode::engine::BlockMode;
use drupal_dev_mode::error::Error;
use drupal_dev_mode::filesystem::DiskFS;
use drupal_dev_mode::output::emoji;
use drupal_dev_mode::paths::SETTINGS_FILE;
use drupal_dev_mode::phases::stage3;

use crate::cli::GlobalArgs;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Uncomment the inclusion block
    Enable,
    /// Comment out the inclusion block
    Disable,
    /// Flip the inclusion block
    Toggle,
}

impl From<Mode> for BlockMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Enable => BlockMode::Enable,
            Mode::Disable => BlockMode::Disable,
            Mode::Toggle => BlockMode::Toggle,
        }
    }
}

/// Enable, disable or toggle the settings.local.php inclusion
#[derive(Args, Debug)]
pub struct SettingsLocalArgs {
    #[arg(value_enum)]
    pub mode: Mode,
}

/// Execute the `settings-local` command.
pub fn execute(args: SettingsLocalArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let config = global.load_config()?;
    let paths = global.resolve_paths(&config)?;
    let out = global.output();

    let Some(settings_php) = paths.settings_php.as_path() else {
        return Err(Error::PathUnresolved {
            file: SETTINGS_FILE.to_string(),
            path: paths.settings_php.to_string(),
        }
        .into());
    };

    let event = stage3::execute(
        &mut DiskFS,
        settings_php,
        &config.block(),
        args.mode.into(),
    );
    for line in event.log_lines() {
        println!("{}", line);
    }

    match event.into_failure() {
        None => Ok(ExitCode::SUCCESS),
        Some((_, error)) => {
            eprintln!("{} {}", emoji(&out, "❌", "[FAIL]"), error);
            Ok(ExitCode::FAILURE)
        }
    }
}
