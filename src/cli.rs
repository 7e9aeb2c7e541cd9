//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drupal_dev_mode::output::ColorChoice;

use crate::commands;

/// Toggle Drupal dev mode: Twig debugging, settings.local.php and cache bins
#[derive(Parser, Debug)]
#[command(name = "toggle-dev-mode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `toggle`)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,

    /// Set log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory containing the Drupal install (docroot, drupal or web).
    /// Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Site directory under sites/, overriding the configuration file
    #[arg(long, global = true, value_name = "NAME")]
    pub site: Option<String>,

    /// Configuration file (defaults to .dev-mode.yaml in the root directory)
    #[arg(long, global = true, value_name = "FILE", env = "DEV_MODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Toggle dev mode on or off across all three files
    Toggle(commands::toggle::ToggleArgs),

    /// Show the current dev mode state without changing anything
    Status(commands::status::StatusArgs),

    /// Show where the dev mode files were found
    Paths(commands::paths::PathsArgs),

    /// Enable, disable or toggle only the settings.local.php inclusion
    SettingsLocal(commands::settings_local::SettingsLocalArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);

        let global = self.global;
        match self.command {
            None => commands::toggle::execute(commands::toggle::ToggleArgs::default(), &global),
            Some(Commands::Toggle(args)) => commands::toggle::execute(args, &global),
            Some(Commands::Status(args)) => commands::status::execute(args, &global),
            Some(Commands::Paths(args)) => commands::paths::execute(args, &global),
            Some(Commands::SettingsLocal(args)) => commands::settings_local::execute(args, &global),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

/// Install `env_logger`, with `RUST_LOG` overriding `level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
