//! # Console Output
//!
//! Color handling for the CLI and rendering of the end-of-run event log.
//!
//! Colors follow `--color=always|never|auto`. In auto mode the usual
//! environment conventions apply: `NO_COLOR` (https://no-color.org/),
//! `CLICOLOR=0`, `CLICOLOR_FORCE=1` and `TERM=dumb`.
//!
//! ## Usage
//!
//! ```rust
//! use drupal_dev_mode::output::{emoji, render_log_table, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("never");
//! println!("{} Toggling dev mode...", emoji(&config, "🔧", "[RUN]"));
//!
//! let table = render_log_table(&["Updated web/sites/development.services.yml".to_string()], &config);
//! assert!(table.contains("| 1 | Updated web/sites/development.services.yml |"));
//! ```

use std::env;

use clap::ValueEnum;
use console::{measure_text_width, style};

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

/// Whether console output may use colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve `choice` against the environment.
    ///
    /// `Always` wins over `NO_COLOR`. In `Auto` mode colors are off when
    /// `NO_COLOR` is set (even empty), when `CLICOLOR=0`, when `TERM=dumb`,
    /// or when stdout is not a terminal and `CLICOLOR_FORCE` is not set.
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Same as [`OutputConfig::new`], taking the flag as text. Anything other
    /// than `always` or `never` means auto.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let choice = ColorChoice::from_str(color_flag, true).unwrap_or_default();
        Self::new(choice)
    }

    fn detect_color_support() -> bool {
        // https://no-color.org/
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Render event log lines as a numbered two-column table.
///
/// The header is bold when colors are enabled. An empty log renders a
/// single-row table saying so.
pub fn render_log_table(lines: &[String], config: &OutputConfig) -> String {
    const INDEX_HEADER: &str = "#";
    const MESSAGE_HEADER: &str = "Event";

    let rows: Vec<(String, &str)> = if lines.is_empty() {
        vec![(String::new(), "(no events)")]
    } else {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| ((i + 1).to_string(), line.as_str()))
            .collect()
    };

    let index_width = rows
        .iter()
        .map(|(index, _)| index.len())
        .max()
        .unwrap_or(0)
        .max(INDEX_HEADER.len());
    let message_width = rows
        .iter()
        .map(|(_, message)| measure_text_width(message))
        .max()
        .unwrap_or(0)
        .max(MESSAGE_HEADER.len());

    let border = format!(
        "+{}+{}+",
        "-".repeat(index_width + 2),
        "-".repeat(message_width + 2)
    );
    let row = |index: &str, message: &str| {
        format!(
            "| {}{} | {}{} |",
            index,
            " ".repeat(index_width - measure_text_width(index)),
            message,
            " ".repeat(message_width - measure_text_width(message))
        )
    };

    let header = row(INDEX_HEADER, MESSAGE_HEADER);
    let header = if config.use_color {
        style(header).bold().to_string()
    } else {
        header
    };

    let mut table = vec![border.clone(), header, border.clone()];
    table.extend(rows.iter().map(|(index, message)| row(index, message)));
    table.push(border);
    table.join("\n")
}
