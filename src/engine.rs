//! Toggle engine
//!
//! Turns matcher findings into new file contents. All functions here are pure
//! over their inputs: they take the current text and return the new text, and
//! leave reading and writing files to the pipeline stages.
//!
//! Only comment markers are added or removed. Assignment values and every
//! line outside the matched ones are carried over byte for byte.

use std::fmt;

use log::{info, warn};
use regex::Regex;

use crate::address::SettingAddress;
use crate::error::Result;
use crate::matcher::line::{commented_pattern, uncommented_pattern, DEFAULT_COMMENT_PREFIX};
use crate::matcher::{BlockState, LineSettingState, LineStatus, SettingsLocalBlock};

/// What toggling a single-line setting did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    CommentedOut,
    /// Uncommented; carries the comment prefix that was stripped.
    Uncommented(&'static str),
    /// The setting was not in the text at all.
    Skipped,
}

impl fmt::Display for LineChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineChange::CommentedOut => f.write_str("commented out"),
            LineChange::Uncommented(_) => f.write_str("uncommented"),
            LineChange::Skipped => f.write_str("not found, skipped"),
        }
    }
}

/// Comment out every active assignment of `php_var`, keeping indentation.
pub fn comment_out(text: &str, php_var: &str) -> Result<String> {
    let re = Regex::new(&uncommented_pattern(php_var))?;
    let replacement = format!("${{indent}}{} ${{assignment}}", DEFAULT_COMMENT_PREFIX);
    Ok(re.replace_all(text, replacement.as_str()).into_owned())
}

/// Strip `prefix` from every assignment of `php_var` commented out with it.
pub fn uncomment(text: &str, prefix: &str, php_var: &str) -> Result<String> {
    let re = Regex::new(&commented_pattern(prefix, php_var))?;
    Ok(re.replace_all(text, "${indent}${assignment}").into_owned())
}

/// Toggle one setting, reporting what was done.
///
/// An active setting is commented out, even if a commented duplicate exists
/// too; a commented one is uncommented; an absent one leaves `text` as is.
pub fn toggle_line(text: &str, address: &SettingAddress) -> Result<(String, LineChange)> {
    let state = LineSettingState::inspect(text, address)?;
    let php_var = address.php_variable();

    match state.status() {
        LineStatus::Absent => {
            warn!("Setting {} does not exist, leaving it alone", php_var);
            Ok((text.to_string(), LineChange::Skipped))
        }
        LineStatus::Active => {
            info!("Commenting out {}", php_var);
            Ok((comment_out(text, &php_var)?, LineChange::CommentedOut))
        }
        LineStatus::Commented(prefix) => {
            info!("Uncommenting {}", php_var);
            Ok((
                uncomment(text, prefix, &php_var)?,
                LineChange::Uncommented(prefix),
            ))
        }
    }
}

/// Toggle one setting's commented state.
pub fn toggle_one(text: &str, address: &SettingAddress) -> Result<String> {
    toggle_line(text, address).map(|(text, _)| text)
}

/// Toggle each address in turn, threading the buffer through every step.
pub fn toggle_many(text: &str, addresses: &[SettingAddress]) -> Result<String> {
    addresses
        .iter()
        .try_fold(text.to_string(), |buffer, address| toggle_one(&buffer, address))
}

/// How to treat the settings.local.php inclusion block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Flip whichever form is present.
    #[default]
    Toggle,
    /// Make sure the block is uncommented.
    Enable,
    /// Make sure the block is commented out.
    Disable,
}

/// What applying a [`BlockMode`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockChange {
    Enabled,
    Disabled,
    AlreadyEnabled,
    AlreadyDisabled,
}

impl BlockChange {
    /// Human readable reason, used in logs and the event log.
    pub fn reason(&self) -> &'static str {
        match self {
            BlockChange::Enabled => "Enable settings.local.php inclusion",
            BlockChange::Disabled => "Disable settings.local.php inclusion",
            BlockChange::AlreadyEnabled => "settings.local.php inclusion is already enabled",
            BlockChange::AlreadyDisabled => "settings.local.php inclusion is already disabled",
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, BlockChange::Enabled | BlockChange::Disabled)
    }
}

/// New contents after applying a [`BlockMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockToggle {
    pub text: String,
    pub change: BlockChange,
}

/// Apply `mode` to the inclusion block in `text`.
///
/// Returns `None` when neither form of `block` is present. When both forms
/// are present, the commented one is treated as current, so toggling enables.
/// Only the first occurrence is replaced.
pub fn apply_block(
    text: &str,
    block: &SettingsLocalBlock,
    mode: BlockMode,
) -> Option<BlockToggle> {
    let state = BlockState::inspect(text, block);
    if !state.is_found() {
        return None;
    }

    let enable = |text: &str| BlockToggle {
        text: text.replacen(&block.commented, &block.uncommented, 1),
        change: BlockChange::Enabled,
    };
    let disable = |text: &str| BlockToggle {
        text: text.replacen(&block.uncommented, &block.commented, 1),
        change: BlockChange::Disabled,
    };
    let unchanged = |change| BlockToggle {
        text: text.to_string(),
        change,
    };

    let result = match mode {
        BlockMode::Toggle if state.commented => enable(text),
        BlockMode::Toggle => disable(text),
        BlockMode::Enable if state.commented => enable(text),
        BlockMode::Enable => unchanged(BlockChange::AlreadyEnabled),
        BlockMode::Disable if state.uncommented => disable(text),
        BlockMode::Disable => unchanged(BlockChange::AlreadyDisabled),
    };

    info!("{}", result.change.reason());
    Some(result)
}
