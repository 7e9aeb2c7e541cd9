//! Single-line `$settings[...]` assignment matching
//!
//! Decides whether a setting such as
//! `$settings['cache']['bins']['render'] = 'cache.backend.null';` is present
//! in a PHP file, and whether it is active or commented out with `#` or `//`.
//!
//! Patterns are anchored per line (multiline, CRLF aware) and only span
//! horizontal whitespace, so a match never reaches into a neighbouring line.
//! Every pattern has two named groups: `indent` (leading whitespace) and
//! `assignment` (variable, `=`, value and trailing `;`). The value itself is
//! also captured as `value` but is never rewritten.

use log::debug;
use regex::Regex;

use crate::address::{escape_comment_prefix, escape_php_variable, SettingAddress};
use crate::error::Result;

/// Single-line comment prefixes, tried in order. The first one that matches
/// is the one recorded as the setting's comment style.
pub const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// Prefix used when commenting a setting out.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Pattern fragment matching `<var> = <value>;`.
fn assignment_pattern(php_var: &str) -> String {
    format!(
        r"(?P<assignment>{}[ \t]*=[ \t]*(?P<value>.+);)",
        escape_php_variable(php_var)
    )
}

/// Build the pattern matching an active (uncommented) assignment line.
pub fn uncommented_pattern(php_var: &str) -> String {
    format!(r"(?mR)^(?P<indent>[ \t]*){}$", assignment_pattern(php_var))
}

/// Build the pattern matching an assignment line commented out with `prefix`.
pub fn commented_pattern(prefix: &str, php_var: &str) -> String {
    format!(
        r"(?mR)^(?P<indent>[ \t]*){}[ \t]*{}$",
        escape_comment_prefix(prefix),
        assignment_pattern(php_var)
    )
}

/// Where a setting stands in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// No line, commented or not, assigns the setting.
    Absent,
    /// An uncommented assignment exists.
    Active,
    /// Only a commented-out assignment exists, using this prefix.
    Commented(&'static str),
}

/// State of one setting address within one file's contents.
///
/// Computed once by [`LineSettingState::inspect`] and discarded after the
/// toggle decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSettingState {
    pub commented: bool,
    pub uncommented: bool,
    /// The first prefix from [`COMMENT_PREFIXES`] that matched, if any.
    pub comment_style: Option<&'static str>,
}

impl LineSettingState {
    pub fn inspect(text: &str, address: &SettingAddress) -> Result<Self> {
        let php_var = address.php_variable();

        let uncommented = Regex::new(&uncommented_pattern(&php_var))?.is_match(text);

        let mut comment_style = None;
        for prefix in COMMENT_PREFIXES {
            if Regex::new(&commented_pattern(prefix, &php_var))?.is_match(text) {
                comment_style = Some(prefix);
                break;
            }
        }

        let state = Self {
            commented: comment_style.is_some(),
            uncommented,
            comment_style,
        };
        debug!("{} state: {:?}", php_var, state);

        Ok(state)
    }

    pub fn exists(&self) -> bool {
        self.commented || self.uncommented
    }

    /// Collapse the flags into a single status.
    ///
    /// A file carrying both an active and a commented assignment for the
    /// same address counts as [`LineStatus::Active`].
    pub fn status(&self) -> LineStatus {
        match (self.uncommented, self.comment_style) {
            (true, _) => LineStatus::Active,
            (false, Some(prefix)) => LineStatus::Commented(prefix),
            (false, None) => LineStatus::Absent,
        }
    }
}

/// True if the setting appears in `text`, commented or not.
pub fn setting_exists(text: &str, address: &SettingAddress) -> Result<bool> {
    Ok(LineSettingState::inspect(text, address)?.exists())
}

/// True if an uncommented assignment of the setting appears in `text`.
pub fn is_uncommented(text: &str, address: &SettingAddress) -> Result<bool> {
    let pattern = uncommented_pattern(&address.php_variable());
    Ok(Regex::new(&pattern)?.is_match(text))
}

/// True if a commented-out assignment of the setting appears in `text`.
pub fn is_commented(text: &str, address: &SettingAddress) -> Result<bool> {
    Ok(LineSettingState::inspect(text, address)?.commented)
}
