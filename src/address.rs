//! Setting addresses and their PHP variable rendering
//!
//! A [`SettingAddress`] is an ordered, non-empty list of keys such as
//! `["cache", "bins", "render"]`. The same address can point into a nested
//! YAML mapping or at a single-line PHP assignment, where it renders as
//! `$settings['cache']['bins']['render']`.
//!
//! The escaping helpers here turn that rendered variable (and a comment
//! prefix) into text that can be embedded in a regular expression.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the PHP variable holding Drupal site settings.
pub const SETTINGS_VARIABLE: &str = "$settings";

/// An ordered key path identifying a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SettingAddress {
    keys: Vec<String>,
}

impl SettingAddress {
    /// Build an address, rejecting an empty key list or any empty key.
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

        if keys.is_empty() {
            return Err(Error::InvalidAddress {
                message: "an address needs at least one key".to_string(),
            });
        }

        if let Some(pos) = keys.iter().position(|k| k.is_empty()) {
            return Err(Error::InvalidAddress {
                message: format!("key {} of {:?} is empty", pos, keys),
            });
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Render as a PHP array access on `$settings`.
    ///
    /// ```
    /// use drupal_dev_mode::address::SettingAddress;
    ///
    /// let address = SettingAddress::new(["cache", "bins", "render"]).unwrap();
    /// assert_eq!(address.php_variable(), "$settings['cache']['bins']['render']");
    /// ```
    pub fn php_variable(&self) -> String {
        let mut var = String::from(SETTINGS_VARIABLE);
        for key in &self.keys {
            var.push_str("['");
            var.push_str(key);
            var.push_str("']");
        }
        var
    }
}

impl TryFrom<Vec<String>> for SettingAddress {
    type Error = Error;

    fn try_from(keys: Vec<String>) -> Result<Self> {
        Self::new(keys)
    }
}

impl From<SettingAddress> for Vec<String> {
    fn from(address: SettingAddress) -> Self {
        address.keys
    }
}

impl fmt::Display for SettingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.php_variable())
    }
}

/// Escape a rendered PHP variable for use inside a regular expression.
///
/// Every `$` and `[` is escaped, along with any other regex metacharacter a
/// key might contain. `]` is left alone since it is only special inside a
/// character class.
///
/// ```
/// use drupal_dev_mode::address::escape_php_variable;
///
/// assert_eq!(
///     escape_php_variable("$settings['cache']['bins']['render']"),
///     r"\$settings\['cache']\['bins']\['render']"
/// );
/// ```
pub fn escape_php_variable(var: &str) -> String {
    let mut escaped = String::with_capacity(var.len() + 8);
    for ch in var.chars() {
        if matches!(
            ch,
            '$' | '[' | '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '{' | '}' | '^'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Escape a single-line comment prefix (`#` or `//`) for use inside a
/// regular expression.
pub fn escape_comment_prefix(prefix: &str) -> String {
    prefix.replace('/', r"\/")
}
