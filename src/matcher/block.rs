//! settings.local.php inclusion block matching
//!
//! Drupal's stock settings.php ships a commented-out conditional that includes
//! settings.local.php. Detection is an exact substring test against the
//! commented and uncommented forms of that block, newlines and indentation
//! included. Anything that deviates from the literal text is reported as "not
//! found" rather than guessed at; callers with a customised settings.php can
//! supply their own pair via [`SettingsLocalBlock`].

use serde::{Deserialize, Serialize};

/// The inclusion block as shipped in default.settings.php, commented out.
pub const COMMENTED_BLOCK: &str = "
# if (file_exists($app_root . '/' . $site_path . '/settings.local.php')) {
#   include $app_root . '/' . $site_path . '/settings.local.php';
# }
";

/// The same block with the comment markers removed.
pub const UNCOMMENTED_BLOCK: &str = "
if (file_exists($app_root . '/' . $site_path . '/settings.local.php')) {
  include $app_root . '/' . $site_path . '/settings.local.php';
}
";

/// A commented/uncommented pair of literal blocks.
///
/// A custom pair replaces the default pair entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLocalBlock {
    pub commented: String,
    pub uncommented: String,
}

impl Default for SettingsLocalBlock {
    fn default() -> Self {
        Self {
            commented: COMMENTED_BLOCK.to_string(),
            uncommented: UNCOMMENTED_BLOCK.to_string(),
        }
    }
}

/// Which forms of a [`SettingsLocalBlock`] are present in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockState {
    pub commented: bool,
    pub uncommented: bool,
}

impl BlockState {
    pub fn inspect(text: &str, block: &SettingsLocalBlock) -> Self {
        Self {
            commented: text.contains(&block.commented),
            uncommented: text.contains(&block.uncommented),
        }
    }

    pub fn is_found(&self) -> bool {
        self.commented || self.uncommented
    }
}
