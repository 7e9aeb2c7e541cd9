//! Default values for drupal-dev-mode configuration.
//!
//! This module provides centralized default values used across commands and
//! the pipeline, ensuring consistency and avoiding duplication.

use crate::address::SettingAddress;

/// Configuration file looked up in the working directory when `--config` is
/// not given.
pub const CONFIG_FILE_NAME: &str = ".dev-mode.yaml";

/// Directory names commonly used for a Drupal docroot, tried in order.
pub const COMMON_INSTALL_DIRS: [&str; 3] = ["docroot", "drupal", "web"];

/// Site directory under `sites/` used when none is configured.
pub const DEFAULT_SITE: &str = "default";

/// Key under `parameters` in development.services.yml holding Twig options.
pub const DEFAULT_TWIG_CONFIG_KEY: &str = "twig.config";

/// Cache bins nullified in settings.local.php while in dev mode.
const DEFAULT_CACHE_BINS: [&str; 3] = ["render", "page", "dynamic_page_cache"];

/// Returns the default list of cache setting addresses toggled in
/// settings.local.php.
pub fn default_cache_settings() -> Vec<SettingAddress> {
    DEFAULT_CACHE_BINS
        .iter()
        .filter_map(|bin| SettingAddress::new(["cache", "bins", *bin]).ok())
        .collect()
}
