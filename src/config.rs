//! # Configuration
//!
//! This module defines the optional `.dev-mode.yaml` configuration file and the
//! logic for loading it. Every field has a default matching a stock Drupal
//! install, so the file is only needed for non-standard layouts.
//!
//! ```yaml
//! # .dev-mode.yaml
//! install_dirs: [public_html]
//! site: example.org
//! twig_config_key: twig.config
//! cache_settings:
//!   - [cache, bins, render]
//!   - [cache, bins, page]
//! settings_local_block:
//!   commented: "\n# include __DIR__ . '/settings.local.php';\n"
//!   uncommented: "\ninclude __DIR__ . '/settings.local.php';\n"
//! ```
//!
//! Unknown keys are rejected, and every cache setting address is validated
//! while the file is parsed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::address::SettingAddress;
use crate::defaults::{
    default_cache_settings, CONFIG_FILE_NAME, DEFAULT_SITE, DEFAULT_TWIG_CONFIG_KEY,
};
use crate::error::{Error, Result};
use crate::matcher::SettingsLocalBlock;

/// Settings for one dev mode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevModeConfig {
    /// Install directory names tried after `docroot`, `drupal` and `web`.
    pub install_dirs: Vec<String>,
    /// Site directory under `sites/`.
    pub site: String,
    /// `$settings` addresses toggled in settings.local.php.
    pub cache_settings: Vec<SettingAddress>,
    /// Key under `parameters` holding the Twig options.
    pub twig_config_key: String,
    /// Replacement for the stock settings.local.php inclusion block.
    pub settings_local_block: Option<SettingsLocalBlock>,
}

impl Default for DevModeConfig {
    fn default() -> Self {
        Self {
            install_dirs: Vec::new(),
            site: DEFAULT_SITE.to_string(),
            cache_settings: default_cache_settings(),
            twig_config_key: DEFAULT_TWIG_CONFIG_KEY.to_string(),
            settings_local_block: None,
        }
    }
}

impl DevModeConfig {
    /// The inclusion block to match: the configured one, or Drupal's stock
    /// block.
    pub fn block(&self) -> SettingsLocalBlock {
        self.settings_local_block.clone().unwrap_or_default()
    }

    fn validate(self) -> Result<Self> {
        if self.site.is_empty() || self.site.contains(['/', '\\']) || self.site == ".." {
            return Err(Error::Config {
                message: format!("invalid site name '{}'", self.site),
                hint: Some("Use the directory name under sites/, e.g. 'default'".to_string()),
            });
        }

        if self.twig_config_key.is_empty() {
            return Err(Error::Config {
                message: "twig_config_key cannot be empty".to_string(),
                hint: Some(format!("The Drupal default is '{}'", DEFAULT_TWIG_CONFIG_KEY)),
            });
        }

        if let Some(block) = &self.settings_local_block {
            if block.commented.is_empty() || block.uncommented.is_empty() {
                return Err(Error::Config {
                    message: "settings_local_block needs both a commented and an uncommented form"
                        .to_string(),
                    hint: None,
                });
            }
        }

        Ok(self)
    }
}

/// Parse configuration from a YAML string. A document with nothing but blank
/// lines and comments yields the defaults.
pub fn parse(yaml_content: &str) -> Result<DevModeConfig> {
    let is_blank = yaml_content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if is_blank {
        return Ok(DevModeConfig::default());
    }

    let config: DevModeConfig = serde_yaml::from_str(yaml_content).map_err(|err| {
        let message = err.to_string();
        let hint = message.contains("unknown field").then(|| {
            "Known keys are install_dirs, site, cache_settings, twig_config_key and settings_local_block"
                .to_string()
        });
        Error::Config { message, hint }
    })?;

    config.validate()
}

/// Load configuration from a file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DevModeConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|err| Error::Config {
        message: format!("failed to read {}: {}", path.display(), err),
        hint: None,
    })?;
    parse(&content)
}

/// Load the configuration for a run.
///
/// An explicitly given file must exist. Otherwise `.dev-mode.yaml` in
/// `working_dir` is used if present, and the defaults if not.
pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<DevModeConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config {
                    message: format!("configuration file not found: {}", path.display()),
                    hint: None,
                });
            }
            from_file(path)
        }
        None => {
            let default_path: PathBuf = working_dir.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                from_file(default_path)
            } else {
                Ok(DevModeConfig::default())
            }
        }
    }
}
