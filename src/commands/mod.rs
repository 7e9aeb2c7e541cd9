//! # CLI Command Implementations
//!
//! Each subcommand of `toggle-dev-mode` lives in its own file, with an `Args`
//! struct derived using `clap` and an `execute` function that calls into the
//! `drupal_dev_mode` library.
//!
//! The helpers below turn the global flags into the configuration and file
//! paths every command starts from.

pub mod completions;
pub mod paths;
pub mod settings_local;
pub mod status;
pub mod toggle;

use std::path::PathBuf;

use anyhow::{Context, Result};
use drupal_dev_mode::config::{self, DevModeConfig};
use drupal_dev_mode::output::OutputConfig;
use drupal_dev_mode::paths::{find_install_path, FilePathSet};
use log::debug;

use crate::cli::GlobalArgs;

impl GlobalArgs {
    /// Base directory searched for the Drupal install.
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("Failed to determine the current directory"),
        }
    }

    /// Load the configuration file and apply flag overrides.
    pub fn load_config(&self) -> Result<DevModeConfig> {
        let base = self.base_dir()?;
        let mut config = config::load(self.config.as_deref(), &base)?;

        if let Some(site) = &self.site {
            config.site = site.clone();
        }

        debug!("Using configuration: {:?}", config);
        Ok(config)
    }

    /// Locate the install and build the file path set for `config`.
    pub fn resolve_paths(&self, config: &DevModeConfig) -> Result<FilePathSet> {
        let base = self.base_dir()?;
        let install = find_install_path(&base, &config.install_dirs);
        Ok(FilePathSet::resolve(install.as_deref(), &config.site))
    }

    pub fn output(&self) -> OutputConfig {
        OutputConfig::new(self.color)
    }
}
