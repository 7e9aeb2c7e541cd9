//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a fake Drupal install in a
//! temporary directory, plus stock file contents to fill it with.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_drupal("web");
//!     fixture.command().arg("toggle").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::drupal;
    pub use super::TestFixture;
}

/// Stock Drupal file contents.
#[allow(dead_code)]
pub mod drupal {
    /// development.services.yml as shipped with Drupal core.
    pub const DEVELOPMENT_SERVICES: &str = r#"# Local development services.
#
# To activate this feature, follow the instructions at the top of the
# 'example.settings.local.php' file, which sits next to this file.
parameters:
  http.response.debug_cacheability_headers: true
services:
  cache.backend.null:
    class: Drupal\Core\Cache\NullBackendFactory
"#;

    /// The part of settings.php around the settings.local.php inclusion.
    pub const SETTINGS_PHP: &str = r#"<?php

// phpcs:ignoreFile

$databases = [];

$settings['hash_salt'] = '';

/**
 * Load local development override configuration, if available.
 */
# if (file_exists($app_root . '/' . $site_path . '/settings.local.php')) {
#   include $app_root . '/' . $site_path . '/settings.local.php';
# }
"#;

    /// settings.php with the inclusion block enabled.
    pub const SETTINGS_PHP_ENABLED: &str = r#"<?php

// phpcs:ignoreFile

$databases = [];

$settings['hash_salt'] = '';

/**
 * Load local development override configuration, if available.
 */
if (file_exists($app_root . '/' . $site_path . '/settings.local.php')) {
  include $app_root . '/' . $site_path . '/settings.local.php';
}
"#;

    /// Trimmed example.settings.local.php with the cache bins commented out.
    pub const SETTINGS_LOCAL_PHP: &str = r#"<?php

// phpcs:ignoreFile

$settings['container_yamls'][] = DRUPAL_ROOT . '/sites/development.services.yml';

/**
 * Disable the render cache.
 */
# $settings['cache']['bins']['render'] = 'cache.backend.null';

/**
 * Disable caching for migrations.
 */
# $settings['cache']['bins']['discovery_migration'] = 'cache.backend.memory';

/**
 * Disable Internal Page Cache.
 */
# $settings['cache']['bins']['page'] = 'cache.backend.null';

/**
 * Disable Dynamic Page Cache.
 */
# $settings['cache']['bins']['dynamic_page_cache'] = 'cache.backend.null';

$settings['skip_permissions_hardening'] = TRUE;
"#;
}

/// A temporary directory that can be populated with a Drupal install.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_drupal("docroot")
///     .with_file(".dev-mode.yaml", "site: default\n");
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    install_dir: Option<String>,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            install_dir: None,
        }
    }

    /// Lay out the three stock files for the `default` site under `install_dir`.
    pub fn with_drupal(self, install_dir: &str) -> Self {
        self.with_drupal_site(install_dir, "default")
    }

    /// Lay out the three stock files for `site` under `install_dir`.
    pub fn with_drupal_site(mut self, install_dir: &str, site: &str) -> Self {
        let sites = format!("{}/sites", install_dir);
        self = self
            .with_file(
                &format!("{}/development.services.yml", sites),
                drupal::DEVELOPMENT_SERVICES,
            )
            .with_file(
                &format!("{}/{}/settings.php", sites, site),
                drupal::SETTINGS_PHP,
            )
            .with_file(
                &format!("{}/{}/settings.local.php", sites, site),
                drupal::SETTINGS_LOCAL_PHP,
            );
        self.install_dir = Some(install_dir.to_string());
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a `.dev-mode.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".dev-mode.yaml", content)
    }

    /// Remove a file relative to the fixture root.
    pub fn without_file(self, path: &str) -> Self {
        std::fs::remove_file(self.path().join(path)).expect("Failed to remove file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the Drupal install laid out by `with_drupal`.
    pub fn install_path(&self) -> PathBuf {
        let dir = self
            .install_dir
            .as_deref()
            .expect("with_drupal was not called");
        self.path().join(dir)
    }

    /// Path of a file under the install's `sites` directory.
    pub fn sites_file(&self, relative: &str) -> PathBuf {
        self.install_path().join("sites").join(relative)
    }

    /// Read a file under the install's `sites` directory.
    pub fn read_sites_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.sites_file(relative)).expect("Failed to read file")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("toggle-dev-mode");
        cmd.current_dir(self.path())
            .env_remove("DEV_MODE_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lays_out_drupal() {
        let fixture = TestFixture::new().with_drupal("web");
        assert!(fixture.sites_file("development.services.yml").exists());
        assert!(fixture.sites_file("default/settings.php").exists());
        assert!(fixture.sites_file("default/settings.local.php").exists());
    }

    #[test]
    fn test_stock_services_is_valid_yaml() {
        serde_yaml::from_str::<serde_yaml::Value>(drupal::DEVELOPMENT_SERVICES)
            .expect("development.services.yml should be valid YAML");
    }
}
