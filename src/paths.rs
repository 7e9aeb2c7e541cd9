//! Locating the Drupal files involved in dev mode
//!
//! Discovery happens in two steps. [`find_install_path`] looks for the Drupal
//! docroot under a base directory. [`FilePathSet::resolve`] then builds the
//! three file paths under `sites/`. PHP settings files that do not exist are
//! recorded as [`ResolvedPath::Missing`] rather than failing, so that the
//! pipeline's verification stage can report all three at once.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::defaults::COMMON_INSTALL_DIRS;
use crate::error::{Error, Result};

pub const DEVELOPMENT_SERVICES_FILE: &str = "development.services.yml";
pub const SETTINGS_FILE: &str = "settings.php";
pub const SETTINGS_LOCAL_FILE: &str = "settings.local.php";

/// A file path that may not have been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    Found(PathBuf),
    Missing,
}

impl ResolvedPath {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ResolvedPath::Found(path) => Some(path),
            ResolvedPath::Missing => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedPath::Found(_))
    }
}

/// Renders the path, or `false` when missing.
impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedPath::Found(path) => write!(f, "{}", path.display()),
            ResolvedPath::Missing => f.write_str("false"),
        }
    }
}

/// The three files the pipeline edits, as discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePathSet {
    pub development_services_yaml: ResolvedPath,
    pub settings_php: ResolvedPath,
    pub settings_local_php: ResolvedPath,
}

/// A [`FilePathSet`] with every file present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPaths {
    pub development_services_yaml: PathBuf,
    pub settings_php: PathBuf,
    pub settings_local_php: PathBuf,
}

impl FilePathSet {
    /// A set with nothing found.
    pub fn unresolved() -> Self {
        Self {
            development_services_yaml: ResolvedPath::Missing,
            settings_php: ResolvedPath::Missing,
            settings_local_php: ResolvedPath::Missing,
        }
    }

    /// Build the file paths for `site` under `install_path`.
    ///
    /// development.services.yml ships with Drupal, so its path is taken as
    /// given. settings.php and settings.local.php are created per site and
    /// are only recorded if they exist.
    pub fn resolve(install_path: Option<&Path>, site: &str) -> Self {
        let Some(install_path) = install_path else {
            return Self::unresolved();
        };

        let sites = sites_path(install_path);
        let site_dir = sites.join(site);

        Self {
            development_services_yaml: ResolvedPath::Found(sites.join(DEVELOPMENT_SERVICES_FILE)),
            settings_php: existing(site_dir.join(SETTINGS_FILE)),
            settings_local_php: existing(site_dir.join(SETTINGS_LOCAL_FILE)),
        }
    }

    /// Whether all three files were found.
    pub fn dependencies_met(&self) -> bool {
        self.development_services_yaml.is_found()
            && self.settings_php.is_found()
            && self.settings_local_php.is_found()
    }

    /// Promote to [`VerifiedPaths`], or report the first missing file.
    pub fn verify(&self) -> Result<VerifiedPaths> {
        Ok(VerifiedPaths {
            development_services_yaml: require(
                &self.development_services_yaml,
                DEVELOPMENT_SERVICES_FILE,
            )?,
            settings_php: require(&self.settings_php, SETTINGS_FILE)?,
            settings_local_php: require(&self.settings_local_php, SETTINGS_LOCAL_FILE)?,
        })
    }

    /// One line per file, in the order the pipeline uses them.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(
                "{} path is {}",
                DEVELOPMENT_SERVICES_FILE, self.development_services_yaml
            ),
            format!("{} path is {}", SETTINGS_FILE, self.settings_php),
            format!("{} path is {}", SETTINGS_LOCAL_FILE, self.settings_local_php),
        ]
    }
}

fn require(path: &ResolvedPath, file: &str) -> Result<PathBuf> {
    path.as_path()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::PathUnresolved {
            file: file.to_string(),
            path: path.to_string(),
        })
}

fn existing(path: PathBuf) -> ResolvedPath {
    if path.exists() {
        ResolvedPath::Found(path)
    } else {
        warn!("The path {} is invalid!", path.display());
        ResolvedPath::Missing
    }
}

/// The `sites` directory of a Drupal install.
pub fn sites_path(install_path: &Path) -> PathBuf {
    install_path.join("sites")
}

/// Find the Drupal install directory under `base`.
///
/// Tries `docroot`, `drupal` and `web`, then each of `extra_dirs`, and
/// returns the first one that exists.
pub fn find_install_path(base: &Path, extra_dirs: &[String]) -> Option<PathBuf> {
    let candidates = COMMON_INSTALL_DIRS
        .iter()
        .copied()
        .chain(extra_dirs.iter().map(String::as_str));

    for dir_name in candidates {
        let candidate = base.join(dir_name);
        debug!("Looking for Drupal install at {}", candidate.display());
        if candidate.exists() {
            return Some(candidate);
        }
    }

    warn!(
        "Unable to find root of the Drupal installation under {}",
        base.display()
    );
    None
}
