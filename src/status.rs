//! Read-only inspection of the dev mode files
//!
//! Reports the state a toggle run would start from, using the same matchers as
//! the pipeline. Nothing is written. Each file is inspected independently, so
//! one unreadable file does not hide the state of the others.

use std::fmt;
use std::path::Path;

use crate::address::SettingAddress;
use crate::config::DevModeConfig;
use crate::error::{Error, Result};
use crate::filesystem::FileStore;
use crate::matcher::{BlockState, LineSettingState, LineStatus, SettingsLocalBlock};
use crate::merge::yaml::{bool_at, parse_document, PARAMETERS_KEY};
use crate::paths::{
    FilePathSet, ResolvedPath, DEVELOPMENT_SERVICES_FILE, SETTINGS_FILE, SETTINGS_LOCAL_FILE,
};

/// Result of inspecting one file.
#[derive(Debug)]
pub enum Inspection<T> {
    Inspected(T),
    /// The file's path was not resolved.
    Unresolved,
    Failed(Error),
}

impl<T> Inspection<T> {
    pub fn as_inspected(&self) -> Option<&T> {
        match self {
            Inspection::Inspected(value) => Some(value),
            _ => None,
        }
    }

    fn run(path: &ResolvedPath, inspect: impl FnOnce(&Path) -> Result<T>) -> Self {
        match path.as_path() {
            Some(path) => match inspect(path) {
                Ok(value) => Inspection::Inspected(value),
                Err(error) => Inspection::Failed(error),
            },
            None => Inspection::Unresolved,
        }
    }
}

/// Current Twig options. `None` means the leaf is missing or not a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwigStatus {
    pub debug: Option<bool>,
    pub auto_reload: Option<bool>,
}

impl fmt::Display for TwigStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |value: Option<bool>| value.map_or("unset".to_string(), |v| v.to_string());
        write!(
            f,
            "debug = {}, auto_reload = {}",
            render(self.debug),
            render(self.auto_reload)
        )
    }
}

/// State of the settings.local.php inclusion block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Enabled,
    Disabled,
    NotFound,
}

impl From<BlockState> for BlockStatus {
    /// When both forms are present the commented one wins, matching what a
    /// toggle would do.
    fn from(state: BlockState) -> Self {
        if state.commented {
            BlockStatus::Disabled
        } else if state.uncommented {
            BlockStatus::Enabled
        } else {
            BlockStatus::NotFound
        }
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockStatus::Enabled => f.write_str("settings.local.php inclusion enabled"),
            BlockStatus::Disabled => f.write_str("settings.local.php inclusion disabled"),
            BlockStatus::NotFound => f.write_str("settings.local.php inclusion block not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingStatus {
    pub address: SettingAddress,
    pub status: LineStatus,
}

impl fmt::Display for SettingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            LineStatus::Absent => write!(f, "{} absent", self.address),
            LineStatus::Active => write!(f, "{} active", self.address),
            LineStatus::Commented(prefix) => {
                write!(f, "{} commented ({})", self.address, prefix)
            }
        }
    }
}

#[derive(Debug)]
pub struct StatusReport {
    pub paths: FilePathSet,
    pub twig: Inspection<TwigStatus>,
    pub block: Inspection<BlockStatus>,
    pub cache_settings: Inspection<Vec<SettingStatus>>,
}

impl StatusReport {
    /// Display lines, grouped by file.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(section_line(
            DEVELOPMENT_SERVICES_FILE,
            &self.paths.development_services_yaml,
            &self.twig,
            |twig| twig.to_string(),
        ));
        lines.push(section_line(
            SETTINGS_FILE,
            &self.paths.settings_php,
            &self.block,
            |block| block.to_string(),
        ));

        match &self.cache_settings {
            Inspection::Inspected(settings) if !settings.is_empty() => {
                lines.extend(
                    settings
                        .iter()
                        .map(|setting| format!("{}: {}", SETTINGS_LOCAL_FILE, setting)),
                );
            }
            other => lines.push(section_line(
                SETTINGS_LOCAL_FILE,
                &self.paths.settings_local_php,
                other,
                |_| "no cache settings configured".to_string(),
            )),
        }

        lines
    }
}

fn section_line<T>(
    file: &str,
    path: &ResolvedPath,
    inspection: &Inspection<T>,
    render: impl FnOnce(&T) -> String,
) -> String {
    match inspection {
        Inspection::Inspected(value) => format!("{}: {}", file, render(value)),
        Inspection::Unresolved => format!("{}: path is {}", file, path),
        Inspection::Failed(error) => format!("{}: {}", file, error),
    }
}

/// Inspect all three files.
pub fn inspect(fs: &dyn FileStore, paths: &FilePathSet, config: &DevModeConfig) -> StatusReport {
    let block = config.block();

    StatusReport {
        paths: paths.clone(),
        twig: Inspection::run(&paths.development_services_yaml, |path| {
            twig_status(fs, path, &config.twig_config_key)
        }),
        block: Inspection::run(&paths.settings_php, |path| block_status(fs, path, &block)),
        cache_settings: Inspection::run(&paths.settings_local_php, |path| {
            setting_statuses(fs, path, &config.cache_settings)
        }),
    }
}

fn read(fs: &dyn FileStore, path: &Path) -> Result<String> {
    fs.read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn twig_status(fs: &dyn FileStore, path: &Path, twig_key: &str) -> Result<TwigStatus> {
    let content = read(fs, path)?;
    let doc = parse_document(&content).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(TwigStatus {
        debug: bool_at(&doc, &[PARAMETERS_KEY, twig_key, "debug"]),
        auto_reload: bool_at(&doc, &[PARAMETERS_KEY, twig_key, "auto_reload"]),
    })
}

pub fn block_status(
    fs: &dyn FileStore,
    path: &Path,
    block: &SettingsLocalBlock,
) -> Result<BlockStatus> {
    let content = read(fs, path)?;
    Ok(BlockState::inspect(&content, block).into())
}

pub fn setting_statuses(
    fs: &dyn FileStore,
    path: &Path,
    addresses: &[SettingAddress],
) -> Result<Vec<SettingStatus>> {
    if addresses.is_empty() {
        return Ok(Vec::new());
    }

    let content = read(fs, path)?;
    addresses
        .iter()
        .map(|address| {
            Ok(SettingStatus {
                address: address.clone(),
                status: LineSettingState::inspect(&content, address)?.status(),
            })
        })
        .collect()
}
