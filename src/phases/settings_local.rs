//! Stage 4: Cache Settings
//!
//! Toggles each configured `$settings[...]` cache line in settings.local.php,
//! feeding the result of one toggle into the next. Settings that are not in
//! the file are skipped with a warning and do not fail the stage.

use std::path::Path;

use log::{error, info};

use super::PipelineEvent;
use crate::address::SettingAddress;
use crate::engine::toggle_line;
use crate::error::Error;
use crate::filesystem::FileStore;

/// Execute Stage 4: Toggle cache settings
///
/// With no addresses configured the file is neither read nor written.
pub fn execute(
    fs: &mut dyn FileStore,
    path: &Path,
    addresses: &[SettingAddress],
) -> PipelineEvent {
    if addresses.is_empty() {
        info!("No cache settings to toggle");
        return PipelineEvent::SettingsLocalUnchanged {
            path: path.to_path_buf(),
        };
    }

    let content = match fs.read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let error = Error::Read {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", error);
            return PipelineEvent::SettingsLocalReadFailed { error };
        }
    };

    let mut buffer = content;
    let mut changes = Vec::with_capacity(addresses.len());
    for address in addresses {
        let (updated, change) = match toggle_line(&buffer, address) {
            Ok(result) => result,
            Err(error) => {
                error!("{}: {}", path.display(), error);
                return PipelineEvent::SettingsLocalReadFailed { error };
            }
        };
        buffer = updated;
        changes.push((address.clone(), change));
    }

    if let Err(source) = fs.write(path, &buffer) {
        let error = Error::Write {
            path: path.to_path_buf(),
            source,
        };
        error!("{}", error);
        return PipelineEvent::SettingsLocalWriteFailed { error };
    }

    info!("Updated {}", path.display());
    PipelineEvent::SettingsLocalWritten {
        path: path.to_path_buf(),
        changes,
    }
}
