//! Stage 3: Local Settings Inclusion
//!
//! Swaps the commented and uncommented forms of the settings.local.php
//! inclusion block in settings.php. The block is matched as an exact
//! substring, and a file containing neither form fails the stage without
//! being written.

use std::path::Path;

use log::{error, info};

use super::PipelineEvent;
use crate::engine::{apply_block, BlockMode};
use crate::error::Error;
use crate::filesystem::FileStore;
use crate::matcher::SettingsLocalBlock;

/// Execute Stage 3: Toggle the settings.local.php inclusion block
///
/// `mode` is [`BlockMode::Toggle`] for a regular run. The forced modes are
/// used by the `settings-local` command and still rewrite the file when it
/// is already in the requested state.
pub fn execute(
    fs: &mut dyn FileStore,
    path: &Path,
    block: &SettingsLocalBlock,
    mode: BlockMode,
) -> PipelineEvent {
    let content = match fs.read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let error = Error::Read {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", error);
            return PipelineEvent::SettingsReadFailed { error };
        }
    };

    let Some(toggle) = apply_block(&content, block, mode) else {
        let error = Error::BlockNotFound {
            path: path.to_path_buf(),
        };
        error!("{}", error);
        return PipelineEvent::SettingsBlockNotFound { error };
    };

    if let Err(source) = fs.write(path, &toggle.text) {
        let error = Error::Write {
            path: path.to_path_buf(),
            source,
        };
        error!("{}", error);
        return PipelineEvent::SettingsWriteFailed { error };
    }

    info!("Updated {} ({})", path.display(), toggle.change.reason());
    PipelineEvent::SettingsWritten {
        path: path.to_path_buf(),
        change: toggle.change,
    }
}
