//! Stage 2: Twig Debug
//!
//! Flips `parameters.<twig key>.debug` and `auto_reload` in
//! development.services.yml. The file is parsed, changed and serialized
//! again, so comments and key order in the original file are not preserved.

use std::path::Path;

use log::{error, info};

use super::PipelineEvent;
use crate::error::Error;
use crate::filesystem::FileStore;
use crate::merge::yaml::toggle_twig_debug;

/// Execute Stage 2: Toggle Twig debug options
pub fn execute(fs: &mut dyn FileStore, path: &Path, twig_key: &str) -> PipelineEvent {
    let content = match fs.read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let error = Error::Read {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", error);
            return PipelineEvent::TwigReadFailed { error };
        }
    };

    let (updated, config) = match toggle_twig_debug(&content, twig_key) {
        Ok(result) => result,
        Err(err) => {
            let error = Error::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            };
            error!("{}", error);
            return PipelineEvent::TwigParseFailed { error };
        }
    };

    if let Err(source) = fs.write(path, &updated) {
        let error = Error::Write {
            path: path.to_path_buf(),
            source,
        };
        error!("{}", error);
        return PipelineEvent::TwigWriteFailed { error };
    }

    info!(
        "Updated {} (debug: {}, auto_reload: {})",
        path.display(),
        config.debug,
        config.auto_reload
    );
    PipelineEvent::TwigWritten {
        path: path.to_path_buf(),
        config,
    }
}
