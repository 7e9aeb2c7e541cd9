//! Stage 1: Path Verification
//!
//! Checks that all three files were discovered before anything is touched.
//! A single missing file (rendered as `false`) stops the run, and the failure
//! event lists every path so the user sees the whole picture at once.

use log::{debug, warn};

use super::PipelineEvent;
use crate::paths::FilePathSet;

/// Execute Stage 1: Verify discovered paths
pub fn execute(paths: &FilePathSet) -> PipelineEvent {
    match paths.verify() {
        Ok(verified) => {
            debug!("All Drupal file paths resolved");
            PipelineEvent::PathsVerified { paths: verified }
        }
        Err(error) => {
            warn!("{}", error);
            PipelineEvent::PathsVerifyFailed {
                paths: paths.clone(),
                error,
            }
        }
    }
}
