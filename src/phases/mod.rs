//! Implementation of the 4 stages of the dev mode toggle.
//!
//! ## Overview
//!
//! A run toggles three files, one stage per file, after checking that all of
//! them can be found:
//! 1. Path Verification - All three files resolved, or stop here
//! 2. Twig Debug - Toggle `debug`/`auto_reload` in development.services.yml
//! 3. Local Settings Inclusion - Toggle the settings.local.php include in settings.php
//! 4. Cache Settings - Toggle cache bin nullification in settings.local.php
//!
//! Each stage reads its file, computes new contents, writes it back and
//! reports a single [`PipelineEvent`]: a success carrying the stage's output,
//! or a failure carrying the [`Error`]. The
//! [`orchestrator`](orchestrator::Pipeline) only starts a stage in response
//! to the previous stage's success event, so a failure ends the run and
//! leaves later files untouched. Files already written stay written.

use std::fmt;
use std::path::PathBuf;

use crate::address::SettingAddress;
use crate::engine::{BlockChange, LineChange};
use crate::error::Error;
use crate::merge::TwigDebugConfig;
use crate::paths::{FilePathSet, VerifiedPaths};

// Stage modules
pub mod orchestrator;
pub mod settings;
pub mod settings_local;
pub mod twig;
pub mod verify;

// Stage modules by position in the run
pub use settings as stage3;
pub use settings_local as stage4;
pub use twig as stage2;
pub use verify as stage1;

/// One stage of the run, named after what it works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Paths,
    Twig,
    Settings,
    SettingsLocal,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Paths => "path verification",
            Stage::Twig => "development.services.yml",
            Stage::Settings => "settings.php",
            Stage::SettingsLocal => "settings.local.php",
        };
        f.write_str(name)
    }
}

/// Notification emitted when a stage finishes.
#[derive(Debug)]
pub enum PipelineEvent {
    PathsVerified {
        paths: VerifiedPaths,
    },
    PathsVerifyFailed {
        paths: FilePathSet,
        error: Error,
    },
    TwigWritten {
        path: PathBuf,
        config: TwigDebugConfig,
    },
    TwigReadFailed {
        error: Error,
    },
    TwigParseFailed {
        error: Error,
    },
    TwigWriteFailed {
        error: Error,
    },
    SettingsWritten {
        path: PathBuf,
        change: BlockChange,
    },
    SettingsReadFailed {
        error: Error,
    },
    SettingsBlockNotFound {
        error: Error,
    },
    SettingsWriteFailed {
        error: Error,
    },
    SettingsLocalWritten {
        path: PathBuf,
        changes: Vec<(SettingAddress, LineChange)>,
    },
    /// No cache settings were configured, so the file was not touched.
    SettingsLocalUnchanged {
        path: PathBuf,
    },
    /// The file could not be read, or a setting's pattern failed to build.
    SettingsLocalReadFailed {
        error: Error,
    },
    SettingsLocalWriteFailed {
        error: Error,
    },
}

impl PipelineEvent {
    /// Stable identifier, e.g. for observers filtering events.
    pub fn name(&self) -> &'static str {
        match self {
            PipelineEvent::PathsVerified { .. } => "paths_verified",
            PipelineEvent::PathsVerifyFailed { .. } => "paths_verify_failed",
            PipelineEvent::TwigWritten { .. } => "twig_written",
            PipelineEvent::TwigReadFailed { .. } => "twig_read_failed",
            PipelineEvent::TwigParseFailed { .. } => "twig_parse_failed",
            PipelineEvent::TwigWriteFailed { .. } => "twig_write_failed",
            PipelineEvent::SettingsWritten { .. } => "settings_written",
            PipelineEvent::SettingsReadFailed { .. } => "settings_read_failed",
            PipelineEvent::SettingsBlockNotFound { .. } => "settings_block_not_found",
            PipelineEvent::SettingsWriteFailed { .. } => "settings_write_failed",
            PipelineEvent::SettingsLocalWritten { .. } => "settings_local_written",
            PipelineEvent::SettingsLocalUnchanged { .. } => "settings_local_unchanged",
            PipelineEvent::SettingsLocalReadFailed { .. } => "settings_local_read_failed",
            PipelineEvent::SettingsLocalWriteFailed { .. } => "settings_local_write_failed",
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            PipelineEvent::PathsVerified { .. } | PipelineEvent::PathsVerifyFailed { .. } => {
                Stage::Paths
            }
            PipelineEvent::TwigWritten { .. }
            | PipelineEvent::TwigReadFailed { .. }
            | PipelineEvent::TwigParseFailed { .. }
            | PipelineEvent::TwigWriteFailed { .. } => Stage::Twig,
            PipelineEvent::SettingsWritten { .. }
            | PipelineEvent::SettingsReadFailed { .. }
            | PipelineEvent::SettingsBlockNotFound { .. }
            | PipelineEvent::SettingsWriteFailed { .. } => Stage::Settings,
            PipelineEvent::SettingsLocalWritten { .. }
            | PipelineEvent::SettingsLocalUnchanged { .. }
            | PipelineEvent::SettingsLocalReadFailed { .. }
            | PipelineEvent::SettingsLocalWriteFailed { .. } => Stage::SettingsLocal,
        }
    }

    /// The error carried by a failure event.
    pub fn error(&self) -> Option<&Error> {
        match self {
            PipelineEvent::PathsVerifyFailed { error, .. }
            | PipelineEvent::TwigReadFailed { error }
            | PipelineEvent::TwigParseFailed { error }
            | PipelineEvent::TwigWriteFailed { error }
            | PipelineEvent::SettingsReadFailed { error }
            | PipelineEvent::SettingsBlockNotFound { error }
            | PipelineEvent::SettingsWriteFailed { error }
            | PipelineEvent::SettingsLocalReadFailed { error }
            | PipelineEvent::SettingsLocalWriteFailed { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }

    /// Split a failure event into its stage and error.
    pub fn into_failure(self) -> Option<(Stage, Error)> {
        let stage = self.stage();
        match self {
            PipelineEvent::PathsVerifyFailed { error, .. }
            | PipelineEvent::TwigReadFailed { error }
            | PipelineEvent::TwigParseFailed { error }
            | PipelineEvent::TwigWriteFailed { error }
            | PipelineEvent::SettingsReadFailed { error }
            | PipelineEvent::SettingsBlockNotFound { error }
            | PipelineEvent::SettingsWriteFailed { error }
            | PipelineEvent::SettingsLocalReadFailed { error }
            | PipelineEvent::SettingsLocalWriteFailed { error } => Some((stage, error)),
            _ => None,
        }
    }

    /// Lines this event adds to the [`EventLog`].
    pub fn log_lines(&self) -> Vec<String> {
        match self {
            PipelineEvent::PathsVerified { .. } => Vec::new(),
            PipelineEvent::PathsVerifyFailed { paths, .. } => {
                let mut lines =
                    vec!["Unmet dependencies for Drupal dev mode to be enabled/disabled!".to_string()];
                lines.extend(paths.describe());
                lines
            }
            PipelineEvent::TwigWritten { path, .. } => vec![format!("Updated {}", path.display())],
            PipelineEvent::SettingsWritten { path, change } => {
                vec![format!("Updated {} ({})", path.display(), change.reason())]
            }
            PipelineEvent::SettingsLocalWritten { path, changes } => {
                let mut lines = vec![format!("Updated {}", path.display())];
                lines.extend(
                    changes
                        .iter()
                        .map(|(address, change)| format!("{} {}", address, change)),
                );
                lines
            }
            PipelineEvent::SettingsLocalUnchanged { path } => vec![format!(
                "No cache settings to toggle, left {} unchanged",
                path.display()
            )],
            other => other
                .error()
                .map(|error| vec![error.to_string()])
                .unwrap_or_default(),
        }
    }
}

/// Where a run is. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    PathsVerified,
    TwigToggled,
    SettingsLocalInclusionToggled,
    CacheSettingsToggled,
    Done,
    Failed(Stage),
}

impl PipelineState {
    /// The state after `event`.
    ///
    /// A failure from the stage that is due moves to `Failed`. A success moves
    /// one step forward. An event that does not belong to the current state
    /// leaves the state as it is. `Done` is reached through [`finish`].
    ///
    /// [`finish`]: PipelineState::finish
    pub fn advance(self, event: &PipelineEvent) -> PipelineState {
        use PipelineEvent as E;
        use PipelineState as S;

        if self.next_stage() == Some(event.stage()) && event.is_failure() {
            return S::Failed(event.stage());
        }

        match (self, event) {
            (S::Start, E::PathsVerified { .. }) => S::PathsVerified,
            (S::PathsVerified, E::TwigWritten { .. }) => S::TwigToggled,
            (S::TwigToggled, E::SettingsWritten { .. }) => S::SettingsLocalInclusionToggled,
            (S::SettingsLocalInclusionToggled, E::SettingsLocalWritten { .. })
            | (S::SettingsLocalInclusionToggled, E::SettingsLocalUnchanged { .. }) => {
                S::CacheSettingsToggled
            }
            (state, _) => state,
        }
    }

    /// The state once no events are left to process.
    ///
    /// Only a run that toggled the cache settings completes.
    pub fn finish(self) -> PipelineState {
        match self {
            PipelineState::CacheSettingsToggled => PipelineState::Done,
            state => state,
        }
    }

    /// The stage that runs from this state, if any.
    pub fn next_stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Start => Some(Stage::Paths),
            PipelineState::PathsVerified => Some(Stage::Twig),
            PipelineState::TwigToggled => Some(Stage::Settings),
            PipelineState::SettingsLocalInclusionToggled => Some(Stage::SettingsLocal),
            PipelineState::CacheSettingsToggled
            | PipelineState::Done
            | PipelineState::Failed(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }
}

/// Append-only list of status lines for end-of-run display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    lines: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn add_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Observer of pipeline events.
pub trait EventSink {
    fn notify(&mut self, event: &PipelineEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&PipelineEvent),
{
    fn notify(&mut self, event: &PipelineEvent) {
        self(event)
    }
}

/// State owned by a single run: the discovered paths, the event log and the
/// observers.
pub struct RunContext<'a> {
    paths: FilePathSet,
    log: EventLog,
    sinks: Vec<Box<dyn EventSink + 'a>>,
}

impl<'a> RunContext<'a> {
    pub fn new(paths: FilePathSet) -> Self {
        Self {
            paths,
            log: EventLog::new(),
            sinks: Vec::new(),
        }
    }

    /// Register an observer notified of every event, in order.
    pub fn with_sink(mut self, sink: impl EventSink + 'a) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn paths(&self) -> &FilePathSet {
        &self.paths
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_log(self) -> EventLog {
        self.log
    }

    /// Append the event's log lines and notify every observer.
    pub fn record(&mut self, event: &PipelineEvent) {
        self.log.add_all(event.log_lines());
        for sink in &mut self.sinks {
            sink.notify(event);
        }
    }
}

impl fmt::Debug for RunContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("paths", &self.paths)
            .field("log", &self.log)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
