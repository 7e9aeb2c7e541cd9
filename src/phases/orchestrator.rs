//! Orchestrator for a complete dev mode toggle
//!
//! This module chains the four stages. Stages are not called one after the
//! other directly: each stage's event is queued, and dequeuing a success event
//! is what starts the next stage. A failure event starts nothing, so the run
//! ends in [`PipelineState::Failed`] with later files untouched.

use std::collections::VecDeque;

use log::{debug, info};

use super::{
    stage1, stage2, stage3, stage4, PipelineEvent, PipelineState, RunContext, Stage,
};
use crate::address::SettingAddress;
use crate::config::DevModeConfig;
use crate::engine::BlockMode;
use crate::error::Error;
use crate::filesystem::FileStore;
use crate::matcher::SettingsLocalBlock;
use crate::paths::VerifiedPaths;

/// How a run ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    Done,
    Failed { stage: Stage, error: Error },
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Done)
    }

    /// The terminal state the run ended in.
    pub fn state(&self) -> PipelineState {
        match self {
            PipelineOutcome::Done => PipelineState::Done,
            PipelineOutcome::Failed { stage, .. } => PipelineState::Failed(*stage),
        }
    }
}

/// The settings a run uses, independent of where the files are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    twig_config_key: String,
    block: SettingsLocalBlock,
    cache_settings: Vec<SettingAddress>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&DevModeConfig::default())
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DevModeConfig) -> Self {
        Self {
            twig_config_key: config.twig_config_key.clone(),
            block: config.block(),
            cache_settings: config.cache_settings.clone(),
        }
    }

    /// Execute the complete toggle (Stages 1-4) against `ctx`'s paths.
    ///
    /// Every event is recorded in `ctx` before the next stage starts.
    pub fn run(&self, fs: &mut dyn FileStore, ctx: &mut RunContext<'_>) -> PipelineOutcome {
        let mut state = PipelineState::Start;
        let mut verified: Option<VerifiedPaths> = None;
        let mut queue = VecDeque::new();

        // Stage 1: Path Verification
        queue.push_back(stage1::execute(ctx.paths()));

        while let Some(event) = queue.pop_front() {
            ctx.record(&event);
            state = state.advance(&event);
            debug!("{} -> {:?}", event.name(), state);

            if let PipelineEvent::PathsVerified { paths } = &event {
                verified = Some(paths.clone());
            }

            if let Some(next) = self.next_stage(fs, &event, verified.as_ref()) {
                queue.push_back(next);
            }

            if let Some((stage, error)) = event.into_failure() {
                info!("Dev mode toggle stopped at {}", stage);
                return PipelineOutcome::Failed { stage, error };
            }
        }

        let state = state.finish();
        debug!("queue drained -> {:?}", state);
        debug_assert_eq!(state, PipelineState::Done);
        info!("Dev mode toggle complete");
        PipelineOutcome::Done
    }

    /// Run the stage that follows `event`, if it is a success event.
    fn next_stage(
        &self,
        fs: &mut dyn FileStore,
        event: &PipelineEvent,
        paths: Option<&VerifiedPaths>,
    ) -> Option<PipelineEvent> {
        let paths = paths?;
        match event {
            // Stage 2: Twig Debug
            PipelineEvent::PathsVerified { .. } => Some(stage2::execute(
                fs,
                &paths.development_services_yaml,
                &self.twig_config_key,
            )),
            // Stage 3: Local Settings Inclusion
            PipelineEvent::TwigWritten { .. } => Some(stage3::execute(
                fs,
                &paths.settings_php,
                &self.block,
                BlockMode::Toggle,
            )),
            // Stage 4: Cache Settings
            PipelineEvent::SettingsWritten { .. } => Some(stage4::execute(
                fs,
                &paths.settings_local_php,
                &self.cache_settings,
            )),
            _ => None,
        }
    }
}
