//! Per-invocation job configuration and pipeline outcome.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::TranscriptionEngine;

/// Everything one pipeline run needs, built once from user input.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub audio_path: PathBuf,
    pub engine: TranscriptionEngine,
    /// Live capture is unsupported; a run with `pre_recorded == false`
    /// fails before any process is spawned.
    pub pre_recorded: bool,
    pub input_language: String,
    pub output_language: String,
}

impl JobConfig {
    /// Build a job configuration. Language identifiers are normalized to
    /// lowercase so the external tools see consistent codes.
    pub fn new(
        audio_path: impl Into<PathBuf>,
        engine: TranscriptionEngine,
        pre_recorded: bool,
        input_language: &str,
        output_language: &str,
    ) -> Self {
        Self {
            audio_path: audio_path.into(),
            engine,
            pre_recorded,
            input_language: input_language.to_lowercase(),
            output_language: output_language.to_lowercase(),
        }
    }

    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }
}

/// Result of a pipeline run: the translated text (empty on a reported stage
/// failure) and the wall-clock duration of the whole run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub text: String,
    pub elapsed: Duration,
}

impl PipelineOutcome {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_are_lowercased() {
        let job = JobConfig::new(
            "a.wav",
            TranscriptionEngine::WhisperCpp,
            true,
            "English",
            "RUSSIAN",
        );
        assert_eq!(job.input_language, "english");
        assert_eq!(job.output_language, "russian");
    }
}
