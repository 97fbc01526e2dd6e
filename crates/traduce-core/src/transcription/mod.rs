//! Transcription stage: audio file in, plain text out.
//!
//! The only backend today shells out to a whisper.cpp binary. The trait seam
//! exists so the pipeline can be exercised with fake engines in tests and so
//! further engines can be added without touching the orchestrator.

mod whisper_cpp;

pub use whisper_cpp::{WhisperCpp, transcript_output_path};

use anyhow::Result;
use std::path::Path;

/// An external speech-to-text engine.
pub trait TranscriptionEngineBackend {
    /// Transcribe a pre-recorded audio file. `Err` means the engine could not
    /// produce a transcript (process failure, missing result file); the
    /// pipeline absorbs it into an empty result.
    fn transcribe(&self, audio: &Path, language: &str) -> Result<String>;

    /// Identifier used in operator-facing messages.
    fn name(&self) -> &str;
}
