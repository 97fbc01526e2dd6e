//! Configuration errors that abort a run before any process is spawned.
//!
//! Everything else that can go wrong (external process failure, missing
//! result file) is recoverable: the affected stage reports it and yields
//! empty text instead of failing the run.

use thiserror::Error;

/// Hard configuration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported transcription engine: {0}. Available: whisper_cpp")]
    UnsupportedEngine(String),

    #[error("live audio capture is not implemented; pass --pre_recorded with an audio file")]
    LiveCaptureUnsupported,
}
