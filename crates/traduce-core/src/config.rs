use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Available transcription engines
///
/// Only whisper.cpp is supported today; the enum exists so selection is
/// settled before any external process is spawned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptionEngine {
    #[default]
    WhisperCpp,
}

impl TranscriptionEngine {
    /// Get the string identifier for this engine
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionEngine::WhisperCpp => "whisper_cpp",
        }
    }

    /// Human-readable display name for this engine
    pub fn display_name(&self) -> &'static str {
        match self {
            TranscriptionEngine::WhisperCpp => "whisper.cpp",
        }
    }

    /// List all available engines
    pub fn all() -> &'static [TranscriptionEngine] {
        &[TranscriptionEngine::WhisperCpp]
    }
}

impl fmt::Display for TranscriptionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TranscriptionEngine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whisper_cpp" | "whisper-cpp" | "whispercpp" => Ok(TranscriptionEngine::WhisperCpp),
            _ => Err(ConfigError::UnsupportedEngine(s.to_string())),
        }
    }
}
