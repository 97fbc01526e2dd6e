//! Persistent settings for the external tools.
//!
//! Stored as JSON under the user config dir (`~/.config/traduce/settings.json`
//! on Linux). Every field has a default, so a missing or partial file always
//! loads. Environment variables override the file; CLI flags override both
//! (applied by the caller).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::translation::DEFAULT_OLLAMA_MODEL;

pub const DEFAULT_WHISPER_BINARY: &str = "./whisper.cpp/main";
pub const DEFAULT_WHISPER_MODEL: &str = "./whisper.cpp/models/ggml-base.en.bin";
pub const DEFAULT_OLLAMA_BINARY: &str = "ollama";

/// whisper.cpp tool locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSettings {
    #[serde(default = "default_whisper_binary")]
    pub binary_path: String,
    #[serde(default = "default_whisper_model")]
    pub model_path: String,
}

fn default_whisper_binary() -> String {
    DEFAULT_WHISPER_BINARY.to_string()
}

fn default_whisper_model() -> String {
    DEFAULT_WHISPER_MODEL.to_string()
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            binary_path: default_whisper_binary(),
            model_path: default_whisper_model(),
        }
    }
}

/// Ollama tool location and model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaSettings {
    #[serde(default = "default_ollama_binary")]
    pub binary_path: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_binary() -> String {
    DEFAULT_OLLAMA_BINARY.to_string()
}

fn default_ollama_model() -> String {
    DEFAULT_OLLAMA_MODEL.to_string()
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            binary_path: default_ollama_binary(),
            model: default_ollama_model(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub whisper: WhisperSettings,
    #[serde(default)]
    pub ollama: OllamaSettings,
}

impl Settings {
    /// Load settings from disk, then apply environment overrides. A missing
    /// or unreadable file falls back to defaults rather than failing the run.
    pub fn load() -> Self {
        let mut settings: Self = Self::settings_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        settings.apply_env_overrides();
        settings
    }

    /// `~/.config/traduce/settings.json` (platform equivalent via `dirs`).
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("traduce").join("settings.json"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("TRADUCE_WHISPER_PATH") {
            self.whisper.binary_path = path;
        }
        if let Ok(path) = std::env::var("TRADUCE_WHISPER_MODEL") {
            self.whisper.model_path = path;
        }
        if let Ok(model) = std::env::var("TRADUCE_OLLAMA_MODEL") {
            self.ollama.model = model;
        }
    }
}
