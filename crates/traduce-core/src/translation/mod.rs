//! Translation stage: text in one language, text in another.
//!
//! Backed by a local model runner invoked as a subprocess. Whatever the model
//! prints is the result; no structural validation is applied.

mod ollama;

pub use ollama::{DEFAULT_OLLAMA_MODEL, OllamaRunner};

use anyhow::Result;

/// An external text-to-text translation engine.
pub trait TranslationEngineBackend {
    /// Translate `text` into `output_language`. `Err` means the engine could
    /// not produce output; the pipeline absorbs it into an empty result.
    fn translate(&self, text: &str, output_language: &str) -> Result<String>;

    /// Identifier used in operator-facing messages.
    fn name(&self) -> &str;
}

/// The instruction prompt handed to the model runner.
pub fn build_prompt(text: &str, output_language: &str) -> String {
    format!("Translate the following text to {output_language}: {text}")
}
