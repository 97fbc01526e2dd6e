//! Ollama backend: `ollama run <model> "<prompt>"`, stdout captured.

use anyhow::Result;

use super::{TranslationEngineBackend, build_prompt};
use crate::process::run_capture;

pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Translation via the `ollama` CLI.
pub struct OllamaRunner {
    binary_path: String,
    model: String,
}

impl OllamaRunner {
    pub fn new(binary_path: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            model: model.into(),
        }
    }

    /// Check whether the ollama binary is reachable on this system.
    pub fn is_installed(binary_path: &str) -> bool {
        run_capture(binary_path, ["--version"]).is_ok()
    }
}

impl TranslationEngineBackend for OllamaRunner {
    fn translate(&self, text: &str, output_language: &str) -> Result<String> {
        let prompt = build_prompt(text, output_language);

        crate::verbose!("ollama: model={} prompt_len={}", self.model, prompt.len());

        let output = run_capture(&self.binary_path, ["run", &self.model, &prompt])?;

        if !output.success {
            anyhow::bail!("ollama exited with an error: {}", output.stderr.trim());
        }

        Ok(output.stdout.trim().to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `echo` stands in for a runner that prints its prompt back.
    #[test]
    fn captures_and_trims_stdout() {
        let runner = OllamaRunner::new("echo", "testmodel");
        let out = runner.translate("Hello", "russian").unwrap();
        assert_eq!(
            out,
            "run testmodel Translate the following text to russian: Hello"
        );
    }

    #[test]
    fn nonzero_exit_is_a_stage_failure() {
        let runner = OllamaRunner::new("false", DEFAULT_OLLAMA_MODEL);
        let err = runner.translate("Hello", "russian").unwrap_err();
        assert!(err.to_string().contains("exited with an error"));
    }

    #[test]
    fn missing_binary_reports_spawn_failure() {
        let runner = OllamaRunner::new("/nonexistent/ollama", DEFAULT_OLLAMA_MODEL);
        let err = runner.translate("Bonjour", "english").unwrap_err();
        assert!(err.to_string().contains("ollama"));
    }

    #[test]
    fn is_installed_false_for_missing_binary() {
        assert!(!OllamaRunner::is_installed("/nonexistent/ollama"));
    }
}
