//! Preflight checks and operator-facing printing.

use anyhow::{Context, Result};
use std::path::Path;
use traduce_core::{JobConfig, OllamaRunner, Settings};

/// Verify the audio file exists and, for WAV input, that the header parses.
/// Catches unreadable input before any external process is spawned.
pub fn check_audio_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("Audio file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    if extension.as_deref() == Some("wav") {
        hound::WavReader::open(path)
            .map(|_| ())
            .with_context(|| format!("{} is not a readable WAV file", path.display()))?;
    }

    Ok(())
}

pub fn ensure_whisper_installed(binary_path: &str) {
    if traduce_core::process::run_capture(binary_path, ["-h"]).is_err() {
        eprintln!("Error: whisper.cpp binary not found at '{binary_path}'.");
        eprintln!("\ntraduce shells out to whisper.cpp for transcription.");
        eprintln!("Build it and point traduce at the binary:");
        eprintln!("  git clone https://github.com/ggerganov/whisper.cpp && make -C whisper.cpp");
        eprintln!("  traduce --whisper-path whisper.cpp/main ...");
        eprintln!("Or set the TRADUCE_WHISPER_PATH environment variable.\n");
        std::process::exit(1);
    }
}

pub fn ensure_ollama_installed(binary_path: &str) {
    if !OllamaRunner::is_installed(binary_path) {
        eprintln!("Error: ollama is not installed or not in PATH.");
        eprintln!("\ntraduce shells out to ollama for translation.");
        eprintln!("Install it from https://ollama.com/download, then pull a model:");
        eprintln!("  ollama pull llama3\n");
        std::process::exit(1);
    }
}

/// Configuration summary banner printed before the pipeline runs.
pub fn print_job_summary(job: &JobConfig, settings: &Settings) {
    let audio = if job.pre_recorded {
        job.audio_path().display().to_string()
    } else {
        "None".to_string()
    };

    println!("****************************************");
    println!("Transcription model : {}", job.engine);
    println!("Using prerecorded audio file : {audio}");
    println!("Input  language : {}", job.input_language);
    println!("Output language : {}", job.output_language);
    println!("Translation model : {}", settings.ollama.model);
    println!("****************************************");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_audio_file_is_rejected() {
        let err = check_audio_file(Path::new("/nonexistent/clip.wav")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn non_wav_file_only_needs_to_exist() {
        let file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
        check_audio_file(file.path()).unwrap();
    }

    #[test]
    fn garbage_wav_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(b"not a wav header").unwrap();
        let err = check_audio_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a readable WAV"));
    }
}
