//! whisper.cpp backend.
//!
//! Invokes the whisper.cpp CLI with `-otxt` and reads back the text file it
//! writes. The output location is pinned with `-of`, so the path we read is
//! exactly the path the tool was told to write.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::TranscriptionEngineBackend;
use crate::process::run_capture;

/// Transcription via the whisper.cpp command-line tool.
pub struct WhisperCpp {
    binary_path: String,
    model_path: String,
}

impl WhisperCpp {
    pub fn new(binary_path: impl Into<String>, model_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            model_path: model_path.into(),
        }
    }
}

/// Where the transcript for `audio` lands: the audio path with its extension
/// replaced by `.txt` (`speech.wav` -> `speech.txt`).
///
/// This is a convention of the external tool, not a free choice: whisper.cpp
/// appends `.txt` to whatever `-of` names, so we pass the stem and read
/// `<stem>.txt`.
pub fn transcript_output_path(audio: &Path) -> PathBuf {
    audio.with_extension("txt")
}

/// The `-of` argument: the transcript path without its `.txt` extension.
fn output_stem(audio: &Path) -> PathBuf {
    audio.with_extension("")
}

impl TranscriptionEngineBackend for WhisperCpp {
    fn transcribe(&self, audio: &Path, language: &str) -> Result<String> {
        let result_file = transcript_output_path(audio);
        let stem = output_stem(audio);

        crate::verbose!(
            "whisper.cpp: binary={} model={} audio={} -> {}",
            self.binary_path,
            self.model_path,
            audio.display(),
            result_file.display()
        );

        let args: [&OsStr; 9] = [
            OsStr::new("-m"),
            OsStr::new(&self.model_path),
            OsStr::new("-f"),
            audio.as_os_str(),
            OsStr::new("-l"),
            OsStr::new(language),
            OsStr::new("-otxt"),
            OsStr::new("-of"),
            stem.as_os_str(),
        ];
        let output = run_capture(&self.binary_path, args)?;

        if !output.success {
            anyhow::bail!(
                "whisper.cpp exited with an error: {}",
                output.stderr.trim()
            );
        }

        // A missing result file counts as a failed transcription, same as a
        // non-zero exit.
        let content = fs::read_to_string(&result_file).with_context(|| {
            format!(
                "whisper.cpp succeeded but the transcript {} is missing or unreadable",
                result_file.display()
            )
        })?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &str {
        "whisper.cpp"
    }
}
