//! The two-stage pipeline: transcribe, then translate.
//!
//! Strictly sequential and fully blocking. Configuration problems are hard
//! errors raised before any process is spawned; external process failures are
//! reported to the operator and absorbed into an empty outcome so the caller
//! always gets a result plus the elapsed wall-clock time.

use std::time::Instant;

use crate::error::ConfigError;
use crate::job::{JobConfig, PipelineOutcome};
use crate::transcription::TranscriptionEngineBackend;
use crate::translation::TranslationEngineBackend;

/// Run the full pipeline for one job.
///
/// Returns `Err` only for configuration errors. Stage failures (including an
/// empty transcript) yield an `Ok` outcome with empty text.
pub fn run_pipeline(
    job: &JobConfig,
    transcriber: &dyn TranscriptionEngineBackend,
    translator: &dyn TranslationEngineBackend,
) -> Result<PipelineOutcome, ConfigError> {
    let start = Instant::now();

    // Live capture is unsupported; fail before anything is spawned.
    if !job.pre_recorded {
        return Err(ConfigError::LiveCaptureUnsupported);
    }

    let text = match transcriber.transcribe(job.audio_path(), &job.input_language) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Transcription with {} failed: {err:#}", transcriber.name());
            String::new()
        }
    };

    if text.is_empty() {
        // Nothing to translate; skip the second stage entirely.
        eprintln!("Error: transcription produced no text.");
        return Ok(PipelineOutcome {
            text: String::new(),
            elapsed: start.elapsed(),
        });
    }

    crate::verbose!("transcript ({} chars), translating", text.len());

    let translation = match translator.translate(&text, &job.output_language) {
        Ok(translation) => translation,
        Err(err) => {
            eprintln!("Translation with {} failed: {err:#}", translator.name());
            String::new()
        }
    };

    Ok(PipelineOutcome {
        text: translation,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscriptionEngine;
    use anyhow::{Result, anyhow};
    use std::cell::{Cell, RefCell};
    use std::path::Path;

    struct FakeTranscriber {
        result: Result<String, String>,
        calls: Cell<usize>,
    }

    impl FakeTranscriber {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: Cell::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: Cell::new(0),
            }
        }
    }

    impl TranscriptionEngineBackend for FakeTranscriber {
        fn transcribe(&self, _audio: &Path, _language: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.result
                .clone()
                .map_err(|message| anyhow!("{message}"))
        }

        fn name(&self) -> &str {
            "fake-transcriber"
        }
    }

    struct FakeTranslator {
        result: Result<String, String>,
        seen: RefCell<Vec<(String, String)>>,
    }

    impl FakeTranslator {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.borrow().len()
        }
    }

    impl TranslationEngineBackend for FakeTranslator {
        fn translate(&self, text: &str, output_language: &str) -> Result<String> {
            self.seen
                .borrow_mut()
                .push((text.to_string(), output_language.to_string()));
            self.result
                .clone()
                .map_err(|message| anyhow!("{message}"))
        }

        fn name(&self) -> &str {
            "fake-translator"
        }
    }

    fn job() -> JobConfig {
        JobConfig::new(
            "a.wav",
            TranscriptionEngine::WhisperCpp,
            true,
            "english",
            "russian",
        )
    }

    #[test]
    fn happy_path_returns_translation() {
        let transcriber = FakeTranscriber::ok("Hello world");
        let translator = FakeTranslator::ok("Привет мир");

        let outcome = run_pipeline(&job(), &transcriber, &translator).unwrap();

        assert_eq!(outcome.text, "Привет мир");
        assert_eq!(transcriber.calls.get(), 1);
        assert_eq!(
            translator.seen.borrow()[0],
            ("Hello world".to_string(), "russian".to_string())
        );
    }

    #[test]
    fn failed_transcription_skips_translation() {
        let transcriber = FakeTranscriber::failing("process exited with status 1");
        let translator = FakeTranslator::ok("never used");

        let outcome = run_pipeline(&job(), &transcriber, &translator).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(translator.calls(), 0);
    }

    #[test]
    fn empty_transcript_skips_translation() {
        let transcriber = FakeTranscriber::ok("");
        let translator = FakeTranslator::ok("never used");

        let outcome = run_pipeline(&job(), &transcriber, &translator).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(translator.calls(), 0);
    }

    #[test]
    fn failed_translation_yields_empty_outcome() {
        let transcriber = FakeTranscriber::ok("Bonjour");
        let translator = FakeTranslator::failing("process exited with status 1");

        let outcome = run_pipeline(&job(), &transcriber, &translator).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(translator.calls(), 1);
    }

    #[test]
    fn live_capture_fails_fast() {
        let mut live_job = job();
        live_job.pre_recorded = false;
        let transcriber = FakeTranscriber::ok("never used");
        let translator = FakeTranslator::ok("never used");

        let err = run_pipeline(&live_job, &transcriber, &translator).unwrap_err();

        assert_eq!(err, ConfigError::LiveCaptureUnsupported);
        assert_eq!(transcriber.calls.get(), 0);
        assert_eq!(translator.calls(), 0);
    }

    #[test]
    fn elapsed_covers_both_stages() {
        let transcriber = FakeTranscriber::ok("Hello");
        let translator = FakeTranslator::ok("Hallo");

        let outcome = run_pipeline(&job(), &transcriber, &translator).unwrap();

        assert!(outcome.elapsed >= std::time::Duration::ZERO);
    }
}
