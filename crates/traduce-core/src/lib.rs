pub mod config;
pub mod error;
pub mod job;
pub mod pipeline;
pub mod process;
pub mod settings;
pub mod transcription;
pub mod translation;
pub mod verbose;

pub use config::TranscriptionEngine;
pub use error::ConfigError;
pub use job::{JobConfig, PipelineOutcome};
pub use pipeline::run_pipeline;
pub use settings::Settings;
pub use transcription::{TranscriptionEngineBackend, WhisperCpp, transcript_output_path};
pub use translation::{OllamaRunner, TranslationEngineBackend, build_prompt};
pub use verbose::set_verbose;
