//! traduce — transcribe an audio file with whisper.cpp and translate the
//! result with a local Ollama model.

mod app;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use traduce_core::{
    JobConfig, OllamaRunner, Settings, TranscriptionEngine, WhisperCpp, run_pipeline, set_verbose,
};

#[derive(Parser, Debug)]
#[command(
    name = "traduce",
    version,
    about = "Audio translator backed by whisper.cpp and Ollama"
)]
struct Cli {
    /// Path to the audio file to transcribe
    #[arg(long = "file")]
    file: PathBuf,

    /// Transcription engine (only 'whisper_cpp' is supported)
    #[arg(long = "transcription_model")]
    transcription_model: TranscriptionEngine,

    /// Use a pre-recorded audio file (live capture is unsupported)
    #[arg(long = "pre_recorded")]
    pre_recorded: bool,

    /// Language of the audio (e.g. 'english', 'chinese')
    #[arg(short = 'i', long = "input_language")]
    input_language: String,

    /// Target language for the translation (e.g. 'english', 'russian')
    #[arg(short = 'o', long = "output_language")]
    output_language: String,

    /// Path to the whisper.cpp binary (overrides settings and env)
    #[arg(long = "whisper-path")]
    whisper_path: Option<String>,

    /// Path to the whisper.cpp model file (overrides settings and env)
    #[arg(long = "whisper-model")]
    whisper_model: Option<String>,

    /// Ollama model to translate with (overrides settings and env)
    #[arg(long = "ollama-model")]
    ollama_model: Option<String>,

    /// Print diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let mut settings = Settings::load();
    if let Some(path) = cli.whisper_path {
        settings.whisper.binary_path = path;
    }
    if let Some(path) = cli.whisper_model {
        settings.whisper.model_path = path;
    }
    if let Some(model) = cli.ollama_model {
        settings.ollama.model = model;
    }

    let job = JobConfig::new(
        cli.file,
        cli.transcription_model,
        cli.pre_recorded,
        &cli.input_language,
        &cli.output_language,
    );

    app::print_job_summary(&job, &settings);

    if job.pre_recorded {
        app::check_audio_file(job.audio_path())?;
        app::ensure_whisper_installed(&settings.whisper.binary_path);
        app::ensure_ollama_installed(&settings.ollama.binary_path);
    }

    let transcriber = WhisperCpp::new(
        settings.whisper.binary_path.clone(),
        settings.whisper.model_path.clone(),
    );
    let translator = OllamaRunner::new(
        settings.ollama.binary_path.clone(),
        settings.ollama.model.clone(),
    );

    let outcome = run_pipeline(&job, &transcriber, &translator)?;

    println!("Elapsed time: {:.3} seconds", outcome.elapsed.as_secs_f64());
    println!("{}", style("Translation:").bold());
    println!("{}", outcome.text);

    if outcome.is_empty() {
        // A stage failed and was already reported; signal it to the shell.
        std::process::exit(1);
    }

    Ok(())
}
