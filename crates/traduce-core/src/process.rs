//! Blocking runner for external tool invocations.
//!
//! Each stage of the pipeline blocks until its process exits; there is no
//! timeout, so a hung tool hangs the run.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Captured output of a finished external process.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Run a program to completion, capturing stdout and stderr.
///
/// A spawn failure (program missing, not executable) is an `Err`; a non-zero
/// exit is a normal return with `success == false` so callers can decide how
/// to report it.
pub fn run_capture<I, S>(program: &str, args: I) -> Result<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to run '{program}'"))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}
