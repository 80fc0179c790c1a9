//! Response writers.
//!
//! A writer is selected once per run from the configured output mode and
//! then called for every processed device.

pub mod console;
pub mod file;
pub mod sanitize;

pub use console::ConsoleWriter;
pub use file::FileWriter;
pub use sanitize::sanitize_cmd;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::SecondsFormat;

use crate::clock::Clock;
use crate::error::WriterError;
use crate::types::{AppConfig, Device, MultiResponse, Response};

/// Base name of the file output root
pub const OUTPUT_DIR: &str = "outputs";

/// Writes the responses collected from one device.
pub trait ResponseWriter: Send + Sync {
    /// Write all command responses of `device`, labelled with `name`
    fn write_response(
        &self,
        responses: &MultiResponse,
        name: &str,
        device: &Device,
        config: &AppConfig,
    ) -> Result<(), WriterError>;

    /// Output mode this writer implements
    fn mode(&self) -> OutputMode;

    /// Root directory written to, if any
    fn output_dir(&self) -> Option<&Path> {
        None
    }
}

/// Supported output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    File,
    Stdout,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::File => "file",
            OutputMode::Stdout => "stdout",
        }
    }

    /// Build the writer for this mode.
    pub fn writer(self, config: &AppConfig, clock: &dyn Clock) -> Box<dyn ResponseWriter> {
        match self {
            OutputMode::File => Box::new(FileWriter::new(output_root(config, clock))),
            OutputMode::Stdout => Box::new(ConsoleWriter::new()),
        }
    }
}

impl FromStr for OutputMode {
    type Err = WriterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(OutputMode::File),
            "stdout" => Ok(OutputMode::Stdout),
            other => Err(WriterError::InvalidOutputMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the writer for the given mode selector.
pub fn new_response_writer(
    mode: &str,
    config: &AppConfig,
    clock: &dyn Clock,
) -> Result<Box<dyn ResponseWriter>, WriterError> {
    let mode: OutputMode = mode.parse()?;
    log::debug!("Using {} response writer", mode);
    Ok(mode.writer(config, clock))
}

/// Name of the file output root, e.g. `outputs` or
/// `outputs_2026-10-17T10:00:00+02:00`.
pub fn output_root(config: &AppConfig, clock: &dyn Clock) -> String {
    if config.timestamp {
        format!(
            "{}_{}",
            OUTPUT_DIR,
            clock.now().to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    } else {
        OUTPUT_DIR.to_string()
    }
}

/// Pair every sent command with its response.
///
/// Fails when the two lists differ in length.
pub fn pair_responses<'a>(
    name: &str,
    device: &'a Device,
    responses: &'a MultiResponse,
) -> Result<Vec<(&'a str, &'a Response)>, WriterError> {
    if device.send_commands.len() != responses.len() {
        return Err(WriterError::Misaligned {
            device: name.to_string(),
            commands: device.send_commands.len(),
            responses: responses.len(),
        });
    }

    Ok(device
        .send_commands
        .iter()
        .map(String::as_str)
        .zip(responses.responses.iter())
        .collect())
}
