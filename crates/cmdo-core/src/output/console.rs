//! Console output for command responses.

use std::io::{self, Write};

use colored::*;

use super::{OutputMode, ResponseWriter};
use crate::error::WriterError;
use crate::types::{AppConfig, Device, MultiResponse};

const BANNER_RULE: &str = "**************************";

/// Prints responses to stdout with a banner per device.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the device banner and every command/response pair to `out`.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        responses: &MultiResponse,
        name: &str,
        device: &Device,
    ) -> io::Result<()> {
        let banner = format!("\n{}\n{}\n{}\n", BANNER_RULE, name, BANNER_RULE);
        write!(out, "{}", banner.green())?;

        if device.send_commands.len() != responses.len() {
            log::warn!(
                "{}: {} command(s) but {} response(s), printing matched pairs only",
                name,
                device.send_commands.len(),
                responses.len()
            );
        }

        for (cmd, response) in device.send_commands.iter().zip(&responses.responses) {
            write!(out, "{}", format!("\n-- {}:\n", cmd).bold())?;
            writeln!(out, "{}", response.result)?;
        }

        out.flush()
    }
}

impl ResponseWriter for ConsoleWriter {
    fn write_response(
        &self,
        responses: &MultiResponse,
        name: &str,
        device: &Device,
        _config: &AppConfig,
    ) -> Result<(), WriterError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.render(&mut out, responses, name, device) {
            log::debug!("Failed to print responses for {}: {}", name, e);
        }
        Ok(())
    }

    fn mode(&self) -> OutputMode {
        OutputMode::Stdout
    }
}
