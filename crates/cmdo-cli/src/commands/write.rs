//! Writing recorded responses for all devices.

use colored::*;

use cmdo_core::capture::Capture;
use cmdo_core::clock::SystemClock;
use cmdo_core::config::load_config;
use cmdo_core::output::new_response_writer;
use cmdo_core::types::AppConfig;

use crate::cli::WriteArgs;
use crate::error::CliError;

/// Resolve the effective config: file values, then command line overrides.
fn resolve_config(args: &WriteArgs) -> Result<AppConfig, CliError> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if args.timestamp {
        config.timestamp = true;
    }

    Ok(config)
}

/// Run the write command
pub fn run_write(args: WriteArgs, strict: bool) -> Result<(), CliError> {
    let config = resolve_config(&args)?;
    let writer = new_response_writer(&config.output, &config, &SystemClock)?;

    let capture = Capture::read(&args.capture)?;
    if capture.devices.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "No devices in capture {}",
            args.capture.display()
        )));
    }

    if let Some(dir) = writer.output_dir() {
        log::info!(
            "Writing responses of {} device(s) to {}",
            capture.devices.len(),
            dir.display()
        );
    }

    let mut failed = 0;
    for entry in &capture.devices {
        if entry.responses.failed() {
            log::warn!("{}: driver reported failed commands", entry.name);
        }

        match writer.write_response(&entry.responses, &entry.name, &entry.device, &config) {
            Ok(()) => log::info!("{}: {} response(s) written", entry.name, entry.responses.len()),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "[FAIL]".red(), entry.name, e);
            }
        }
    }

    let succeeded = capture.devices.len() - failed;
    eprintln!(
        "\nSummary: {} succeeded, {} failed",
        succeeded.to_string().green(),
        failed.to_string().red()
    );

    if strict && failed > 0 {
        return Err(CliError::PartialFailure { succeeded, failed });
    }

    Ok(())
}
