//! Command to filename preview.

use cmdo_core::output::sanitize_cmd;

use crate::cli::SanitizeArgs;
use crate::error::CliError;

/// Run the sanitize command
pub fn run_sanitize(args: SanitizeArgs) -> Result<(), CliError> {
    for command in &args.commands {
        println!("{}", sanitize_cmd(command));
    }
    Ok(())
}
