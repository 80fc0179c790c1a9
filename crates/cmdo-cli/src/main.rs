//! cmdo - writes the output of commands run against network devices.
//!
//! Takes the recorded results of a run and prints them to the console or
//! stores them as a file tree, one directory per device.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Write(args) => commands::run_write(args, cli.strict),
        Commands::Sanitize(args) => commands::run_sanitize(args),
    }
}
