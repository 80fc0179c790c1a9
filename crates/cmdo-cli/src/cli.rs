//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// cmdo - write network device command output to the console or to files
#[derive(Parser, Debug)]
#[command(name = "cmdo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exit non-zero when any device fails
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write recorded command responses for every device
    Write(WriteArgs),

    /// Show the file name a command is stored under
    Sanitize(SanitizeArgs),
}

// ==================== Write ====================

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Capture file with the recorded device responses (JSON)
    pub capture: PathBuf,

    /// Output mode: "file" or "stdout" (overrides the config file)
    #[arg(short, long, env = "CMDO_OUTPUT")]
    pub output: Option<String>,

    /// Append a timestamp to the output directory name
    #[arg(long)]
    pub timestamp: bool,

    /// Config file (default: platform config directory)
    #[arg(short, long, env = "CMDO_CONFIG")]
    pub config: Option<PathBuf>,
}

// ==================== Sanitize ====================

#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Commands to convert
    #[arg(required = true)]
    pub commands: Vec<String>,
}
