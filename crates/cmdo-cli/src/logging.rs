//! Logging setup.

use std::io::Write;

use colored::*;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};

/// Map the `-v` count to a level filter for cmdo's own crates.
pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let env = Env::default().filter_or("RUST_LOG", "warn");

    let mut builder = Builder::from_env(env);
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if std::env::var("RUST_LOG").is_err() {
        let level = level_filter(verbose);
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("cmdo", level)
            .filter_module("cmdo_core", level);
    }

    builder.format(|buf, record| {
        let level = match record.level() {
            Level::Error => "[ERROR]".red().bold(),
            Level::Warn => "[WARN]".yellow(),
            Level::Info => "[INFO]".green(),
            Level::Debug => "[DEBUG]".cyan(),
            Level::Trace => "[TRACE]".dimmed(),
        };
        writeln!(buf, "{} {}", level, record.args())
    });

    builder.init();
}
