//! Error types for cmdo core.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Response writer errors
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("Invalid output mode '{0}', expected 'file' or 'stdout'")]
    InvalidOutputMode(String),

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid device name '{0}': must name a directory under the output root")]
    InvalidDeviceName(String),

    #[error("Device {device} has {commands} command(s) but {responses} response(s)")]
    Misaligned {
        device: String,
        commands: usize,
        responses: usize,
    },
}

/// Configuration and capture loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
