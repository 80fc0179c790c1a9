//! Recorded command results.
//!
//! A capture is what the execution layer hands over after running commands:
//! one entry per device, in the order the devices were processed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Device, MultiResponse};

/// Results for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapture {
    /// Inventory name, used for banners and output directories
    pub name: String,
    pub device: Device,
    #[serde(default)]
    pub responses: MultiResponse,
}

/// Results for every device in a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub devices: Vec<DeviceCapture>,
}

impl Capture {
    /// Parse a capture from JSON text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a capture file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }
}
