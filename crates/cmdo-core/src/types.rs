//! Type definitions shared between the execution layer and the writers.
//!
//! Devices and responses arrive from the driver that ran the commands; the
//! writers only read them.

use serde::{Deserialize, Serialize};

use crate::output::OutputMode;

/// A target device and the commands that were sent to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Hostname or address the driver connected to
    pub hostname: String,
    /// Driver platform name (e.g. "cisco_iosxe")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Commands in the order they were sent
    #[serde(default)]
    pub send_commands: Vec<String>,
}

impl Device {
    pub fn new(hostname: impl Into<String>, send_commands: Vec<String>) -> Self {
        Self {
            hostname: hostname.into(),
            platform: None,
            send_commands,
        }
    }
}

/// Result of a single command.
///
/// Mirrors the driver's response record; writers only read `result`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Command text as sent on the channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_input: Option<String>,
    /// Raw output returned by the device
    #[serde(default)]
    pub result: String,
    /// Whether the driver flagged the output as a failure
    #[serde(default)]
    pub failed: bool,
    /// Time spent on the command, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

impl Response {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ..Default::default()
        }
    }
}

/// Ordered results of all commands sent to one device.
///
/// Positionally aligned with [`Device::send_commands`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiResponse {
    pub responses: Vec<Response>,
}

impl MultiResponse {
    pub fn new(responses: Vec<Response>) -> Self {
        Self { responses }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Whether any command in the set failed.
    pub fn failed(&self) -> bool {
        self.responses.iter().any(|r| r.failed)
    }
}

impl<S: Into<String>> FromIterator<S> for MultiResponse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Response::new).collect())
    }
}

/// Process-wide settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Output mode selector ("file" or "stdout")
    #[serde(default = "default_output", alias = "outputMode")]
    pub output: String,
    /// Append a timestamp to the file output root
    #[serde(default, alias = "timestampOutputs")]
    pub timestamp: bool,
}

fn default_output() -> String {
    OutputMode::Stdout.as_str().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            timestamp: false,
        }
    }
}
