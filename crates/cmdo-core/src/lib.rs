//! Shared core library for cmdo.
//!
//! Holds the device and response types handed over by the execution layer,
//! the configuration model, and the response writers that print command
//! output to the console or persist it to a file tree.

pub mod capture;
pub mod clock;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

pub use error::{CoreError, Result};
pub use output::{new_response_writer, OutputMode, ResponseWriter};
pub use types::{AppConfig, Device, MultiResponse, Response};
