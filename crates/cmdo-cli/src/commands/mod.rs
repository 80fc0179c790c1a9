//! Command implementations.

pub mod sanitize;
pub mod write;

pub use sanitize::run_sanitize;
pub use write::run_write;
