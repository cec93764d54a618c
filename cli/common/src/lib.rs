//! Shared utilities for queuepath CLI binaries.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_number, format_seconds};
pub use logging::init_logging;
