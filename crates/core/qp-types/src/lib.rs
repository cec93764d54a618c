//! Core types for queuepath.
//!
//! This crate provides the types shared between the decoder and its callers:
//! - [`MessageFormat`] - The closed set of supported queue message formats
//! - [`DecoderConfig`] - Operator-facing decoder configuration

pub mod config;
pub mod format;

pub use config::*;
pub use format::*;
