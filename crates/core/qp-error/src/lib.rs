//! Error types and classification for queuepath.
//!
//! This crate provides:
//! - [`QpError`] - Top-level error enum for the decoder and its callers
//! - [`ConfigError`] - Construction-time failures (bad format, bad expression)
//! - [`ParseError`] - Per-message failures (bad payload, missing or mistyped field)
//! - [`ErrorCategory`] for skip/dead-letter/abort decision making
//!
//! The two domain enums are deliberately disjoint. A [`ConfigError`] can only
//! come out of building a decoder; a [`ParseError`] can only come out of
//! decoding one payload with an already-built decoder.

use thiserror::Error;

/// Top-level error type for queuepath.
#[derive(Error, Debug)]
pub enum QpError {
    /// Invalid decoder configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single payload could not be resolved to a path
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QpError {
    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is a per-message parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Configuration errors, detected once when a decoder is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The format identifier is not one of the supported formats
    #[error("unknown message format '{format}' (expected one of: plain, sns, json, s3::ObjectCreated)")]
    UnknownFormat { format: String },

    /// The format needs an extraction expression but none was given
    #[error("message format '{format}' requires a non-empty expression")]
    MissingExpression { format: String },

    /// The extraction expression does not compile
    #[error("invalid expression '{expression}' for message format '{format}': {reason}")]
    InvalidExpression {
        format: String,
        expression: String,
        reason: String,
    },

    /// A path filter glob does not compile
    #[error("invalid path filter '{pattern}': {reason}")]
    InvalidPathFilter { pattern: String, reason: String },

    /// The configuration document could not be read or deserialized
    #[error("failed to load configuration: {0}")]
    Load(String),
}

/// Per-message errors, returned by a built decoder for one bad payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Payload is not valid JSON
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// The expression selected nothing
    #[error("'{expression}' not found in payload")]
    NotFound { expression: String },

    /// The expression selected a value that is not a string
    #[error("'{expression}' resolved to {found}, expected string")]
    WrongType {
        expression: String,
        found: &'static str,
    },

    /// The expression failed at runtime (e.g. a function got a wrongly typed argument)
    #[error("'{expression}' could not be evaluated: {reason}")]
    Evaluation { expression: String, reason: String },
}

/// Error classification for message handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The decoder cannot run - fix configuration before starting.
    Fatal,

    /// This message will never decode - skip it or send it to a DLQ.
    ///
    /// Redelivering the same body yields the same failure.
    Permanent,

    /// Failure not caused by the payload itself - redelivery may succeed.
    Transient,
}

impl ErrorCategory {
    /// Returns true if redelivering the message may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient)
    }
}

/// Classifies an error to determine how the queue consumer should react.
pub fn classify_error(error: &QpError) -> ErrorCategory {
    match error {
        QpError::Config(_) => ErrorCategory::Fatal,
        QpError::Parse(_) => ErrorCategory::Permanent,
        QpError::Other(_) => ErrorCategory::Transient,
    }
}

/// Result type alias using QpError.
pub type Result<T> = std::result::Result<T, QpError>;
