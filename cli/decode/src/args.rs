//! CLI argument definitions for qp-decode.

use clap::{Parser, ValueEnum};
pub use qp_cli_common::LogLevel;
use std::path::PathBuf;

/// Resolve queue message payloads to S3 object paths.
///
/// Reads captured message bodies (one per line, or the whole input as one
/// body with --whole), decodes each with the configured message format and
/// prints the resolved paths to stdout.
///
/// ## Examples
///
/// SNS-wrapped paths captured from a queue:
///   qp-decode -f sns -i messages.jsonl
///
/// Custom JSON payloads:
///   qp-decode -f json -e "Detail.Location" < bodies.jsonl
///
/// One pretty-printed S3 event notification:
///   qp-decode -f s3::ObjectCreated --whole -i event.json
///
/// Configuration from a file, only keeping compressed logs:
///   qp-decode -c decoder.yaml -P "s3://logs/*.zst"
#[derive(Parser, Debug)]
#[command(name = "qp-decode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Decoder Configuration ===
    /// YAML decoder configuration file (flags override its values)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Message format: plain, sns, json or s3::ObjectCreated
    #[arg(short = 'f', long, env = "QP_MESSAGE_FORMAT")]
    pub format: Option<String>,

    /// JMESPath expression selecting the path (json, s3::ObjectCreated)
    #[arg(short = 'e', long, env = "QP_MESSAGE_EXPRESSION")]
    pub expression: Option<String>,

    /// Only accept paths matching this glob (repeatable, any match passes)
    #[arg(short = 'P', long = "path-filter")]
    pub path_filters: Vec<String>,

    // === Input ===
    /// Input file (defaults to stdin)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Treat the whole input as a single payload
    #[arg(long)]
    pub whole: bool,

    // === Output ===
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "paths")]
    pub output: OutputFormat,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Output format for resolved payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Accepted paths only, one per line
    Paths,
    /// One JSON object per payload with status, path and error
    Jsonl,
}
