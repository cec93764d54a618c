//! Main execution logic for qp-decode CLI.

use anyhow::{Context, Result};
use qp_decoder::{DecodeStats, LineMode, MessageDecoder, PayloadReader, Resolved, StatsSnapshot};
use qp_error::{ConfigError, ParseError};
use qp_types::DecoderConfig;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tracing::{info, warn};

use crate::args::{Cli, OutputFormat};

/// Build the decoder configuration from the config file and flags.
pub fn build_config(args: &Cli) -> Result<DecoderConfig, ConfigError> {
    let mut config = match (&args.config, &args.format) {
        (Some(path), _) => DecoderConfig::from_yaml_file(path)?,
        (None, Some(format)) => DecoderConfig::new(format.as_str()),
        (None, None) => {
            return Err(ConfigError::Load(
                "either --config or --format is required".to_string(),
            ))
        }
    };

    if let Some(format) = &args.format {
        config.format = format.clone();
    }
    if let Some(expression) = &args.expression {
        config.expression = Some(expression.clone());
    }
    config.path_filters.extend(args.path_filters.iter().cloned());

    Ok(config)
}

/// Execute the decoder over the configured input.
pub fn execute(args: &Cli, decoder: &MessageDecoder) -> Result<StatsSnapshot> {
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mode = if args.whole {
        LineMode::Whole
    } else {
        LineMode::PerLine
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let stats = DecodeStats::new();

    process(decoder, input, mode, args.output, &mut output, &stats)?;
    output.flush().context("failed to flush output")?;

    Ok(stats.snapshot())
}

/// One line of JSONL output.
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> OutputRecord<'a> {
    fn from_outcome(outcome: &'a Result<Resolved, ParseError>) -> Self {
        match outcome {
            Ok(Resolved::Accepted(path)) => Self {
                status: "accepted",
                path: Some(path),
                error: None,
            },
            Ok(Resolved::Skipped(path)) => Self {
                status: "skipped",
                path: Some(path),
                error: None,
            },
            Err(e) => Self {
                status: "failed",
                path: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Resolve every payload from `input` and write results to `output`.
pub fn process<R: BufRead, W: Write>(
    decoder: &MessageDecoder,
    input: R,
    mode: LineMode,
    format: OutputFormat,
    output: &mut W,
    stats: &DecodeStats,
) -> Result<()> {
    for (index, payload) in PayloadReader::new(input, mode).enumerate() {
        let payload = payload?;
        let outcome = decoder.resolve(&payload);
        stats.record(&outcome);

        match &outcome {
            Ok(Resolved::Skipped(path)) => info!(payload = index + 1, path = %path, "Skipped path"),
            Err(e) => warn!(payload = index + 1, error = %e, "Failed to decode payload"),
            Ok(Resolved::Accepted(_)) => {}
        }

        match format {
            OutputFormat::Paths => {
                if let Ok(Resolved::Accepted(path)) = &outcome {
                    writeln!(output, "{path}").context("failed to write output")?;
                }
            }
            OutputFormat::Jsonl => {
                let record = OutputRecord::from_outcome(&outcome);
                serde_json::to_writer(&mut *output, &record)
                    .context("failed to write output")?;
                writeln!(output).context("failed to write output")?;
            }
        }
    }

    Ok(())
}
