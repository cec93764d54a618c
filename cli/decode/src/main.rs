//! qp-decode CLI
//!
//! Resolves captured queue message payloads to S3 object paths.

use clap::Parser;
use qp_cli_common::{format_number, format_seconds};
use qp_decoder::MessageDecoder;

mod args;
mod run;

use args::Cli;

/// Exit code for an invalid decoder configuration.
const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code when some payloads failed to decode.
const EXIT_PARTIAL_FAILURE: i32 = 4;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for resolved paths)
    qp_cli_common::init_logging(args.log_level)?;

    // Configuration is validated before any input is read
    let decoder = match run::build_config(&args).and_then(|config| MessageDecoder::new(&config)) {
        Ok(decoder) => decoder,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let stats = run::execute(&args, &decoder)?;

    // Report results to stderr
    eprintln!();
    eprintln!("Decoding completed ({}):", decoder.format());
    eprintln!("  Payloads:  {}", format_number(stats.total()));
    eprintln!("  Accepted:  {}", format_number(stats.accepted));
    eprintln!("  Skipped:   {}", format_number(stats.skipped));
    eprintln!("  Failed:    {}", format_number(stats.failed));
    eprintln!(
        "  Duration:  {}",
        format_seconds(stats.duration().num_milliseconds())
    );

    if stats.has_failures() {
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }

    Ok(())
}
