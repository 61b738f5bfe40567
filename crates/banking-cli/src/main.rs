//! # banking CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use banking_cli::countries::{run_countries, CountriesArgs};
use banking_cli::iban::{run_iban, IbanArgs};
use banking_cli::swift::{run_swift, SwiftArgs};
use banking_cli::OutputFormat;

/// Exit code for operational failures.
const EXIT_ERROR: u8 = 2;

/// IBAN and SWIFT/BIC validation.
///
/// Validates codes against the built-in country registry and prints their
/// structured fields.
#[derive(Parser, Debug)]
#[command(name = "banking", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate IBANs and print their BBAN fields.
    Iban(IbanArgs),

    /// Validate SWIFT/BIC codes and print their fields.
    Swift(SwiftArgs),

    /// List the country registry, or show one country's BBAN layout.
    Countries(CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(format = ?cli.format, "banking CLI starting");

    let result = match &cli.command {
        Commands::Iban(args) => run_iban(args, cli.format),
        Commands::Swift(args) => run_swift(args, cli.format),
        Commands::Countries(args) => run_countries(args, cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
