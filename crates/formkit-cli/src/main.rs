//! # formkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use formkit_cli::check::{run_check, CheckArgs};
use formkit_cli::config::load_config;
use formkit_cli::describe::{run_describe, DescribeArgs};
use formkit_cli::parse::{run_parse, ParseArgs};
use formkit_cli::EXIT_ERROR;

/// formkit: validate and normalize form data against schema fragments.
#[derive(Parser, Debug)]
#[command(name = "formkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the engine configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize a copy of a document and print data, validity and issues.
    Parse(ParseArgs),

    /// Validate a document, optionally writing the normalized form back.
    Check(CheckArgs),

    /// List top-level properties with their semantic types.
    Describe(DescribeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("formkit CLI starting");

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Parse(args) => run_parse(args, &config),
        Commands::Check(args) => run_check(args, &config),
        Commands::Describe(args) => run_describe(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
