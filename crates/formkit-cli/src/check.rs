//! # Check Subcommand
//!
//! Validates a document in one normalizing pass. With `--write`, the
//! normalized document (coerced values, filled defaults, stripped
//! properties) replaces the file, in the same format it was read in. The
//! file is written whether or not the document is valid.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use formkit_schema::FacadeConfig;

use crate::{is_yaml, load_document, load_validator, EXIT_INVALID, EXIT_VALID};

/// Arguments for the `formkit check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document to check.
    #[arg(long)]
    pub data: PathBuf,

    /// Write the normalized document back to the data file.
    #[arg(long)]
    pub write: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when the document is valid, 1 when it is not.
pub fn run_check(args: &CheckArgs, config: &FacadeConfig) -> Result<u8> {
    let validator = load_validator(&args.schema, config)?;
    let document = load_document(&args.data)?;

    let result = validator.parse(&document)?;
    if result.is_valid {
        println!("valid: {}", args.data.display());
    } else {
        println!("invalid: {}", args.data.display());
        for issue in &result.errors {
            println!("  {issue}");
        }
    }

    if args.write {
        write_document(&args.data, &result.data)?;
        tracing::info!(data = %args.data.display(), "wrote normalized document");
    }

    Ok(if result.is_valid { EXIT_VALID } else { EXIT_INVALID })
}

/// Serialize `document` to `path` as YAML or pretty JSON, chosen by
/// extension.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(document).context("failed to serialize YAML")?
    } else {
        let mut json = serde_json::to_string_pretty(document).context("failed to serialize JSON")?;
        json.push('\n');
        json
    };
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
